//! Static positional evaluation.

use super::pst::{MATERIAL, PIECE_SQUARE};
use super::state::Board;
use super::types::Color;

/// Score returned when a side is checkmated, from the winner's perspective.
pub const CHECKMATE_SCORE: i32 = 100_000;

impl Board {
    /// Score the position from White's perspective: positive favors White.
    ///
    /// Checkmate dominates everything; otherwise each live piece adds its
    /// material value plus the piece-square bonus for its (color-mirrored)
    /// square.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.is_checkmate(Color::White) {
            return -CHECKMATE_SCORE;
        }
        if self.is_checkmate(Color::Black) {
            return CHECKMATE_SCORE;
        }

        let mut score = 0;
        for color in [Color::White, Color::Black] {
            for (square, piece) in self.pieces_of(color) {
                let idx = match color {
                    Color::White => square.as_index(),
                    Color::Black => square.mirrored_index(),
                };
                let kind = piece.kind.index();
                score += color.sign() * (MATERIAL[kind] + PIECE_SQUARE[kind][idx]);
            }
        }
        score
    }
}
