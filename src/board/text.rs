//! Textual board snapshots.
//!
//! Eight rows of eight characters, rank 8 first: uppercase `KQRBNP` for
//! White, lowercase for Black, `.` for empty. This is the only wire format
//! the engine's collaborators see for a full position.
//!
//! The round trip preserves piece kinds, colors and positions but not the
//! `has_moved` / `en_passant_eligible` flags; parsed pieces get the
//! defaults.

use super::error::TextBoardError;
use super::state::Board;
use super::types::{Piece, Square};

impl Board {
    /// Render the board as an 8-row text snapshot.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(8 * 9);
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.piece_on(Square(rank, file)) {
                    Some(piece) => out.push(piece.to_text_char()),
                    None => out.push('.'),
                }
            }
            if rank > 0 {
                out.push('\n');
            }
        }
        out
    }

    /// Parse a text snapshot produced by [`Board::to_text`].
    pub fn from_text(text: &str) -> Result<Board, TextBoardError> {
        let rows: Vec<&str> = text.lines().collect();
        if rows.len() != 8 {
            return Err(TextBoardError::BadRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 8 {
                return Err(TextBoardError::BadRowWidth {
                    row: row_idx,
                    found: chars.len(),
                });
            }
            let rank = 7 - row_idx;
            for (file, &c) in chars.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_text_char(c)
                    .ok_or(TextBoardError::InvalidPiece { char: c })?;
                board.set_piece(Square(rank, file), piece);
            }
        }
        Ok(board)
    }
}
