//! Check detection and hypothetical-move simulation.

use super::state::Board;
use super::types::{Color, PieceKind, Square};

impl Board {
    /// A new board equal to `self` with the piece on `from` relocated to
    /// `to`, capturing whatever was there. Never mutates `self`.
    ///
    /// This is the plain relocate-and-capture form: castling rook shifts,
    /// en-passant pawn removal and promotion are controller-level side
    /// effects layered on top when they apply. Search and legality
    /// filtering both work on these snapshots.
    #[must_use]
    pub fn simulate(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        if let Some(piece) = next.take_piece(from) {
            next.set_piece(to, piece);
        }
        next
    }

    /// Castling gates beyond occupancy: a king may not castle while in
    /// check or across an attacked square. True for any move that is not a
    /// castle, so callers can apply it to every candidate uniformly.
    #[must_use]
    pub fn castle_passage_safe(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_on(from) else {
            return true;
        };
        if piece.kind != PieceKind::King {
            return true;
        }
        let shift = to.file() as isize - from.file() as isize;
        if shift.abs() != 2 {
            return true;
        }
        if self.is_in_check(piece.color) {
            return false;
        }
        let mid = Square(from.rank(), (from.file() + to.file()) / 2);
        !self.simulate(from, mid).is_in_check(piece.color)
    }

    /// Is `color`'s king attacked by any opposing piece?
    ///
    /// Short-circuits on the first attacker. A missing king (possible in
    /// hypothetical search positions) counts as not in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.king_square(color) else {
            return false;
        };
        self.pieces_of(color.opponent())
            .into_iter()
            .any(|(square, _)| self.pseudo_destinations(square).contains(&king_sq))
    }

    /// Is `color` checkmated?
    ///
    /// False immediately when not in check; otherwise every pseudo-legal
    /// move is simulated and checkmate holds only if none escapes check.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        !self.has_escape(color)
    }

    /// Is `color` stalemated (no legal move while not in check)?
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        if self.is_in_check(color) {
            return false;
        }
        !self.has_escape(color)
    }

    /// Does any pseudo-legal move for `color` leave its king out of check?
    fn has_escape(&self, color: Color) -> bool {
        for (from, _) in self.pieces_of(color) {
            for to in self.pseudo_destinations(from) {
                if !self.simulate(from, to).is_in_check(color) {
                    return true;
                }
            }
        }
        false
    }
}
