//! Pseudo-legal move generation, dispatched per piece kind.
//!
//! "Pseudo-legal" means the destinations satisfy movement patterns and
//! occupancy only; whether a move leaves the mover's own king in check is
//! the caller's job (the controller filters player moves up front, search
//! filters lazily per candidate).

use super::state::Board;
use super::types::{Color, Piece, PieceKind, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ROOK_RAYS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_RAYS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Pseudo-legal destinations for the piece on `from`.
    ///
    /// Returns an empty set for an empty square. Castling destinations are
    /// included when king and rook are unmoved and the squares between are
    /// empty; the attacked-square gates are enforced by the controller.
    #[must_use]
    pub fn pseudo_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_on(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::King => self.king_destinations(from, piece),
            PieceKind::Queen => {
                let mut out = self.ray_destinations(from, piece.color, &ROOK_RAYS);
                out.extend(self.ray_destinations(from, piece.color, &BISHOP_RAYS));
                out
            }
            PieceKind::Rook => self.ray_destinations(from, piece.color, &ROOK_RAYS),
            PieceKind::Bishop => self.ray_destinations(from, piece.color, &BISHOP_RAYS),
            PieceKind::Knight => self.step_destinations(from, piece.color, &KNIGHT_DELTAS),
            PieceKind::Pawn => self.pawn_destinations(from, piece.color),
        }
    }

    /// Slide along each ray until blocked; the blocker is a destination only
    /// if it is an enemy piece.
    fn ray_destinations(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut out = Vec::new();
        for &(dr, df) in rays {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.piece_on(next) {
                    None => {
                        out.push(next);
                        current = next;
                    }
                    Some(blocker) => {
                        if blocker.color != color {
                            out.push(next);
                        }
                        break;
                    }
                }
            }
        }
        out
    }

    /// Fixed-offset destinations (knight and king steps), excluding squares
    /// held by own pieces.
    fn step_destinations(
        &self,
        from: Square,
        color: Color,
        deltas: &[(isize, isize)],
    ) -> Vec<Square> {
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .filter(|&to| match self.piece_on(to) {
                Some(occupant) => occupant.color != color,
                None => true,
            })
            .collect()
    }

    fn king_destinations(&self, from: Square, king: Piece) -> Vec<Square> {
        let mut out = self.step_destinations(from, king.color, &KING_DELTAS);
        if !king.has_moved {
            let rank = from.rank();
            // Kingside: rook on the h-file, f and g empty
            if self.castle_rook_ready(Square(rank, 7), king.color)
                && self.piece_on(Square(rank, 5)).is_none()
                && self.piece_on(Square(rank, 6)).is_none()
            {
                out.push(Square(rank, 6));
            }
            // Queenside: rook on the a-file, b, c and d empty
            if self.castle_rook_ready(Square(rank, 0), king.color)
                && self.piece_on(Square(rank, 1)).is_none()
                && self.piece_on(Square(rank, 2)).is_none()
                && self.piece_on(Square(rank, 3)).is_none()
            {
                out.push(Square(rank, 2));
            }
        }
        out
    }

    fn castle_rook_ready(&self, corner: Square, color: Color) -> bool {
        matches!(
            self.piece_on(corner),
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
        )
    }

    fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut out = Vec::new();
        let dir = color.forward();

        // Single push, and double push from the starting rank
        if let Some(one) = from.offset(dir, 0) {
            if self.piece_on(one).is_none() {
                out.push(one);
                if from.rank() == color.pawn_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.piece_on(two).is_none() {
                            out.push(two);
                        }
                    }
                }
            }
        }

        // Diagonal captures, including en passant onto an empty square
        for df in [-1, 1] {
            let Some(diag) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_on(diag) {
                Some(target) if target.color != color => out.push(diag),
                Some(_) => {}
                None => {
                    // The victim pawn sits beside us on our own rank
                    if let Some(beside) = from.offset(0, df) {
                        if matches!(
                            self.piece_on(beside),
                            Some(p) if p.kind == PieceKind::Pawn
                                && p.color != color
                                && p.en_passant_eligible
                        ) {
                            out.push(diag);
                        }
                    }
                }
            }
        }
        out
    }
}
