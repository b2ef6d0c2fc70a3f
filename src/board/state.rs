//! Board state: a dense 8x8 grid of optional pieces.

use super::types::{Color, Piece, PieceKind, Square};

/// The chess board.
///
/// A dense grid gives O(1) position lookup, and `Clone` yields a value-type
/// snapshot: clones never share mutable state with the live board, which is
/// the contract both move simulation and search rely on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8], // [rank][file]
}

impl Board {
    /// An empty board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// The standard 32-piece starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Piece::new(*kind, Color::White));
            board.set_piece(Square(7, file), Piece::new(*kind, Color::Black));
            board.set_piece(Square(1, file), Piece::new(PieceKind::Pawn, Color::White));
            board.set_piece(Square(6, file), Piece::new(PieceKind::Pawn, Color::Black));
        }
        board
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.grid[square.rank()][square.file()]
    }

    /// Place a piece, replacing whatever was there.
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.grid[square.rank()][square.file()] = Some(piece);
    }

    /// Remove and return the piece on a square.
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.rank()][square.file()].take()
    }

    /// All live pieces of one color with their squares.
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        let mut out = Vec::with_capacity(16);
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(piece) = self.grid[rank][file] {
                    if piece.color == color {
                        out.push((Square(rank, file), piece));
                    }
                }
            }
        }
        out
    }

    /// Locate the king of a color.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(piece) = self.grid[rank][file] {
                    if piece.kind == PieceKind::King && piece.color == color {
                        return Some(Square(rank, file));
                    }
                }
            }
        }
        None
    }

    /// Number of occupied squares. Drives the search depth schedule's
    /// game-stage bucket.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|sq| sq.is_some())
            .count()
    }

    /// Clear `en_passant_eligible` on every pawn of `color`.
    ///
    /// Called at the start of that side's ply: a pawn may be captured en
    /// passant only on the ply immediately following its double advance.
    pub fn clear_en_passant_flags(&mut self, color: Color) {
        for row in &mut self.grid {
            for slot in row.iter_mut() {
                if let Some(piece) = slot {
                    if piece.color == color && piece.kind == PieceKind::Pawn {
                        piece.en_passant_eligible = false;
                    }
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
