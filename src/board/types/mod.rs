//! Core value types: squares, pieces, colors, and moves.

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveFlag};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
