//! Chess board representation and rules.
//!
//! A dense 8x8 grid with per-kind pseudo-legal move generation, check and
//! checkmate detection via hypothetical-move simulation, a material +
//! piece-square-table evaluator, and the textual snapshot codec used at
//! the engine boundary.
//!
//! # Example
//! ```
//! use chessmind::board::Board;
//!
//! let board = Board::new();
//! let pawn_moves = board.pseudo_destinations("e2".parse().unwrap());
//! assert_eq!(pawn_moves.len(), 2);
//! ```

mod check;
mod error;
mod eval;
mod movegen;
mod notation;
mod pst;
pub mod search;
mod state;
mod text;
mod types;

#[cfg(test)]
mod tests;

pub use error::{MoveError, NotationError, SquareError, TextBoardError};
pub use eval::CHECKMATE_SCORE;
pub use state::Board;
pub use types::{Color, Move, MoveFlag, Piece, PieceKind, Square};

pub use search::{depth_for, find_best_move};
