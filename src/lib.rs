//! A self-contained chess rules-and-search engine.
//!
//! Full legal move generation per piece kind, check and checkmate detection
//! via hypothetical-move simulation, minimax search with alpha-beta pruning
//! and a staged depth schedule, a material + piece-square-table evaluator,
//! and an opening book matched by move-history prefix. Rendering, input and
//! persistence live outside this crate; it consumes squares and difficulty
//! levels and returns legal destinations, chosen moves and scores.

pub mod board;
pub mod book;
pub mod game;

pub use board::{
    Board, Color, Move, MoveError, MoveFlag, NotationError, Piece, PieceKind, Square,
    CHECKMATE_SCORE,
};
pub use board::{depth_for, find_best_move};
pub use book::{Line, OpeningBook, OPENING_BOOK};
pub use game::{AiMoveError, Game, Outcome, Phase};
