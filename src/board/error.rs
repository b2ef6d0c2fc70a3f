//! Error types for board and game operations.

use std::fmt;

use super::types::Square;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for textual board snapshot parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBoardError {
    /// Snapshot must have exactly 8 rows
    BadRowCount { found: usize },
    /// A row must have exactly 8 characters
    BadRowWidth { row: usize, found: usize },
    /// Invalid piece character in snapshot
    InvalidPiece { char: char },
}

impl fmt::Display for TextBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextBoardError::BadRowCount { found } => {
                write!(f, "Board snapshot must have 8 rows, found {found}")
            }
            TextBoardError::BadRowWidth { row, found } => {
                write!(f, "Row {row} must have 8 squares, found {found}")
            }
            TextBoardError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in snapshot")
            }
        }
    }
}

impl std::error::Error for TextBoardError {}

/// Error type for move notation decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty notation string
    Empty,
    /// Invalid piece letter
    InvalidPiece { char: char },
    /// Invalid destination square
    InvalidSquare { notation: String },
    /// Multiple pieces of the implied kind can reach the destination.
    /// Surfaced rather than guessed: picking the wrong piece would corrupt
    /// the game state.
    Ambiguous { notation: String },
    /// No piece of the implied kind can reach the destination
    NoMatchingMove { notation: String },
    /// Castling notation with no castle available
    InvalidCastling { notation: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty move notation"),
            NotationError::InvalidPiece { char } => {
                write!(f, "Invalid piece letter '{char}' in notation")
            }
            NotationError::InvalidSquare { notation } => {
                write!(f, "Invalid square in notation '{notation}'")
            }
            NotationError::Ambiguous { notation } => {
                write!(f, "Ambiguous move notation '{notation}'")
            }
            NotationError::NoMatchingMove { notation } => {
                write!(f, "No legal move matches '{notation}'")
            }
            NotationError::InvalidCastling { notation } => {
                write!(f, "Castling '{notation}' is not available")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for rejected game moves.
///
/// `IllegalDestination` and `LeavesKingInCheck` are recovered locally by the
/// controller: the selection is kept and the player may choose again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has ended; no further moves are accepted
    GameOver,
    /// No piece on the selected square
    EmptySquare { square: Square },
    /// The piece on the selected square belongs to the opponent
    NotYourPiece { square: Square },
    /// No piece is currently selected
    NoSelection,
    /// The destination is not in the selected piece's legal set
    IllegalDestination { to: Square },
    /// The move would leave the mover's own king in check
    LeavesKingInCheck { to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is over"),
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::NotYourPiece { square } => {
                write!(f, "Piece on {square} belongs to the opponent")
            }
            MoveError::NoSelection => write!(f, "No piece selected"),
            MoveError::IllegalDestination { to } => {
                write!(f, "Illegal destination {to}")
            }
            MoveError::LeavesKingInCheck { to } => {
                write!(f, "Moving to {to} would leave the king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {}
