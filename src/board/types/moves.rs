//! Move record type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceKind};
use super::square::Square;

/// Special-move tag carried by a [`Move`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveFlag {
    Quiet,
    CastleKingside,
    CastleQueenside,
    EnPassant,
    Promotion,
}

/// A single applied or candidate move.
///
/// Transient: constructed, applied or discarded, never persisted beyond the
/// notation string appended to the move history.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub kind: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub flag: MoveFlag,
}

impl Move {
    /// Create a quiet (non-capturing, non-special) move.
    #[must_use]
    pub const fn quiet(kind: PieceKind, color: Color, from: Square, to: Square) -> Self {
        Move {
            kind,
            color,
            from,
            to,
            captured: None,
            flag: MoveFlag::Quiet,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(self.flag, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
