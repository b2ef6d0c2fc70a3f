//! Short algebraic move notation.
//!
//! The wire format is `<PieceLetter><'x'?><destFile><destRank>` with pawns
//! omitting the letter and castling written `O-O` / `O-O-O`. Check and
//! promotion suffixes are not modeled. Decoding accepts an optional file
//! character before the destination for disambiguation ("Ngf3").

use super::error::NotationError;
use super::state::Board;
use super::types::{Color, Move, MoveFlag, PieceKind, Square};

impl Board {
    /// Encode an applied move as notation.
    #[must_use]
    pub fn notation_for(mv: &Move) -> String {
        match mv.flag {
            MoveFlag::CastleKingside => return "O-O".to_string(),
            MoveFlag::CastleQueenside => return "O-O-O".to_string(),
            _ => {}
        }

        let mut out = String::new();
        if let Some(letter) = mv.kind.notation_letter() {
            out.push(letter);
        }
        if mv.is_capture() {
            out.push('x');
        }
        out.push_str(&mv.to.to_string());
        out
    }

    /// Resolve a notation string to a `(from, to)` square pair for `color`.
    ///
    /// Candidate movers are the pieces of the implied kind whose
    /// pseudo-legal destinations include the implied destination. An
    /// explicit disambiguation file narrows ties; an unresolved tie is a
    /// hard [`NotationError::Ambiguous`] failure.
    pub fn resolve_notation(
        &self,
        notation: &str,
        color: Color,
    ) -> Result<(Square, Square), NotationError> {
        if notation.is_empty() {
            return Err(NotationError::Empty);
        }

        if notation == "O-O" || notation == "O-O-O" {
            return self.resolve_castle(notation, color);
        }

        let chars: Vec<char> = notation.chars().collect();
        let (kind, body) = match PieceKind::from_notation_letter(chars[0]) {
            Some(kind) => (kind, &chars[1..]),
            None => {
                if chars[0].is_ascii_uppercase() {
                    return Err(NotationError::InvalidPiece { char: chars[0] });
                }
                (PieceKind::Pawn, &chars[..])
            }
        };

        if body.len() < 2 {
            return Err(NotationError::InvalidSquare {
                notation: notation.to_string(),
            });
        }
        let dest_str: String = body[body.len() - 2..].iter().collect();
        let to: Square = dest_str.parse().map_err(|_| NotationError::InvalidSquare {
            notation: notation.to_string(),
        })?;

        let mut disambig_file: Option<usize> = None;
        for &c in &body[..body.len() - 2] {
            match c {
                'x' => {}
                'a'..='h' => disambig_file = Some(c as usize - 'a' as usize),
                _ => {
                    return Err(NotationError::InvalidSquare {
                        notation: notation.to_string(),
                    })
                }
            }
        }

        let mut candidates: Vec<Square> = self
            .pieces_of(color)
            .into_iter()
            .filter(|(_, piece)| piece.kind == kind)
            .map(|(square, _)| square)
            .filter(|&square| self.pseudo_destinations(square).contains(&to))
            .collect();

        if candidates.len() > 1 {
            if let Some(file) = disambig_file {
                candidates.retain(|square| square.file() == file);
            }
        }

        match candidates.len() {
            0 => Err(NotationError::NoMatchingMove {
                notation: notation.to_string(),
            }),
            1 => Ok((candidates[0], to)),
            _ => Err(NotationError::Ambiguous {
                notation: notation.to_string(),
            }),
        }
    }

    fn resolve_castle(
        &self,
        notation: &str,
        color: Color,
    ) -> Result<(Square, Square), NotationError> {
        let rank = color.home_rank();
        let from = Square(rank, 4);
        let to = if notation == "O-O" {
            Square(rank, 6)
        } else {
            Square(rank, 2)
        };

        let king_ready = matches!(
            self.piece_on(from),
            Some(p) if p.kind == PieceKind::King && p.color == color
        );
        if !king_ready || !self.pseudo_destinations(from).contains(&to) {
            return Err(NotationError::InvalidCastling {
                notation: notation.to_string(),
            });
        }
        Ok((from, to))
    }
}
