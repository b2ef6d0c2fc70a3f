//! Game controller: the turn state machine.
//!
//! Drives a game ply by ply: square selection, destination validation
//! (including the self-check filter), special-move side effects, notation
//! recording, terminal detection, and the AI's book-then-search move
//! choice.

use std::fmt;

use log::{debug, info};

use crate::board::{
    depth_for, find_best_move, Board, Color, Move, MoveError, MoveFlag, NotationError, PieceKind,
    Square,
};
use crate::book::{OpeningBook, OPENING_BOOK};

/// How a finished game ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// The controller's state machine position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Waiting for the side to move to pick one of its pieces
    AwaitingSelection,
    /// A piece is selected; waiting for a destination
    PieceSelected(Square),
    /// Terminal; no further moves are accepted
    GameOver(Outcome),
}

/// Error from the AI move pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiMoveError {
    /// The move itself was rejected
    Game(MoveError),
    /// A book move could not be resolved unambiguously
    Notation(NotationError),
    /// Search produced no move in a non-terminal position
    NoLegalMoves,
}

impl fmt::Display for AiMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiMoveError::Game(err) => write!(f, "{err}"),
            AiMoveError::Notation(err) => write!(f, "{err}"),
            AiMoveError::NoLegalMoves => write!(f, "No legal moves available"),
        }
    }
}

impl std::error::Error for AiMoveError {}

impl From<MoveError> for AiMoveError {
    fn from(err: MoveError) -> Self {
        AiMoveError::Game(err)
    }
}

impl From<NotationError> for AiMoveError {
    fn from(err: NotationError) -> Self {
        AiMoveError::Notation(err)
    }
}

/// A single game of chess.
pub struct Game {
    board: Board,
    turn: Color,
    history: Vec<String>,
    phase: Phase,
    difficulty: u8,
    // Book lines are recorded from the standard starting position; prefix
    // matching is meaningless for a game set up from an arbitrary board.
    use_book: bool,
}

impl Game {
    /// A fresh game from the standard starting position, White to move.
    #[must_use]
    pub fn new(difficulty: u8) -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            history: Vec::new(),
            phase: Phase::AwaitingSelection,
            difficulty,
            use_book: true,
        }
    }

    /// A game from an arbitrary position. Terminal positions are detected
    /// immediately, and the opening book is disabled: its lines assume the
    /// standard starting position.
    #[must_use]
    pub fn from_board(board: Board, turn: Color, difficulty: u8) -> Self {
        let phase = if board.is_checkmate(turn) {
            Phase::GameOver(Outcome::Winner(turn.opponent()))
        } else if board.is_stalemate(turn) {
            Phase::GameOver(Outcome::Draw)
        } else {
            Phase::AwaitingSelection
        };
        Game {
            board,
            turn,
            history: Vec::new(),
            phase,
            difficulty,
            use_book: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The outcome once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// White-perspective evaluation of the live position, for the score
    /// display.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.board.evaluate()
    }

    /// Select a square holding a piece of the side to move.
    ///
    /// Returns the legal destinations for highlighting.
    pub fn select(&mut self, square: Square) -> Result<Vec<Square>, MoveError> {
        if matches!(self.phase, Phase::GameOver(_)) {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .piece_on(square)
            .ok_or(MoveError::EmptySquare { square })?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourPiece { square });
        }
        self.phase = Phase::PieceSelected(square);
        Ok(self.legal_destinations(square))
    }

    /// Move the selected piece to `to`.
    ///
    /// On rejection the selection is kept and the caller may choose again;
    /// on success the move is applied with its side effects and the turn
    /// flips.
    pub fn choose(&mut self, to: Square) -> Result<Move, MoveError> {
        let from = match self.phase {
            Phase::GameOver(_) => return Err(MoveError::GameOver),
            Phase::AwaitingSelection => return Err(MoveError::NoSelection),
            Phase::PieceSelected(from) => from,
        };

        if !self.board.pseudo_destinations(from).contains(&to) {
            return Err(MoveError::IllegalDestination { to });
        }
        if !self.legal_destinations(from).contains(&to) {
            return Err(MoveError::LeavesKingInCheck { to });
        }

        Ok(self.apply_move(from, to))
    }

    /// Select and move in one step.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        self.select(from)?;
        match self.choose(to) {
            Ok(mv) => Ok(mv),
            Err(err) => {
                // Failed destination keeps the selection; undo the select
                // so a full play_move is atomic.
                if matches!(self.phase, Phase::PieceSelected(_)) {
                    self.phase = Phase::AwaitingSelection;
                }
                Err(err)
            }
        }
    }

    /// Fully legal destinations for the piece on `from`: pseudo-legal moves
    /// minus those leaving the mover's king in check, with the extra
    /// castling gates (not out of or through an attacked square).
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board.piece_on(from) else {
            return Vec::new();
        };
        let color = piece.color;
        self.board
            .pseudo_destinations(from)
            .into_iter()
            .filter(|&to| {
                self.board.castle_passage_safe(from, to)
                    && !self.board.simulate(from, to).is_in_check(color)
            })
            .collect()
    }

    /// Make the AI's move: try the opening book, then search.
    pub fn ai_move(&mut self) -> Result<Move, AiMoveError> {
        self.ai_move_with(&OPENING_BOOK)
    }

    /// Make the AI's move using a specific book (seeded books in tests).
    pub fn ai_move_with(&mut self, book: &OpeningBook) -> Result<Move, AiMoveError> {
        if matches!(self.phase, Phase::GameOver(_)) {
            return Err(MoveError::GameOver.into());
        }

        if self.use_book {
            if let Some(notation) = book.next_move(&self.history) {
                match self.board.resolve_notation(notation, self.turn) {
                    Ok((from, to)) => match self.play_move(from, to) {
                        Ok(mv) => return Ok(mv),
                        // A resolvable book move can still be illegal on
                        // this board (a pinned mover, a gated castle);
                        // search instead.
                        Err(err) => {
                            debug!("book move {notation} rejected ({err}); searching");
                        }
                    },
                    // A book move with no mover on this board falls
                    // through to search; ambiguity is a hard failure,
                    // never guessed.
                    Err(NotationError::NoMatchingMove { .. })
                    | Err(NotationError::InvalidCastling { .. }) => {}
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let depth = depth_for(self.difficulty, self.board.occupied_count());
        let (from, to) =
            find_best_move(&self.board, self.turn, depth).ok_or(AiMoveError::NoLegalMoves)?;
        Ok(self.play_move(from, to)?)
    }

    /// Apply a validated move: special-move side effects, notation, turn
    /// flip, terminal scan.
    fn apply_move(&mut self, from: Square, to: Square) -> Move {
        let mover = self.turn;
        // Only the immediately-preceding double advance may be captured en
        // passant, so the mover's own stale flags are cleared first.
        self.board.clear_en_passant_flags(mover);

        let piece = self
            .board
            .piece_on(from)
            .unwrap_or_else(|| unreachable!("validated move from an empty square"));

        let file_shift = to.file() as isize - from.file() as isize;
        let flag = if piece.kind == PieceKind::King && file_shift == 2 {
            MoveFlag::CastleKingside
        } else if piece.kind == PieceKind::King && file_shift == -2 {
            MoveFlag::CastleQueenside
        } else if piece.kind == PieceKind::Pawn
            && file_shift != 0
            && self.board.piece_on(to).is_none()
        {
            MoveFlag::EnPassant
        } else if piece.kind == PieceKind::Pawn && to.rank() == mover.promotion_rank() {
            MoveFlag::Promotion
        } else {
            MoveFlag::Quiet
        };

        let captured = match flag {
            MoveFlag::EnPassant => Some(PieceKind::Pawn),
            _ => self.board.piece_on(to).map(|p| p.kind),
        };

        let mv = Move {
            kind: piece.kind,
            color: mover,
            from,
            to,
            captured,
            flag,
        };
        let notation = Board::notation_for(&mv);

        let mut moved = piece;
        moved.has_moved = true;
        moved.en_passant_eligible =
            piece.kind == PieceKind::Pawn && (to.rank() as isize - from.rank() as isize).abs() == 2;
        if flag == MoveFlag::Promotion {
            moved.kind = PieceKind::Queen;
        }

        self.board.take_piece(from);
        if flag == MoveFlag::EnPassant {
            self.board.take_piece(Square(from.rank(), to.file()));
        }
        self.board.set_piece(to, moved);

        match flag {
            MoveFlag::CastleKingside => self.relocate_castle_rook(Square(from.rank(), 7), 5),
            MoveFlag::CastleQueenside => self.relocate_castle_rook(Square(from.rank(), 0), 3),
            _ => {}
        }

        debug!("{mover} plays {notation} ({mv})");
        self.history.push(notation);
        self.turn = mover.opponent();

        self.phase = if self.board.is_checkmate(self.turn) {
            info!("checkmate: {mover} wins after {} plies", self.history.len());
            Phase::GameOver(Outcome::Winner(mover))
        } else if self.board.is_stalemate(self.turn) {
            info!("stalemate after {} plies", self.history.len());
            Phase::GameOver(Outcome::Draw)
        } else {
            Phase::AwaitingSelection
        };

        mv
    }

    fn relocate_castle_rook(&mut self, corner: Square, to_file: usize) {
        if let Some(mut rook) = self.board.take_piece(corner) {
            rook.has_moved = true;
            self.board.set_piece(Square(corner.rank(), to_file), rook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Line;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new(1);
        game.play_move(sq("f2"), sq("f3")).unwrap();
        game.play_move(sq("e7"), sq("e5")).unwrap();
        game.play_move(sq("g2"), sq("g4")).unwrap();
        game.play_move(sq("d8"), sq("h4")).unwrap();

        assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Black)));
        assert_eq!(game.history(), &["f3", "e5", "g4", "Qh4"]);
        assert_eq!(game.select(sq("e2")), Err(MoveError::GameOver));
    }

    #[test]
    fn test_rejected_move_keeps_selection() {
        let mut game = Game::new(1);
        game.select(sq("e2")).unwrap();
        // e2-e5 is not a pawn move
        assert_eq!(
            game.choose(sq("e5")),
            Err(MoveError::IllegalDestination { to: sq("e5") })
        );
        assert_eq!(game.phase(), Phase::PieceSelected(sq("e2")));
        // the selection is still usable
        game.choose(sq("e4")).unwrap();
        assert_eq!(game.history(), &["e4"]);
    }

    #[test]
    fn test_select_rules() {
        let mut game = Game::new(1);
        assert_eq!(
            game.select(sq("e4")),
            Err(MoveError::EmptySquare { square: sq("e4") })
        );
        assert_eq!(
            game.select(sq("e7")),
            Err(MoveError::NotYourPiece { square: sq("e7") })
        );
        let destinations = game.select(sq("e2")).unwrap();
        assert_eq!(destinations, vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn test_must_address_check() {
        // White bishop b5 checks the black king along b5-e8; a move that
        // ignores the check is rejected, a blocking move is accepted.
        let board = Board::from_text(
            "rnbqkbnr\n\
             ppp..ppp\n\
             ........\n\
             .B......\n\
             ........\n\
             ........\n\
             ........\n\
             ....K...",
        )
        .unwrap();
        let mut game = Game::from_board(board, Color::Black, 1);
        let err = game.play_move(sq("g8"), sq("f6"));
        assert_eq!(err, Err(MoveError::LeavesKingInCheck { to: sq("f6") }));
        // c7-c6 blocks the diagonal
        game.play_move(sq("c7"), sq("c6")).unwrap();
        assert!(!game.board().is_in_check(Color::Black));
    }

    #[test]
    fn test_kingside_castle_side_effects() {
        let board = Board::from_text(
            "....k...\n\
             pppppppp\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             PPPPPPPP\n\
             ....K..R",
        )
        .unwrap();
        let mut game = Game::from_board(board, Color::White, 1);
        let mv = game.play_move(sq("e1"), sq("g1")).unwrap();

        assert_eq!(mv.flag, MoveFlag::CastleKingside);
        assert_eq!(game.history(), &["O-O"]);
        let rook = game.board().piece_on(sq("f1")).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(game.board().piece_on(sq("h1")).is_none());
        assert_eq!(
            game.board().piece_on(sq("g1")).map(|p| p.kind),
            Some(PieceKind::King)
        );
    }

    #[test]
    fn test_castling_blocked_through_check() {
        // Black rook on f8 attacks f1, the square the king passes through
        let board = Board::from_text(
            "....kr..\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             PPPPP..P\n\
             ....K..R",
        )
        .unwrap();
        let game = Game::from_board(board, Color::White, 1);
        assert!(!game.legal_destinations(sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn test_en_passant_capture() {
        let mut game = Game::new(1);
        game.play_move(sq("e2"), sq("e4")).unwrap();
        game.play_move(sq("a7"), sq("a6")).unwrap();
        game.play_move(sq("e4"), sq("e5")).unwrap();
        game.play_move(sq("d7"), sq("d5")).unwrap();

        let mv = game.play_move(sq("e5"), sq("d6")).unwrap();
        assert_eq!(mv.flag, MoveFlag::EnPassant);
        assert_eq!(mv.captured, Some(PieceKind::Pawn));
        // the d5 pawn is gone
        assert!(game.board().piece_on(sq("d5")).is_none());
        assert_eq!(game.history().last().map(String::as_str), Some("xd6"));
    }

    #[test]
    fn test_en_passant_window_expires() {
        let mut game = Game::new(1);
        game.play_move(sq("e2"), sq("e4")).unwrap();
        game.play_move(sq("a7"), sq("a6")).unwrap();
        game.play_move(sq("e4"), sq("e5")).unwrap();
        game.play_move(sq("d7"), sq("d5")).unwrap();
        // White declines the en passant capture...
        game.play_move(sq("h2"), sq("h3")).unwrap();
        game.play_move(sq("a6"), sq("a5")).unwrap();
        // ...and may not take it a ply later
        let err = game.play_move(sq("e5"), sq("d6"));
        assert_eq!(err, Err(MoveError::IllegalDestination { to: sq("d6") }));
    }

    #[test]
    fn test_promotion_auto_queens() {
        let board = Board::from_text(
            "....k...\n\
             P.......\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ....K...",
        )
        .unwrap();
        let mut game = Game::from_board(board, Color::White, 1);
        let mv = game.play_move(sq("a7"), sq("a8")).unwrap();

        assert_eq!(mv.flag, MoveFlag::Promotion);
        assert_eq!(
            game.board().piece_on(sq("a8")).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
        assert_eq!(game.history(), &["a8"]);
    }

    #[test]
    fn test_stalemate_is_a_draw() {
        // Black king h8, White queen g6: Black has no move but is not in
        // check.
        let board = Board::from_text(
            ".......k\n\
             ........\n\
             ......Q.\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             K.......",
        )
        .unwrap();
        let game = Game::from_board(board, Color::Black, 1);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_checkmated_start_position_is_terminal() {
        let board = Board::from_text(
            ".......k\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .....PPP\n\
             r.....K.",
        )
        .unwrap();
        let game = Game::from_board(board, Color::White, 1);
        assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Black)));
    }

    #[test]
    fn test_ai_plays_book_open() {
        let book = OpeningBook::with_seed(11);
        let mut game = Game::new(1);
        let mv = game.ai_move_with(&book).unwrap();
        assert_eq!(mv.color, Color::White);
        assert_eq!(game.history().len(), 1);
        assert!(["e4", "d4", "c4"].contains(&game.history()[0].as_str()));
    }

    #[test]
    fn test_ai_search_grabs_hanging_queen() {
        // Off-book position: White queen can capture the undefended Black
        // queen.
        let board = Board::from_text(
            "....k...\n\
             ........\n\
             ........\n\
             ...q....\n\
             ........\n\
             ........\n\
             ...Q....\n\
             ....K...",
        )
        .unwrap();
        let book = OpeningBook::with_seed(5);
        let mut game = Game::from_board(board, Color::White, 2);
        let mv = game.ai_move_with(&book).unwrap();
        assert_eq!(mv.to, sq("d5"));
        assert_eq!(mv.captured, Some(PieceKind::Queen));
    }

    #[test]
    fn test_ai_move_survives_gated_castle() {
        // Kingside castle is pseudo-legal but crosses the a6 bishop's
        // attack on f1; the AI must pick a different move, not error out.
        let board = Board::from_text(
            ".......k\n\
             ........\n\
             b.......\n\
             ........\n\
             ........\n\
             ........\n\
             PP.....P\n\
             ....K..R",
        )
        .unwrap();
        let mut game = Game::from_board(board, Color::White, 2);
        let mv = game.ai_move().unwrap();
        assert!(!mv.is_castle());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_rejected_book_move_falls_back_to_search() {
        // After 1. e4 d5 2. Bb5+ c6 3. a3 the c6 pawn is pinned along
        // b5-e8, so the book's suggested push c5 resolves but is illegal.
        static PINNED_PUSH: &[Line] = &[Line {
            name: "pinned continuation",
            moves: &["e4", "d5", "Bb5", "c6", "a3", "c5"],
        }];
        let book = OpeningBook::from_lines(PINNED_PUSH, 1);

        let mut game = Game::new(1);
        game.play_move(sq("e2"), sq("e4")).unwrap();
        game.play_move(sq("d7"), sq("d5")).unwrap();
        game.play_move(sq("f1"), sq("b5")).unwrap();
        game.play_move(sq("c7"), sq("c6")).unwrap();
        game.play_move(sq("a2"), sq("a3")).unwrap();

        let mv = game.ai_move_with(&book).unwrap();
        assert_ne!((mv.from, mv.to), (sq("c6"), sq("c5")));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_custom_position_skips_opening_book() {
        // "e4" would resolve here (the e2 pawn can push), but a game set
        // up from an arbitrary board never consults the book; search wins
        // the hanging queen instead.
        static KING_PAWN: &[Line] = &[Line {
            name: "king pawn",
            moves: &["e4", "e5"],
        }];
        let board = Board::from_text(
            ".......k\n\
             ........\n\
             ........\n\
             ...q....\n\
             ........\n\
             ..N.....\n\
             ....P...\n\
             ....K...",
        )
        .unwrap();
        let book = OpeningBook::from_lines(KING_PAWN, 1);
        let mut game = Game::from_board(board, Color::White, 2);
        let mv = game.ai_move_with(&book).unwrap();
        assert_eq!(mv.to, sq("d5"));
        assert_eq!(mv.captured, Some(PieceKind::Queen));
    }

    #[test]
    fn test_ai_follows_whole_book_line() {
        let book = OpeningBook::with_seed(2);
        let mut game = Game::new(1);
        // Both sides on book for four plies
        for _ in 0..4 {
            game.ai_move_with(&book).unwrap();
        }
        assert_eq!(game.history().len(), 4);
        assert!(game.outcome().is_none());
    }
}
