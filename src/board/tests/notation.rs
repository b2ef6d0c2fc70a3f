//! Move notation encoding and resolution tests.

use crate::board::{Board, Color, Move, MoveFlag, NotationError, PieceKind, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn quiet(kind: PieceKind, from: &str, to: &str) -> Move {
    Move::quiet(kind, Color::White, sq(from), sq(to))
}

#[test]
fn test_encode_pawn_push() {
    let mv = quiet(PieceKind::Pawn, "e2", "e4");
    assert_eq!(Board::notation_for(&mv), "e4");
}

#[test]
fn test_encode_piece_moves() {
    assert_eq!(Board::notation_for(&quiet(PieceKind::Knight, "g1", "f3")), "Nf3");
    assert_eq!(Board::notation_for(&quiet(PieceKind::Queen, "d1", "h5")), "Qh5");
    assert_eq!(Board::notation_for(&quiet(PieceKind::King, "e1", "e2")), "Ke2");
}

#[test]
fn test_encode_captures() {
    let mut mv = quiet(PieceKind::Bishop, "b5", "c6");
    mv.captured = Some(PieceKind::Knight);
    assert_eq!(Board::notation_for(&mv), "Bxc6");

    let mut pawn_take = quiet(PieceKind::Pawn, "e5", "d6");
    pawn_take.captured = Some(PieceKind::Pawn);
    pawn_take.flag = MoveFlag::EnPassant;
    assert_eq!(Board::notation_for(&pawn_take), "xd6");
}

#[test]
fn test_encode_castles() {
    let mut kingside = quiet(PieceKind::King, "e1", "g1");
    kingside.flag = MoveFlag::CastleKingside;
    assert_eq!(Board::notation_for(&kingside), "O-O");

    let mut queenside = quiet(PieceKind::King, "e1", "c1");
    queenside.flag = MoveFlag::CastleQueenside;
    assert_eq!(Board::notation_for(&queenside), "O-O-O");
}

#[test]
fn test_encode_promotion_has_no_suffix() {
    let mut mv = quiet(PieceKind::Pawn, "a7", "a8");
    mv.flag = MoveFlag::Promotion;
    assert_eq!(Board::notation_for(&mv), "a8");
}

#[test]
fn test_resolve_pawn_and_knight_from_start() {
    let board = Board::new();
    assert_eq!(
        board.resolve_notation("e4", Color::White).unwrap(),
        (sq("e2"), sq("e4"))
    );
    assert_eq!(
        board.resolve_notation("Nf3", Color::White).unwrap(),
        (sq("g1"), sq("f3"))
    );
    assert_eq!(
        board.resolve_notation("Nc6", Color::Black).unwrap(),
        (sq("b8"), sq("c6"))
    );
}

#[test]
fn test_resolve_disambiguation_by_file() {
    // Knights on d2 and g1 can both reach f3
    let board = Board::from_text(
        "....k...\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ...N....\n\
         ....K.N.",
    )
    .unwrap();
    assert_eq!(
        board.resolve_notation("Nf3", Color::White),
        Err(NotationError::Ambiguous {
            notation: "Nf3".to_string()
        })
    );
    assert_eq!(
        board.resolve_notation("Ngf3", Color::White).unwrap(),
        (sq("g1"), sq("f3"))
    );
    assert_eq!(
        board.resolve_notation("Ndf3", Color::White).unwrap(),
        (sq("d2"), sq("f3"))
    );
}

#[test]
fn test_resolve_ambiguous_is_surfaced() {
    // Rooks on a1 and h1, both reaching c1
    let board = Board::from_text(
        "....k...\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ....K...\n\
         R......R",
    )
    .unwrap();
    assert!(matches!(
        board.resolve_notation("Rc1", Color::White),
        Err(NotationError::Ambiguous { .. })
    ));
    assert_eq!(
        board.resolve_notation("Rac1", Color::White).unwrap(),
        (sq("a1"), sq("c1"))
    );
}

#[test]
fn test_resolve_no_matching_move() {
    let board = Board::new();
    assert_eq!(
        board.resolve_notation("Qh5", Color::White),
        Err(NotationError::NoMatchingMove {
            notation: "Qh5".to_string()
        })
    );
}

#[test]
fn test_resolve_invalid_inputs() {
    let board = Board::new();
    assert_eq!(board.resolve_notation("", Color::White), Err(NotationError::Empty));
    assert_eq!(
        board.resolve_notation("Zf3", Color::White),
        Err(NotationError::InvalidPiece { char: 'Z' })
    );
    assert!(matches!(
        board.resolve_notation("Nz9", Color::White),
        Err(NotationError::InvalidSquare { .. })
    ));
}

#[test]
fn test_resolve_castles() {
    // Castling unavailable out of the box
    let board = Board::new();
    assert!(matches!(
        board.resolve_notation("O-O", Color::White),
        Err(NotationError::InvalidCastling { .. })
    ));

    let open = Board::from_text(
        "....k..r\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ....K..R",
    )
    .unwrap();
    assert_eq!(
        open.resolve_notation("O-O", Color::White).unwrap(),
        (sq("e1"), sq("g1"))
    );
    assert_eq!(
        open.resolve_notation("O-O", Color::Black).unwrap(),
        (sq("e8"), sq("g8"))
    );
}

#[test]
fn test_capture_marker_is_accepted_on_resolve() {
    // 1. e4 d5: exd5 resolves for the e4 pawn
    let board = Board::new()
        .simulate(sq("e2"), sq("e4"))
        .simulate(sq("d7"), sq("d5"));
    assert_eq!(
        board.resolve_notation("xd5", Color::White).unwrap(),
        (sq("e4"), sq("d5"))
    );
}

#[test]
fn test_encode_resolve_round_trip_from_start() {
    let board = Board::new();
    for notation in ["e4", "d4", "Nf3", "Nc3"] {
        let (from, to) = board.resolve_notation(notation, Color::White).unwrap();
        let piece = board.piece_on(from).unwrap();
        let mv = Move::quiet(piece.kind, piece.color, from, to);
        assert_eq!(Board::notation_for(&mv), notation);
    }
}
