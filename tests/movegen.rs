//! Cross-module properties of parsing, padding and move generation.

use chess_positions::engine::fen::{self, Fen, START_FEN};
use chess_positions::engine::movegen::{self, MoveGenerator};
use chess_positions::engine::{Board, CastlingRights, Color, Piece, PieceType, Square, pad};

const POSITIONS: &[&str] = &[
    START_FEN,
    "8/8/8/8/8/8/8/1N4N1 w - - 0 1",
    "4k3/8/8/8/8/8/8/1N4N1 b - - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "QQQQQQQQ/QQQQQQQQ/8/8/8/8/qqqqqqqq/qqqqqqqq b - - 10 40",
];

/// FEN with a single white piece on `sq`.
fn lone(piece: PieceType, sq: Square) -> String {
    let mut board = Board::empty();
    board.set(sq, Piece::Occupied(Color::White, piece));
    Fen {
        board,
        side_to_move: Color::White,
        castling_rights: CastlingRights::NONE,
        en_passant: None,
        halfmove_clock: 0,
        fullmove_number: 1,
    }
    .to_fen()
}

fn total_moves(piece: PieceType) -> usize {
    Square::all()
        .map(|sq| movegen::generate(&lone(piece, sq)).unwrap().move_count())
        .sum()
}

#[test]
fn destinations_are_never_friendly() {
    for fen in POSITIONS {
        let record = fen::parse_fen(fen).unwrap();
        let us = record.side_to_move;
        let moves = movegen::generate(fen).unwrap();

        for (from, targets) in moves.iter() {
            assert!(record.board.piece_at(from).is_color(us), "{fen}: {from}");
            assert!(!targets.is_empty(), "{fen}: {from}");
            for &to in targets {
                assert_ne!(from, to, "{fen}");
                let piece = record.board.piece_at(to);
                assert!(!piece.is_color(us), "{fen}: {from} -> {to}");
                assert!(!piece.is_off_board(), "{fen}: {from} -> {to}");
            }
        }
    }
}

#[test]
fn no_pawn_is_an_origin() {
    for fen in POSITIONS {
        let board = fen::parse(fen).unwrap();
        for from in movegen::generate(fen).unwrap().origins() {
            assert_ne!(board.piece_at(from).piece_type(), Some(PieceType::Pawn), "{fen}");
        }
    }
}

#[test]
fn generate_and_padded_generation_agree() {
    let generator = MoveGenerator::new();
    for fen in POSITIONS {
        let record = fen::parse_fen(fen).unwrap();
        let padded = pad(&record.board);
        assert_eq!(
            generator.generate(fen).unwrap(),
            generator.generate_padded(&padded, record.side_to_move),
            "{fen}"
        );
    }
}

#[test]
fn start_position_has_only_knight_moves() {
    let moves = movegen::generate(START_FEN).unwrap();
    let origins: Vec<String> = moves.origins().map(Square::to_algebraic).collect();
    assert_eq!(origins, vec!["g1", "b1"]);
    assert_eq!(moves.move_count(), 4);
}

#[test]
fn lone_piece_move_totals() {
    assert_eq!(total_moves(PieceType::Knight), 336);
    assert_eq!(total_moves(PieceType::King), 420);
    assert_eq!(total_moves(PieceType::Rook), 64 * 14);
    assert_eq!(total_moves(PieceType::Bishop), 560);
    assert_eq!(total_moves(PieceType::Queen), 64 * 14 + 560);
    assert_eq!(total_moves(PieceType::Pawn), 0);
}

#[test]
fn validate_agrees_with_parse() {
    let inputs = [
        START_FEN,
        "8/8/8/8/8/8/8/8 w - - 0 1",
        "",
        "   ",
        "8/8/8/8/8/8/8/8 w - - 0 0",
        "8/8/8/8/8/8/8/8 w - - -1 1",
        "8/8/8/8/8/8/8/8 x - - 0 1",
        "8/8/8/8/8/8/8/8 w QK - 0 1",
        "8/8/8/8/8/8/8/8 w - e5 0 1",
        "8/8/8/8/8/8/8 w - - 0 1",
        "8/8/8/8/8/8/8/9 w - - 0 1",
        "8/8/8/8/8/8/8/44 w - - 0 1",
        "8/8/8/8/8/8/8/7X w - - 0 1",
        "8/8/8/8/8/8/8/7 w - - 0 1",
        "8/8/8/8/8/8/8/8 w - - 0 1 extra",
    ];
    for fen in inputs {
        assert_eq!(fen::validate(fen), fen::parse(fen).is_ok(), "{fen:?}");
    }
}

#[test]
fn fen_round_trip() {
    for fen in POSITIONS {
        assert_eq!(fen::parse_fen(fen).unwrap().to_fen(), *fen);
    }
}

#[test]
fn parse_bytes_rejects_non_text() {
    assert!(fen::parse_bytes(START_FEN.as_bytes()).is_ok());
    assert!(matches!(
        fen::parse_bytes(&[0xff, 0xfe, 0x20]),
        Err(chess_positions::engine::ChessError::NotText(_))
    ));
}
