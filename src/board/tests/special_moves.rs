//! Castling, en passant and promotion.

use super::{destinations, diagram, diagram_builder, play, sq};
use crate::board::{
    CastleSide, CastlingRights, Color, MoveKind, Piece, PieceKind, Position, PromotionPiece,
};

const EMPTY: &str = "........";

fn castling_position(side_to_move: Color) -> Position {
    diagram(
        ["r...k..r", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "R...K..R"],
        side_to_move,
        CastlingRights::all(),
    )
}

#[test]
fn test_en_passant_right_after_double_push() {
    let mut position = Position::standard();
    play(&mut position, "e2", "e4");
    play(&mut position, "a7", "a6");
    play(&mut position, "e4", "e5");
    play(&mut position, "d7", "d5");
    assert_eq!(position.en_passant_target(), Some(sq("d6")));

    let mv = position.legal_moves(sq("e5")).find(sq("d6")).unwrap();
    assert_eq!(mv.kind, MoveKind::EnPassant);

    let captured = position.make_move(sq("e5"), mv, PromotionPiece::Queen);
    assert_eq!(captured.map(|p| (p.color, p.kind)), Some((Color::Black, PieceKind::Pawn)));
    assert!(position.piece_at(sq("d5")).is_none());
    assert!(position.piece_at(sq("e5")).is_none());
    assert_eq!(
        position.piece_at(sq("d6")).map(|p| (p.color, p.kind)),
        Some((Color::White, PieceKind::Pawn))
    );
    assert_eq!(position.en_passant_target(), None);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut position = Position::standard();
    play(&mut position, "e2", "e4");
    play(&mut position, "a7", "a6");
    play(&mut position, "e4", "e5");
    play(&mut position, "d7", "d5");
    play(&mut position, "h2", "h3");
    play(&mut position, "h7", "h6");

    assert_eq!(position.en_passant_target(), None);
    assert_eq!(destinations(&position, "e5"), ["e6"]);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let position = diagram_builder(
        ["....k...", EMPTY, EMPTY, "K.pP...r", EMPTY, EMPTY, EMPTY, EMPTY],
        Color::White,
        CastlingRights::none(),
    )
    .en_passant(sq("c6"))
    .build()
    .unwrap();

    // Taking c5 would clear both pawns off the fifth rank.
    let moves = position.legal_moves(sq("d5"));
    assert!(moves.find(sq("c6")).is_none());
    assert_eq!(moves.find(sq("d6")).map(|m| m.kind), Some(MoveKind::Normal));
}

#[test]
fn test_only_double_push_sets_en_passant_target() {
    let mut position = Position::standard();
    play(&mut position, "e2", "e3");
    assert_eq!(position.en_passant_target(), None);
    play(&mut position, "d7", "d5");
    assert_eq!(position.en_passant_target(), Some(sq("d6")));
    play(&mut position, "g1", "f3");
    assert_eq!(position.en_passant_target(), None);
}

#[test]
fn test_castling_both_sides() {
    let position = castling_position(Color::White);
    let moves = position.legal_moves(sq("e1"));
    assert_eq!(moves.find(sq("g1")).map(|m| m.kind), Some(MoveKind::CastleKingside));
    assert_eq!(moves.find(sq("c1")).map(|m| m.kind), Some(MoveKind::CastleQueenside));
}

#[test]
fn test_castle_kingside_relocates_rook() {
    let mut position = castling_position(Color::White);
    play(&mut position, "e1", "g1");

    let king = position.piece_at(sq("g1")).unwrap();
    let rook = position.piece_at(sq("f1")).unwrap();
    assert!(king.is(Color::White, PieceKind::King) && king.has_moved);
    assert!(rook.is(Color::White, PieceKind::Rook) && rook.has_moved);
    assert!(position.piece_at(sq("e1")).is_none());
    assert!(position.piece_at(sq("h1")).is_none());

    let rights = position.castling_rights();
    assert!(!rights.has(Color::White, CastleSide::Kingside));
    assert!(!rights.has(Color::White, CastleSide::Queenside));
    assert!(rights.has(Color::Black, CastleSide::Kingside));
    assert!(rights.has(Color::Black, CastleSide::Queenside));
}

#[test]
fn test_castle_queenside_for_black() {
    let mut position = castling_position(Color::Black);
    play(&mut position, "e8", "c8");

    assert!(position.piece_at(sq("c8")).unwrap().is(Color::Black, PieceKind::King));
    assert!(position.piece_at(sq("d8")).unwrap().is(Color::Black, PieceKind::Rook));
    assert!(position.piece_at(sq("a8")).is_none());
    assert!(position.castling_rights().has(Color::White, CastleSide::Kingside));
}

#[test]
fn test_castling_needs_empty_squares_between() {
    // b1 is not on the king's path but must still be empty.
    let position = diagram(
        ["....k...", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "RN..K..R"],
        Color::White,
        CastlingRights::all(),
    );
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.find(sq("c1")).is_none());
    assert!(moves.find(sq("g1")).is_some());
}

#[test]
fn test_castling_through_attacked_square() {
    let position = diagram(
        [".r..kr..", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "R...K..R"],
        Color::White,
        CastlingRights::all(),
    );
    let moves = position.legal_moves(sq("e1"));
    // f1 is covered by the rook on f8.
    assert!(moves.find(sq("g1")).is_none());
    // b1 is attacked but the king never crosses it.
    assert_eq!(moves.find(sq("c1")).map(|m| m.kind), Some(MoveKind::CastleQueenside));
}

#[test]
fn test_no_castling_out_of_check() {
    let position = diagram(
        [".......k", EMPTY, EMPTY, "....r...", EMPTY, EMPTY, EMPTY, "R...K..R"],
        Color::White,
        CastlingRights::all(),
    );
    assert!(position.is_in_check(Color::White));
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.find(sq("g1")).is_none());
    assert!(moves.find(sq("c1")).is_none());
}

#[test]
fn test_no_castling_without_rights() {
    let position = diagram(
        ["....k...", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "R...K..R"],
        Color::White,
        CastlingRights::none(),
    );
    assert_eq!(destinations(&position, "e1"), ["d1", "f1", "d2", "e2", "f2"]);
}

#[test]
fn test_rook_move_loses_right_permanently() {
    let mut position = diagram(
        ["...k....", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "R...K..R"],
        Color::White,
        CastlingRights::all(),
    );
    play(&mut position, "a1", "a2");
    play(&mut position, "d8", "c8");
    play(&mut position, "a2", "a1");
    play(&mut position, "c8", "d8");

    let rights = position.castling_rights();
    assert!(!rights.has(Color::White, CastleSide::Queenside));
    assert!(rights.has(Color::White, CastleSide::Kingside));

    let moves = position.legal_moves(sq("e1"));
    assert!(moves.find(sq("c1")).is_none());
    assert!(moves.find(sq("g1")).is_some());
}

#[test]
fn test_king_move_loses_both_rights() {
    let mut position = castling_position(Color::White);
    play(&mut position, "e1", "e2");
    play(&mut position, "e8", "e7");
    play(&mut position, "e2", "e1");
    play(&mut position, "e7", "e8");

    let moves = position.legal_moves(sq("e1"));
    assert!(moves.find(sq("c1")).is_none());
    assert!(moves.find(sq("g1")).is_none());
    assert!(!position.castling_rights().has(Color::White, CastleSide::Kingside));
    assert!(!position.castling_rights().has(Color::Black, CastleSide::Queenside));
}

#[test]
fn test_capturing_home_rook_removes_its_right() {
    let mut position = castling_position(Color::White);
    let captured = play(&mut position, "a1", "a8");
    assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Rook)));

    let rights = position.castling_rights();
    assert!(!rights.has(Color::Black, CastleSide::Queenside));
    assert!(rights.has(Color::Black, CastleSide::Kingside));
    assert!(!rights.has(Color::White, CastleSide::Queenside));
    assert!(rights.has(Color::White, CastleSide::Kingside));
}

#[test]
fn test_promotion_moves() {
    let position = diagram(
        [".n......", "P.......", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "....K..k"],
        Color::White,
        CastlingRights::none(),
    );
    let moves = position.legal_moves(sq("a7"));
    assert_eq!(moves.len(), 2);
    assert_eq!(moves.find(sq("a8")).map(|m| m.kind), Some(MoveKind::Promotion));
    assert_eq!(moves.find(sq("b8")).map(|m| m.kind), Some(MoveKind::PromotionCapture));
}

#[test]
fn test_promotion_to_each_piece() {
    let position = diagram(
        [EMPTY, "P.......", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "....K..k"],
        Color::White,
        CastlingRights::none(),
    );
    let mv = position.legal_moves(sq("a7")).find(sq("a8")).unwrap();
    for choice in PromotionPiece::ALL {
        let mut next = position.clone();
        next.make_move(sq("a7"), mv, choice);
        let promoted = next.piece_at(sq("a8")).unwrap();
        assert_eq!(promoted.kind, choice.kind());
        assert_eq!(promoted.color, Color::White);
        assert!(next.piece_at(sq("a7")).is_none());
    }
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut position = diagram(
        ["....k...", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, ".......p", "K......."],
        Color::Black,
        CastlingRights::none(),
    );
    let mv = position.legal_moves(sq("h2")).find(sq("h1")).unwrap();
    assert_eq!(mv.kind, MoveKind::Promotion);
    position.make_move(sq("h2"), mv, PromotionPiece::Rook);
    assert!(position.piece_at(sq("h1")).unwrap().is(Color::Black, PieceKind::Rook));
    // The new rook checks along the first rank.
    assert!(position.is_in_check(Color::White));
}
