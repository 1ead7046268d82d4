//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and check detection
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `make_unmake.rs` - Applying moves on copies and snapshot independence
//! - `draw.rs` - Insufficient material detection
//! - `perft.rs` - Move tree counts for known positions
//! - `proptest.rs` - Property-based tests

mod proptest;
mod special_moves;

use crate::board::{CastlingRights, Color, Piece, PieceKind, Position, PositionBuilder, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Builds a position from eight ranks of eight characters, rank 8 first.
/// Uppercase is White, lowercase Black, `.` an empty square. Pieces start
/// unmoved.
pub(super) fn diagram(ranks: [&str; 8], side_to_move: Color, rights: CastlingRights) -> Position {
    diagram_builder(ranks, side_to_move, rights).build().unwrap()
}

pub(super) fn diagram_builder(
    ranks: [&str; 8],
    side_to_move: Color,
    rights: CastlingRights,
) -> PositionBuilder {
    let mut builder = PositionBuilder::new()
        .side_to_move(side_to_move)
        .castling(rights);
    for (i, rank) in ranks.iter().enumerate() {
        assert_eq!(rank.len(), 8, "rank {rank:?} must have 8 squares");
        let row = 8 - i as u8;
        for (j, c) in rank.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let kind = PieceKind::from_char(c).unwrap_or_else(|| panic!("bad piece {c}"));
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder = builder.piece(Square::new(row, j as u8 + 1).unwrap(), color, kind);
        }
    }
    builder
}

/// Legal destinations from `from`, sorted, in algebraic notation.
pub(super) fn destinations(position: &Position, from: &str) -> Vec<String> {
    let mut squares: Vec<Square> = position.legal_moves(sq(from)).destinations().collect();
    squares.sort();
    squares.iter().map(ToString::to_string).collect()
}

/// Plays the legal move `from`-`to` on the position, promoting to a queen.
pub(super) fn play(position: &mut Position, from: &str, to: &str) -> Option<Piece> {
    let from = sq(from);
    let mv = position
        .legal_moves(from)
        .find(sq(to))
        .unwrap_or_else(|| panic!("{from}-{to} should be legal"));
    position.make_move(from, mv, crate::board::PromotionPiece::Queen)
}
