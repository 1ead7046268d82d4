//! Move types and move list.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::square::Square;

/// What a move does besides relocating the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    Capture,
    DoublePush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion,
    PromotionCapture,
}

impl MoveKind {
    /// Check if this move captures something (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::PromotionCapture
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promotion | MoveKind::PromotionCapture)
    }

    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            MoveKind::CastleKingside => Some(CastleSide::Kingside),
            MoveKind::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// A candidate move for the piece on some origin square.
///
/// The origin is not stored: moves are produced per square by
/// `Position::legal_moves` and applied together with that square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(to: Square, kind: MoveKind) -> Self {
        Move { to, kind }
    }

    /// Destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }
}

/// Ordered list of generated moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create a new empty move list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// The move landing on `to`, if any. At most one generated move per
    /// destination exists, since promotion choice is not part of the move.
    #[must_use]
    pub fn find(&self, to: Square) -> Option<Move> {
        self.moves.iter().copied().find(|mv| mv.to == to)
    }

    /// Destination squares, in generation order
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(|mv| mv.to)
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
