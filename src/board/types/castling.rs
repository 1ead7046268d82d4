//! Castling rights and castling geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Column the king starts on for both colors.
pub(crate) const KING_HOME_COL: u8 = 5;

/// Which wing a castle happens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Corner column holding the castling rook.
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 8,
            CastleSide::Queenside => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 4,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    #[inline]
    #[must_use]
    pub(crate) const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[6, 7],
            CastleSide::Queenside => &[4, 3, 2],
        }
    }

    /// Columns the king stands on, crosses, or lands on; none may be attacked.
    #[inline]
    #[must_use]
    pub(crate) const fn king_path_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6, 7],
            CastleSide::Queenside => &[5, 4, 3],
        }
    }

    /// The side whose rook starts on `col`, if `col` is a corner.
    #[inline]
    #[must_use]
    pub(crate) const fn from_rook_col(col: u8) -> Option<CastleSide> {
        match col {
            8 => Some(CastleSide::Kingside),
            1 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of a color (its king moved)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}
