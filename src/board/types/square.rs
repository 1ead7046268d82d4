//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, addressed by 1-based row and column.
///
/// Row 1 is White's back rank and column 1 is the a-file. How the board is
/// oriented on screen is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Coords", into = "Coords")
)]
pub struct Square {
    row: u8,
    col: u8,
}

/// Wire form of a square; deserialized coordinates go through the same
/// bounds check as `TryFrom<(u8, u8)>`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct Coords {
    row: u8,
    col: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<Coords> for Square {
    type Error = SquareError;

    fn try_from(coords: Coords) -> Result<Self, Self::Error> {
        Square::try_from((coords.row, coords.col))
    }
}

#[cfg(feature = "serde")]
impl From<Square> for Coords {
    fn from(sq: Square) -> Self {
        Coords {
            row: sq.row,
            col: sq.col,
        }
    }
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= 1 && row <= 8 && col >= 1 && col <= 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Build a square from coordinates already known to be on the board.
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row >= 1 && row <= 8 && col >= 1 && col <= 8);
        Square { row, col }
    }

    /// Get the row (1-8, where 1 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Get the column (1-8, where 1 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Light squares have an odd coordinate sum (a1 is dark).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Step by a row/column delta, returning `None` when it leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.col as usize - 1)
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square::at((idx / 8) as u8 + 1, (idx % 8) as u8 + 1)
    }

    /// Every square on the board in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col - 1 + b'a') as char, self.row)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if !(1..=8).contains(&col) {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a' + 1,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'0',
            _ => return Err(invalid()),
        };

        Ok(Square { row, col })
    }
}
