//! Error types for board and game operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 1-8)
    RowOutOfBounds { row: u8 },
    /// Column out of bounds (must be 1-8)
    ColOutOfBounds { col: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 1-8)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions rejected by `PositionBuilder::build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    DuplicateKing { color: Color },
    /// Pawns can never stand on the first or last rank
    PawnOnBackRank { square: Square },
    /// En passant target is not an empty square behind a just-pushed pawn
    InvalidEnPassant { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            PositionError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant target {square}")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for moves the game refuses to apply. State is never changed
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has been concluded (resignation, agreement or claimed draw)
    GameOver,
    /// No piece on the origin square
    EmptySquare { square: Square },
    /// The origin piece belongs to the side not on move
    NotYourTurn { square: Square },
    /// The destination argument disagrees with the move's own destination
    DestinationMismatch { to: Square, expected: Square },
    /// The move is not among the legal moves of the origin square
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourTurn { square } => {
                write!(f, "Piece on {square} does not belong to the side to move")
            }
            MoveError::DestinationMismatch { to, expected } => {
                write!(f, "Destination {to} does not match move destination {expected}")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}-{to}"),
        }
    }
}

impl std::error::Error for MoveError {}
