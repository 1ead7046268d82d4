//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules core:
//! - `PieceKind`, `Piece` and `Color` - pieces, their owners and moved flags
//! - `Square` - 1-based (row, column) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - generated moves
//! - `CastlingRights` and `CastleSide` - castling state and geometry

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece, PieceKind, PromotionPiece};
pub use square::Square;

pub(crate) use castling::KING_HOME_COL;
