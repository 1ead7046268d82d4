//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.status().side_to_move, Color::White);
//! ```

pub use super::{
    CastleSide, Color, Move, MoveError, MoveKind, MoveList, Piece, PieceKind, Position,
    PositionBuilder, PromotionPiece, Square,
};
pub use crate::game::{DrawReason, Game, GameStatus, HistoryEntry, Outcome};
