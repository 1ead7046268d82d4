//! Chess position representation and move generation.
//!
//! Uses an 8x8 mailbox of optional pieces. Supports full chess rules
//! including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Square};
//!
//! let position = Position::standard();
//! let e2 = Square::new(2, 5).unwrap();
//! println!("The e-pawn has {} legal moves", position.legal_moves(e2).len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{MoveError, PositionError, SquareError};
pub use state::Position;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece, PieceKind,
    PromotionPiece, Square,
};

pub(crate) use state::RepetitionKey;
pub(crate) use types::KING_HOME_COL;
