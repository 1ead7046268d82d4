pub mod board;
pub mod game;

pub use board::{Color, Move, MoveKind, Piece, PieceKind, Position, PositionBuilder, Square};
pub use game::{Game, GameStatus, Outcome};
