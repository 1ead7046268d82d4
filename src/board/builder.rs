//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, e.g. endgames or test setups.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::new(1, 5).unwrap(), Color::White, PieceKind::King)
//!     .piece(Square::new(8, 5).unwrap(), Color::Black, PieceKind::King)
//!     .piece(Square::new(2, 1).unwrap(), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.pieces().count(), 3);
//! ```

use super::error::PositionError;
use super::{CastleSide, CastlingRights, Color, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_position(&Position::standard())
    }

    /// Create a builder pre-filled with an existing position.
    #[must_use]
    pub fn from_position(position: &Position) -> Self {
        PositionBuilder {
            pieces: position.pieces().collect(),
            side_to_move: position.side_to_move,
            castling_rights: position.castling_rights,
            en_passant_target: position.en_passant_target,
        }
    }

    /// Place an unmoved piece on a square, replacing whatever was there.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(color, kind))
    }

    /// Place a piece that is marked as having moved already.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(color, kind).moved())
    }

    fn place(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    /// Build the position.
    ///
    /// # Errors
    /// Rejects positions without exactly one king per color, with pawns on
    /// the first or last rank, or with an en passant target that could not
    /// follow a double push by the side not to move.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut position = Position::empty();
        for (square, piece) in self.pieces {
            position.set_piece(square, Some(piece));
        }
        position.side_to_move = self.side_to_move;
        position.castling_rights = self.castling_rights;
        position.en_passant_target = self.en_passant_target;
        position.validate()?;
        Ok(position)
    }
}

impl Position {
    /// Checks shared by the builder and deserialization.
    pub(crate) fn validate(&self) -> Result<(), PositionError> {
        if let Some((square, _)) = self.pieces().find(|(sq, p)| {
            p.kind == PieceKind::Pawn && (sq.row() == 1 || sq.row() == 8)
        }) {
            return Err(PositionError::PawnOnBackRank { square });
        }

        for color in Color::BOTH {
            let kings = self
                .pieces()
                .filter(|(_, p)| p.is(color, PieceKind::King))
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::DuplicateKing { color }),
            }
        }

        if let Some(target) = self.en_passant_target {
            // The pawn that just double-pushed belongs to the side not on move
            // and sits one row past the target in its own direction.
            let pusher = self.side_to_move.opponent();
            let expected_row = (pusher.pawn_start_rank() as i8 + pusher.pawn_direction()) as u8;
            let pawn_behind = target
                .offset(pusher.pawn_direction(), 0)
                .and_then(|sq| self.piece_at(sq))
                .is_some_and(|p| p.is(pusher, PieceKind::Pawn));
            if target.row() != expected_row || !self.is_empty(target) || !pawn_behind {
                return Err(PositionError::InvalidEnPassant { square: target });
            }
        }
        Ok(())
    }
}
