use super::{CastleSide, Move, MoveKind, Piece, PieceKind, Position, PromotionPiece, Square};

impl Position {
    /// Plays `mv` for the piece on `from`, updating placement, castling
    /// rights, the en passant target and the side to move.
    ///
    /// The move must come from `legal_moves(from)`; nothing is re-checked
    /// here. `promotion` is only read for promotion moves. Returns the
    /// captured piece, if any.
    pub(crate) fn make_move(
        &mut self,
        from: Square,
        mv: Move,
        promotion: PromotionPiece,
    ) -> Option<Piece> {
        let piece = self.take_piece(from)?;
        let color = piece.color;

        let (captured, capture_sq) = match mv.kind {
            MoveKind::EnPassant => {
                // The pushed pawn sits one row behind the target, same column.
                let capture_sq = Square::at(
                    (mv.to.row() as i8 - color.pawn_direction()) as u8,
                    mv.to.col(),
                );
                (self.take_piece(capture_sq), capture_sq)
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => (None, mv.to),
            _ => (self.take_piece(mv.to), mv.to),
        };

        if let Some(side) = mv.kind.castle_side() {
            let row = from.row();
            if let Some(rook) = self.take_piece(Square::at(row, side.rook_col())) {
                self.set_piece(Square::at(row, side.rook_target_col()), Some(rook.moved()));
            }
        }

        let placed = if mv.kind.is_promotion() {
            Piece {
                kind: promotion.kind(),
                ..piece
            }
        } else {
            piece
        };
        self.set_piece(mv.to, Some(placed.moved()));

        self.update_castling_rights(from, piece, captured.map(|c| (capture_sq, c)));

        self.en_passant_target = if mv.kind == MoveKind::DoublePush {
            from.offset(color.pawn_direction(), 0)
        } else {
            None
        };
        self.side_to_move = self.side_to_move.opponent();

        captured
    }

    fn update_castling_rights(
        &mut self,
        from: Square,
        moved: Piece,
        captured: Option<(Square, Piece)>,
    ) {
        match moved.kind {
            PieceKind::King => self.castling_rights.remove_color(moved.color),
            PieceKind::Rook => {
                if let Some(side) = home_corner_side(from, moved) {
                    self.castling_rights.remove(moved.color, side);
                }
            }
            _ => {}
        }

        if let Some((sq, victim)) = captured {
            if victim.kind == PieceKind::Rook {
                if let Some(side) = home_corner_side(sq, victim) {
                    self.castling_rights.remove(victim.color, side);
                }
            }
        }
    }
}

/// The castling side a rook on `sq` belongs to, if `sq` is one of its
/// color's home corners.
fn home_corner_side(sq: Square, rook: Piece) -> Option<CastleSide> {
    if sq.row() != rook.color.back_rank() {
        return None;
    }
    CastleSide::from_rook_col(sq.col())
}
