use super::super::attack_tables::{
    DIAGONAL_RAYS, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONAL_RAYS,
};
use super::super::{
    CastleSide, Color, Move, MoveKind, MoveList, Piece, PieceKind, Position, Square, KING_HOME_COL,
};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, king: Piece) -> MoveList {
        let mut moves = MoveList::new();

        for &to_sq in &KING_TARGETS[from.index()] {
            match self.piece_at(to_sq) {
                None => moves.push(Move::new(to_sq, MoveKind::Normal)),
                Some(target) if target.color != king.color => {
                    moves.push(Move::new(to_sq, MoveKind::Capture));
                }
                Some(_) => {}
            }
        }

        for side in CastleSide::BOTH {
            if self.can_castle(from, king, side) {
                let kind = match side {
                    CastleSide::Kingside => MoveKind::CastleKingside,
                    CastleSide::Queenside => MoveKind::CastleQueenside,
                };
                moves.push(Move::new(Square::at(from.row(), side.king_target_col()), kind));
            }
        }

        moves
    }

    fn can_castle(&self, from: Square, king: Piece, side: CastleSide) -> bool {
        let color = king.color;
        let back_rank = color.back_rank();

        if !self.castling_rights.has(color, side)
            || king.has_moved
            || from != Square::at(back_rank, KING_HOME_COL)
        {
            return false;
        }

        let rook_ready = self
            .piece_at(Square::at(back_rank, side.rook_col()))
            .is_some_and(|rook| rook.is(color, PieceKind::Rook) && !rook.has_moved);
        if !rook_ready {
            return false;
        }

        if side
            .between_cols()
            .iter()
            .any(|&col| !self.is_empty(Square::at(back_rank, col)))
        {
            return false;
        }

        // The path starts on the king's own square, so this also refuses
        // castling out of check.
        let opponent = color.opponent();
        !side
            .king_path_cols()
            .iter()
            .any(|&col| self.is_square_attacked(Square::at(back_rank, col), opponent))
    }

    /// Square of `color`'s king, if it has one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.is(color, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// Whether any piece of `attacker` attacks `square`.
    ///
    /// This is the one attack predicate used for check detection, castling
    /// safety and legality filtering.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // An attacking pawn stands one row behind the target in its own
        // direction of travel.
        let pawn_row = -attacker.pawn_direction();
        for dc in [-1, 1] {
            let pawn = square
                .offset(pawn_row, dc)
                .and_then(|sq| self.piece_at(sq));
            if pawn.is_some_and(|p| p.is(attacker, PieceKind::Pawn)) {
                return true;
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| self.piece_at(sq).is_some_and(|p| p.is(attacker, PieceKind::Knight)))
        {
            return true;
        }

        for &ray in &DIAGONAL_RAYS {
            if self
                .first_piece_along(square, ray)
                .is_some_and(|p| p.color == attacker && p.kind.attacks_diagonally())
            {
                return true;
            }
        }

        for &ray in &ORTHOGONAL_RAYS {
            if self
                .first_piece_along(square, ray)
                .is_some_and(|p| p.color == attacker && p.kind.attacks_straight())
            {
                return true;
            }
        }

        KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| self.piece_at(sq).is_some_and(|p| p.is(attacker, PieceKind::King)))
    }

    /// Whether `color`'s king is attacked. A side without a king is never in
    /// check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
