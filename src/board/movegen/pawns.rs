use super::super::{Color, Move, MoveKind, MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.is_empty(forward_sq) {
                let kind = if forward_sq.row() == promotion_rank {
                    MoveKind::Promotion
                } else {
                    MoveKind::Normal
                };
                moves.push(Move::new(forward_sq, kind));

                if from.row() == color.pawn_start_rank() {
                    if let Some(double_sq) = forward_sq.offset(dir, 0) {
                        if self.is_empty(double_sq) {
                            moves.push(Move::new(double_sq, MoveKind::DoublePush));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target_sq) = from.offset(dir, dc) else {
                continue;
            };
            let enemy = self
                .piece_at(target_sq)
                .is_some_and(|target| target.color != color);
            if enemy {
                let kind = if target_sq.row() == promotion_rank {
                    MoveKind::PromotionCapture
                } else {
                    MoveKind::Capture
                };
                moves.push(Move::new(target_sq, kind));
            } else if Some(target_sq) == self.en_passant_target {
                moves.push(Move::new(target_sq, MoveKind::EnPassant));
            }
        }

        moves
    }
}
