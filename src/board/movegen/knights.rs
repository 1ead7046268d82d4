use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, Move, MoveKind, MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for &to_sq in &KNIGHT_TARGETS[from.index()] {
            match self.piece_at(to_sq) {
                None => moves.push(Move::new(to_sq, MoveKind::Normal)),
                Some(target) if target.color != color => {
                    moves.push(Move::new(to_sq, MoveKind::Capture));
                }
                Some(_) => {}
            }
        }
        moves
    }
}
