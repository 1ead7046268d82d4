use super::super::attack_tables::{DIAGONAL_RAYS, ORTHOGONAL_RAYS};
use super::super::{Color, Move, MoveKind, MoveList, Piece, Position, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn rays(self) -> &'static [(i8, i8)] {
        const QUEEN_RAYS: [(i8, i8); 8] = [
            ORTHOGONAL_RAYS[0],
            ORTHOGONAL_RAYS[1],
            ORTHOGONAL_RAYS[2],
            ORTHOGONAL_RAYS[3],
            DIAGONAL_RAYS[0],
            DIAGONAL_RAYS[1],
            DIAGONAL_RAYS[2],
            DIAGONAL_RAYS[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONAL_RAYS,
            SliderType::Rook => &ORTHOGONAL_RAYS,
            SliderType::Queen => &QUEEN_RAYS,
        }
    }
}

impl Position {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, dc) in slider.rays() {
            let mut cursor = from.offset(dr, dc);
            while let Some(to_sq) = cursor {
                match self.piece_at(to_sq) {
                    None => moves.push(Move::new(to_sq, MoveKind::Normal)),
                    Some(target) => {
                        if target.color != color {
                            moves.push(Move::new(to_sq, MoveKind::Capture));
                        }
                        break;
                    }
                }
                cursor = to_sq.offset(dr, dc);
            }
        }
        moves
    }

    /// First occupied square along a ray, if any.
    pub(crate) fn first_piece_along(
        &self,
        from: Square,
        (dr, dc): (i8, i8),
    ) -> Option<Piece> {
        let mut cursor = from.offset(dr, dc);
        while let Some(sq) = cursor {
            if let Some(piece) = self.piece_at(sq) {
                return Some(piece);
            }
            cursor = sq.offset(dr, dc);
        }
        None
    }
}
