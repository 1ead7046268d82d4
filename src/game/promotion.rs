use crate::board::{Color, PromotionPiece, Square};

/// Decides what a pawn promotes to when the caller did not say.
///
/// The answer must be available synchronously: the engine asks while it
/// applies the move and never waits.
pub trait PromotionResolver {
    fn choose(&mut self, color: Color, square: Square) -> PromotionPiece;
}

impl<F> PromotionResolver for F
where
    F: FnMut(Color, Square) -> PromotionPiece,
{
    fn choose(&mut self, color: Color, square: Square) -> PromotionPiece {
        self(color, square)
    }
}

/// Always promotes to the same piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedPromotion(pub PromotionPiece);

impl PromotionResolver for FixedPromotion {
    fn choose(&mut self, _color: Color, _square: Square) -> PromotionPiece {
        self.0
    }
}
