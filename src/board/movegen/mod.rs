mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Color, Move, MoveList, Piece, PieceKind, Position, PromotionPiece, Square};

impl Position {
    /// Legal moves for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not on
    /// move.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        match self.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => self
                .generate_pseudo_moves(from, piece)
                .into_iter()
                .filter(|mv| self.keeps_king_safe(from, piece.color, *mv))
                .collect(),
            _ => MoveList::new(),
        }
    }

    /// Every legal move of the side to move, grouped by origin square.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<(Square, Move)> {
        let mut all = Vec::new();
        for (from, _) in self.own_pieces() {
            all.extend(self.legal_moves(from).into_iter().map(|mv| (from, mv)));
        }
        all
    }

    /// True as soon as any piece of the side to move has a legal move.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.own_pieces()
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    fn own_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let color = self.side_to_move;
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    fn generate_pseudo_moves(&self, from: Square, piece: Piece) -> MoveList {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::Bishop => self.generate_slider_moves(from, piece.color, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(from, piece.color, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(from, piece.color, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(from, piece),
        }
    }

    /// Plays the move on a copy and asks whether the mover's king survives.
    /// The promoted piece never changes the answer, so queen stands in.
    fn keeps_king_safe(&self, from: Square, mover: Color, mv: Move) -> bool {
        let mut next = self.clone();
        next.make_move(from, mv, PromotionPiece::Queen);
        !next.is_in_check(mover)
    }

    /// Counts leaf nodes of the legal move tree, expanding every promotion
    /// choice.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for (from, mv) in self.all_legal_moves() {
            let choices: &[PromotionPiece] = if mv.kind.is_promotion() {
                &PromotionPiece::ALL
            } else {
                &[PromotionPiece::Queen]
            };
            for &choice in choices {
                if depth == 1 {
                    nodes += 1;
                    continue;
                }
                let mut next = self.clone();
                next.make_move(from, mv, choice);
                nodes += next.perft(depth - 1);
            }
        }

        nodes
    }
}
