#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use super::error::PositionError;
use super::{CastlingRights, Color, Piece, PieceKind, Square};

/// The authoritative game position.
///
/// An 8x8 arena of optional pieces indexed by (row, col) plus side to move,
/// castling rights and the en passant target. Cells hold plain values, so a
/// `clone` is a complete, independent snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "UncheckedPosition")
)]
pub struct Position {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

/// Deserialized fields before the `PositionBuilder` checks run.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedPosition {
    squares: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: UncheckedPosition) -> Result<Self, Self::Error> {
        let position = Position {
            squares: raw.squares,
            side_to_move: raw.side_to_move,
            castling_rights: raw.castling_rights,
            en_passant_target: raw.en_passant_target,
        };
        position.validate()?;
        Ok(position)
    }
}

/// Identity of a position for repetition counting: placement by color and
/// kind (moved flags ignored), side to move, castling rights and en passant
/// target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct RepetitionKey {
    placement: [[Option<(Color, PieceKind)>; 8]; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn standard() -> Self {
        let mut position = Position::empty();
        for (i, kind) in BACK_RANK.iter().enumerate() {
            let col = i as u8 + 1;
            position.set_piece(Square::at(1, col), Some(Piece::new(Color::White, *kind)));
            position.set_piece(Square::at(8, col), Some(Piece::new(Color::Black, *kind)));
            position.set_piece(Square::at(2, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            position.set_piece(Square::at(7, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize - 1][sq.col() as usize - 1]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize - 1][sq.col() as usize - 1] = piece;
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize - 1][sq.col() as usize - 1].take()
    }

    /// Every occupied square with its piece, in index order (a1, b1, ..., h8)
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub(crate) fn repetition_key(&self) -> RepetitionKey {
        let mut placement = [[None; 8]; 8];
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                placement[row][col] = cell.map(|p| (p.color, p.kind));
            }
        }
        RepetitionKey {
            placement,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }

    /// Neither side can ever deliver mate: the only non-king material left is
    /// nothing, a single minor piece, or two bishops standing on the same
    /// square color (whoever owns them).
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut others = self.pieces().filter(|(_, p)| p.kind != PieceKind::King);

        let Some((first_sq, first)) = others.next() else {
            return true;
        };
        let Some((second_sq, second)) = others.next() else {
            return first.kind.is_minor();
        };
        if others.next().is_some() {
            return false;
        }

        first.kind == PieceKind::Bishop
            && second.kind == PieceKind::Bishop
            && first_sq.is_light() == second_sq.is_light()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::standard()
    }
}
