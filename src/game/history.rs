use std::collections::HashMap;
use std::fmt;

use crate::board::{Move, MoveKind, Piece, PieceKind, Position, PromotionPiece, RepetitionKey, Square};

/// One applied move, with the full position as it stood before the move.
///
/// Undo restores `snapshot` verbatim, so no inverse move logic exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) piece: Piece,
    pub(crate) kind: MoveKind,
    pub(crate) promotion: Option<PromotionPiece>,
    pub(crate) captured: Option<Piece>,
    pub(crate) snapshot: Position,
}

impl HistoryEntry {
    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Square {
        self.to
    }

    /// The moving piece as it was before the move.
    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The move as produced by the generator.
    #[must_use]
    pub fn as_move(&self) -> Move {
        Move::new(self.to, self.kind)
    }

    /// The promotion choice, for promotion moves only.
    #[must_use]
    pub fn promotion(&self) -> Option<PromotionPiece> {
        self.promotion
    }

    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Position before the move.
    #[must_use]
    pub fn snapshot(&self) -> &Position {
        &self.snapshot
    }

    #[must_use]
    pub fn is_pawn_move(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::CastleKingside => return write!(f, "O-O"),
            MoveKind::CastleQueenside => return write!(f, "O-O-O"),
            _ => {}
        }
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{separator}{}", self.from, self.to)?;
        if let Some(choice) = self.promotion {
            write!(f, "={}", choice.kind().to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// Occurrence counts of positions by repetition identity.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<RepetitionKey, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn increment(&mut self, position: &Position) -> u32 {
        let count = self.counts.entry(position.repetition_key()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }
}
