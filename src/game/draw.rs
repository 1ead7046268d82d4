//! Automatic draw detection over the live position and its history.

use std::iter;

use super::history::RepetitionTable;
use super::{DrawReason, Game};

/// Half-moves without a pawn move or capture before the fifty-move rule applies.
pub const FIFTY_MOVE_HALF_MOVES: usize = 100;

/// Occurrences of one position that make a threefold repetition.
pub const REPETITION_LIMIT: u32 = 3;

impl Game {
    /// True once 100 consecutive half-moves were played without a pawn move
    /// or a capture.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        let quiet = self
            .history
            .iter()
            .rev()
            .take_while(|entry| !entry.is_pawn_move() && !entry.is_capture())
            .count();
        quiet >= FIFTY_MOVE_HALF_MOVES
    }

    /// True if the current position, or any earlier one in this game, has
    /// occurred three times with the same side to move, castling rights and
    /// en passant target.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let mut table = RepetitionTable::new();
        self.history
            .iter()
            .map(|entry| &entry.snapshot)
            .chain(iter::once(&self.position))
            .any(|position| table.increment(position) >= REPETITION_LIMIT)
    }

    /// True if neither side can possibly deliver mate.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    /// First applicable automatic draw, checked in the order fifty-move rule,
    /// threefold repetition, insufficient material.
    #[must_use]
    pub fn detect_draw(&self) -> Option<DrawReason> {
        if self.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }
}
