//! Game status, draw reasons and final outcomes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Position};

/// Status reported after every transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStatus {
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub side_to_move: Color,
}

impl GameStatus {
    /// Evaluate check, checkmate and stalemate for the side to move.
    #[must_use]
    pub fn evaluate(position: &Position) -> Self {
        let side_to_move = position.side_to_move();
        let check = position.is_in_check(side_to_move);
        let can_move = position.has_legal_move();
        GameStatus {
            check,
            checkmate: check && !can_move,
            stalemate: !check && !can_move,
            side_to_move,
        }
    }

    /// Checkmate and stalemate end the game.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.checkmate || self.stalemate
    }
}

/// Why a game was drawn without agreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
    Resignation { winner: Color },
    Agreement,
    Timeout { winner: Color },
}

impl Outcome {
    /// The winning color, or `None` for any kind of draw.
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner }
            | Outcome::Resignation { winner }
            | Outcome::Timeout { winner } => Some(*winner),
            Outcome::Stalemate | Outcome::Draw(_) | Outcome::Agreement => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            Outcome::Stalemate => write!(f, "Draw: Stalemate"),
            Outcome::Draw(reason) => write!(f, "Draw: {reason}"),
            Outcome::Resignation { winner } => write!(f, "{winner} wins by resignation"),
            Outcome::Agreement => write!(f, "Draw by agreement"),
            Outcome::Timeout { winner } => write!(f, "{winner} wins on time"),
        }
    }
}
