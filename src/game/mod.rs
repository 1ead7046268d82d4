//! The rules engine: owns the live position, applies and undoes moves,
//! recomputes status after every transition and answers draw queries.
//!
//! # Example
//! ```
//! use chess_rules::board::Square;
//! use chess_rules::game::Game;
//!
//! let mut game = Game::new();
//! let e2 = Square::new(2, 5).unwrap();
//! let e4 = Square::new(4, 5).unwrap();
//! let mv = game.legal_moves(e2).find(e4).unwrap();
//! let status = game.apply_move(e2, e4, mv).unwrap();
//! assert!(!status.check);
//! assert_eq!(game.undo_last_move().map(|entry| entry.to()), Some(e4));
//! ```

mod draw;
mod history;
mod listener;
mod promotion;
mod status;


use std::fmt;

use crate::board::{Color, Move, MoveError, MoveList, Piece, Position, PromotionPiece, Square};

pub use draw::{FIFTY_MOVE_HALF_MOVES, REPETITION_LIMIT};
pub use history::HistoryEntry;
pub use listener::StatusListener;
pub use promotion::{FixedPromotion, PromotionResolver};
pub use status::{DrawReason, GameStatus, Outcome};

/// A game in progress.
pub struct Game {
    position: Position,
    history: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    status: GameStatus,
    conclusion: Option<Outcome>,
    draw_offer: Option<Color>,
    promotion_resolver: Option<Box<dyn PromotionResolver>>,
    listeners: Vec<Box<dyn StatusListener>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("position", &self.position)
            .field("history", &self.history.len())
            .field("redo", &self.redo_stack.len())
            .field("status", &self.status)
            .field("conclusion", &self.conclusion)
            .field("draw_offer", &self.draw_offer)
            .finish_non_exhaustive()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::standard())
    }

    /// A game continuing from an arbitrary position.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let status = GameStatus::evaluate(&position);
        Game {
            position,
            history: Vec::new(),
            redo_stack: Vec::new(),
            status,
            conclusion: None,
            draw_offer: None,
            promotion_resolver: None,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_promotion_resolver(mut self, resolver: impl PromotionResolver + 'static) -> Self {
        self.set_promotion_resolver(resolver);
        self
    }

    /// Consulted for promotion moves applied without an explicit choice.
    /// Without a resolver pawns promote to a queen.
    pub fn set_promotion_resolver(&mut self, resolver: impl PromotionResolver + 'static) {
        self.promotion_resolver = Some(Box::new(resolver));
    }

    pub fn subscribe(&mut self, listener: impl StatusListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read-only view of the live position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.conclusion.is_none() && !self.history.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.conclusion.is_none() && !self.redo_stack.is_empty()
    }

    /// Square of the king currently in check, for highlighting.
    #[must_use]
    pub fn checked_king(&self) -> Option<Square> {
        if self.status.check {
            self.position.king_square(self.status.side_to_move)
        } else {
            None
        }
    }

    /// Legal moves for the piece on `from`; empty once the game is concluded.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        if self.conclusion.is_some() {
            return MoveList::new();
        }
        self.position.legal_moves(from)
    }

    /// Apply a move obtained from `legal_moves(from)`.
    ///
    /// Promotions use the configured resolver, or a queen.
    ///
    /// # Errors
    /// Returns a `MoveError` and leaves the game untouched when the game is
    /// concluded, `from` holds no piece of the side to move, `to` differs
    /// from the move's destination, or the move is not legal.
    pub fn apply_move(&mut self, from: Square, to: Square, mv: Move) -> Result<GameStatus, MoveError> {
        let piece = self.validate(from, to, mv)?;
        let promotion = if mv.kind.is_promotion() {
            Some(self.resolve_promotion(piece.color, to))
        } else {
            None
        };
        self.redo_stack.clear();
        Ok(self.commit(from, piece, mv, promotion))
    }

    /// Apply a move with an explicit promotion choice. The choice is ignored
    /// for non-promotion moves.
    ///
    /// # Errors
    /// Same as [`Game::apply_move`].
    pub fn apply_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        mv: Move,
        choice: PromotionPiece,
    ) -> Result<GameStatus, MoveError> {
        let piece = self.validate(from, to, mv)?;
        let promotion = mv.kind.is_promotion().then_some(choice);
        self.redo_stack.clear();
        Ok(self.commit(from, piece, mv, promotion))
    }

    /// Take back the latest move, restoring the position stored with it.
    ///
    /// Returns `None` without touching anything when there is nothing to
    /// undo or the game has been concluded.
    pub fn undo_last_move(&mut self) -> Option<HistoryEntry> {
        if self.conclusion.is_some() {
            return None;
        }
        let entry = self.history.pop()?;
        self.position = entry.snapshot.clone();
        self.redo_stack.push(entry.clone());

        #[cfg(feature = "logging")]
        log::debug!("undid {entry}");

        self.refresh_status();
        Some(entry)
    }

    /// Re-apply the most recently undone move with its original promotion
    /// choice.
    pub fn redo(&mut self) -> Option<GameStatus> {
        if self.conclusion.is_some() {
            return None;
        }
        let entry = self.redo_stack.pop()?;
        let mv = entry.as_move();
        match self.validate(entry.from, entry.to, mv) {
            Ok(piece) => {
                #[cfg(feature = "logging")]
                log::debug!("redoing {entry}");
                Some(self.commit(entry.from, piece, mv, entry.promotion))
            }
            Err(_) => {
                self.redo_stack.clear();
                None
            }
        }
    }

    /// Deep copy of the live position.
    #[must_use]
    pub fn create_snapshot(&self) -> Position {
        self.position.clone()
    }

    /// Replace the live position. History is kept; pending redo moves are
    /// dropped since they may no longer fit.
    pub fn restore_snapshot(&mut self, snapshot: Position) -> GameStatus {
        self.position = snapshot;
        self.redo_stack.clear();
        self.refresh_status()
    }

    /// Start over from the standard position.
    pub fn reset(&mut self) -> GameStatus {
        self.position = Position::standard();
        self.history.clear();
        self.redo_stack.clear();
        self.conclusion = None;
        self.draw_offer = None;
        self.refresh_status()
    }

    /// The result, if the game is over by checkmate, stalemate or a recorded
    /// conclusion.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(outcome) = self.conclusion {
            return Some(outcome);
        }
        if !self.status.is_terminal() {
            return None;
        }
        Some(if self.status.checkmate {
            Outcome::Checkmate {
                winner: self.status.side_to_move.opponent(),
            }
        } else {
            Outcome::Stalemate
        })
    }

    /// `color` resigns. Returns `None` if the game was already over.
    pub fn resign(&mut self, color: Color) -> Option<Outcome> {
        self.conclude(Outcome::Resignation {
            winner: color.opponent(),
        })
    }

    /// `color` ran out of time; the clock lives outside the engine.
    /// Returns `None` if the game was already over.
    pub fn lose_on_time(&mut self, color: Color) -> Option<Outcome> {
        self.conclude(Outcome::Timeout {
            winner: color.opponent(),
        })
    }

    /// Both players agreed to a draw. Returns `None` if the game was already
    /// over.
    pub fn agree_draw(&mut self) -> Option<Outcome> {
        self.conclude(Outcome::Agreement)
    }

    /// `color` presses the draw button.
    ///
    /// With no offer pending this opens one. Offering again withdraws it,
    /// and an offer from the other color accepts it and concludes the game.
    /// An offer lapses once its maker is back on move. Returns the outcome
    /// only when the offer was accepted.
    pub fn offer_draw(&mut self, color: Color) -> Option<Outcome> {
        if self.outcome().is_some() {
            return None;
        }
        match self.draw_offer {
            None => {
                self.draw_offer = Some(color);
                None
            }
            Some(offered) if offered == color => {
                self.draw_offer = None;
                None
            }
            Some(_) => self.agree_draw(),
        }
    }

    /// Color with an open draw offer, if any.
    #[must_use]
    pub fn pending_draw_offer(&self) -> Option<Color> {
        self.draw_offer
    }

    /// Conclude the game as drawn if an automatic draw condition holds.
    pub fn claim_draw(&mut self) -> Option<Outcome> {
        let reason = self.detect_draw()?;
        self.conclude(Outcome::Draw(reason))
    }

    fn conclude(&mut self, outcome: Outcome) -> Option<Outcome> {
        if self.outcome().is_some() {
            return None;
        }
        #[cfg(feature = "logging")]
        log::info!("game concluded: {outcome}");
        self.conclusion = Some(outcome);
        self.draw_offer = None;
        self.redo_stack.clear();
        Some(outcome)
    }

    fn validate(&self, from: Square, to: Square, mv: Move) -> Result<Piece, MoveError> {
        let result = self.check_move(from, to, mv);
        #[cfg(feature = "logging")]
        if let Err(err) = &result {
            log::debug!("rejected {from}-{to}: {err}");
        }
        result
    }

    fn check_move(&self, from: Square, to: Square, mv: Move) -> Result<Piece, MoveError> {
        if self.conclusion.is_some() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .position
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color != self.position.side_to_move() {
            return Err(MoveError::NotYourTurn { square: from });
        }
        if mv.to != to {
            return Err(MoveError::DestinationMismatch {
                to,
                expected: mv.to,
            });
        }
        if !self.position.legal_moves(from).contains(&mv) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(piece)
    }

    fn resolve_promotion(&mut self, color: Color, to: Square) -> PromotionPiece {
        self.promotion_resolver
            .as_mut()
            .map_or(PromotionPiece::Queen, |resolver| resolver.choose(color, to))
    }

    fn commit(
        &mut self,
        from: Square,
        piece: Piece,
        mv: Move,
        promotion: Option<PromotionPiece>,
    ) -> GameStatus {
        let snapshot = self.position.clone();
        let captured = self
            .position
            .make_move(from, mv, promotion.unwrap_or_default());
        let entry = HistoryEntry {
            from,
            to: mv.to,
            piece,
            kind: mv.kind,
            promotion,
            captured,
            snapshot,
        };

        #[cfg(feature = "logging")]
        log::debug!("{} played {entry}", piece.color);

        self.history.push(entry);
        if self.draw_offer == Some(self.position.side_to_move()) {
            self.draw_offer = None;
        }
        self.refresh_status()
    }

    fn refresh_status(&mut self) -> GameStatus {
        let status = GameStatus::evaluate(&self.position);
        self.status = status;
        for listener in &mut self.listeners {
            listener.on_status(&status);
        }
        status
    }
}
