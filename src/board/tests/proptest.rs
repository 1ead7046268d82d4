//! Property-based tests using proptest.

use crate::board::{Position, PromotionPiece};
use crate::game::Game;
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Plays random legal moves through the game, returning the position seen
/// before each one.
fn play_random(game: &mut Game, rng: &mut StdRng, num_moves: usize) -> Vec<Position> {
    let mut before = Vec::new();
    for _ in 0..num_moves {
        let moves = game.position().all_legal_moves();
        let Some(&(from, mv)) = moves.choose(rng) else {
            break;
        };
        let choice = *PromotionPiece::ALL.choose(rng).unwrap();
        before.push(game.create_snapshot());
        game.apply_move_with_promotion(from, mv.to, mv, choice).unwrap();
    }
    before
}

proptest! {
    /// Property: undoing every move walks back through the exact positions
    #[test]
    fn prop_undo_restores_each_position(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut before = play_random(&mut game, &mut rng, num_moves);

        while let Some(expected) = before.pop() {
            prop_assert!(game.undo_last_move().is_some());
            prop_assert_eq!(game.position(), &expected);
        }
        prop_assert_eq!(game.position(), &Position::standard());
        prop_assert!(game.history().is_empty());
    }

    /// Property: redo after a full undo reaches the same final position
    #[test]
    fn prop_redo_replays_game(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        play_random(&mut game, &mut rng, num_moves);
        let end = game.create_snapshot();
        let played = game.history().len();

        while game.undo_last_move().is_some() {}
        while game.redo().is_some() {}

        prop_assert_eq!(game.history().len(), played);
        prop_assert_eq!(game.position(), &end);
    }

    /// Property: no legal move leaves the mover's king attacked, and the
    /// reported status matches the position
    #[test]
    fn prop_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        play_random(&mut game, &mut rng, num_moves);

        let position = game.position();
        let mover = position.side_to_move();
        for (from, mv) in position.all_legal_moves() {
            let mut next = position.clone();
            next.make_move(from, mv, PromotionPiece::Queen);
            prop_assert!(!next.is_in_check(mover));
        }

        let status = game.status();
        prop_assert_eq!(status.check, position.is_in_check(mover));
        prop_assert_eq!(status.checkmate, position.is_checkmate());
        prop_assert_eq!(status.stalemate, position.is_stalemate());
    }

    /// Property: only the side to move has legal moves
    #[test]
    fn prop_opponent_pieces_have_no_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        play_random(&mut game, &mut rng, num_moves);

        let position = game.position();
        let waiting = position.side_to_move().opponent();
        for (square, _) in position.pieces().filter(|(_, p)| p.color == waiting) {
            prop_assert!(position.legal_moves(square).is_empty());
        }
    }
}
