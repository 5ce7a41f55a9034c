//! Opponent move selection.
//!
//! The engine asks an `OpponentPolicy` for the environment's reply inside
//! `step`. The crate ships only `UniformOpponent`; strategic play is left to
//! callers.

use crate::core::{Action, Board, GameRng, Side};

/// Policy for choosing the opponent's action.
pub trait OpponentPolicy: Send + Sync {
    /// Choose an action for the opponent.
    ///
    /// Returns `None` if the opponent has no legal action.
    fn choose_action(&self, board: &Board, rng: &mut GameRng) -> Option<Action>;
}

/// Uniform random opponent.
///
/// Every (position, even token) pair in the opponent's action space is
/// equally likely.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_action(&self, board: &Board, rng: &mut GameRng) -> Option<Action> {
        let actions = board.legal_actions(Side::Opponent);
        rng.choose(&actions).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uniform_returns_legal_action() {
        let board = Board::from_values([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None])
            .unwrap();
        let legal = board.legal_actions(Side::Opponent);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let action = UniformOpponent.choose_action(&board, &mut rng).unwrap();
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn test_uniform_covers_action_space() {
        let board = Board::EMPTY;
        let mut rng = GameRng::new(1);

        let seen: HashSet<Action> = (0..2000)
            .filter_map(|_| UniformOpponent.choose_action(&board, &mut rng))
            .collect();

        // 9 positions x 4 even tokens.
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn test_uniform_none_without_even_tokens() {
        let board = Board::from_values([Some(2), Some(4), Some(6), Some(8), None, None, None, None, None])
            .unwrap();
        let mut rng = GameRng::new(42);

        assert_eq!(UniformOpponent.choose_action(&board, &mut rng), None);
    }
}
