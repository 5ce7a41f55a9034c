//! Action representation: a token placed at a board position.
//!
//! Actions are transient. They are produced by enumerating a board's action
//! space and consumed by a transition; the engine never stores them.

use serde::{Deserialize, Serialize};

use super::board::{Positions, TokenPool};
use super::cell::Token;
use crate::error::IllegalAction;

/// Place `value` at `position` (row-major index `0..9`).
///
/// ## Example
///
/// ```
/// use numeric_ttt::core::Action;
///
/// let action = Action::try_new(7, 9).unwrap();
/// assert_eq!(action.position, 7);
/// assert_eq!(action.value.get(), 9);
///
/// assert!(Action::try_new(7, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Board index to fill.
    pub position: usize,

    /// Token to place.
    pub value: Token,
}

impl Action {
    /// Create an action from a position and token.
    #[must_use]
    pub const fn new(position: usize, value: Token) -> Self {
        Self { position, value }
    }

    /// Create an action from raw numbers.
    ///
    /// Only the token range is checked here; position bounds and occupancy
    /// depend on the board and are checked by `Board::try_apply`.
    pub fn try_new(position: usize, value: u8) -> Result<Self, IllegalAction> {
        Ok(Self::new(position, Token::try_from(value)?))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.position, self.value)
    }
}

/// Lazy product of open positions and a token pool.
///
/// Position varies slower, value faster. The iterator owns copies of both
/// inputs, so it is independent of the board it was built from.
#[derive(Clone, Debug)]
pub struct ActionIter {
    positions: Positions,
    pool: TokenPool,
    next: usize,
}

impl ActionIter {
    pub(crate) fn new(positions: Positions, pool: TokenPool) -> Self {
        Self {
            positions,
            pool,
            next: 0,
        }
    }

    fn total(&self) -> usize {
        self.positions.len() * self.pool.len()
    }
}

impl Iterator for ActionIter {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        if self.next >= self.total() {
            return None;
        }

        let width = self.pool.len();
        let action = Action::new(
            self.positions[self.next / width],
            self.pool[self.next % width],
        );
        self.next += 1;
        Some(action)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ActionIter {}

impl std::iter::FusedIterator for ActionIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn token(value: u8) -> Token {
        Token::new(value).unwrap()
    }

    #[test]
    fn test_try_new() {
        let action = Action::try_new(4, 5).unwrap();
        assert_eq!(action, Action::new(4, token(5)));

        assert_eq!(Action::try_new(4, 0), Err(IllegalAction::InvalidToken(0)));
        assert_eq!(Action::try_new(4, 10), Err(IllegalAction::InvalidToken(10)));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(format!("{}", Action::new(7, token(9))), "(7, 9)");
    }

    #[test]
    fn test_iter_order_is_position_major() {
        let iter = ActionIter::new(smallvec![2, 5], smallvec![token(1), token(3), token(7)]);
        assert_eq!(iter.len(), 6);

        let pairs: Vec<(usize, u8)> = iter.map(|a| (a.position, a.value.get())).collect();
        assert_eq!(
            pairs,
            vec![(2, 1), (2, 3), (2, 7), (5, 1), (5, 3), (5, 7)]
        );
    }

    #[test]
    fn test_iter_empty_inputs() {
        let no_pool = ActionIter::new(smallvec![0, 1, 2], TokenPool::new());
        assert_eq!(no_pool.len(), 0);
        assert_eq!(no_pool.count(), 0);

        let no_positions = ActionIter::new(Positions::new(), smallvec![token(2)]);
        assert_eq!(no_positions.count(), 0);
    }

    #[test]
    fn test_iter_size_hint_shrinks() {
        let mut iter = ActionIter::new(smallvec![0], smallvec![token(2), token(4)]);
        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        assert_eq!(iter.size_hint(), (1, Some(1)));
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::new(3, token(8));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
