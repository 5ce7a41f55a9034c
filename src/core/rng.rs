//! Deterministic random number generation for opponent moves.
//!
//! The engine never touches a process-global RNG. Callers own a `GameRng`
//! and pass it into every call that draws, so a fixed seed replays the same
//! games.
//!
//! ```
//! use numeric_ttt::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1) however
/// many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_choose_single_element() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            assert_eq!(rng.choose(&["only"]), Some(&"only"));
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
