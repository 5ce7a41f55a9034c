//! Engine configuration.
//!
//! The only rule parameter is the winning sum. It is fixed when the engine is
//! built and never changes afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default winning sum: the magic constant of the 3x3 magic square.
pub const DEFAULT_WINNING_SUM: u32 = 15;

/// Smallest sum of three distinct tokens (`1 + 2 + 3`).
pub const MIN_LINE_SUM: u32 = 6;

/// Largest sum of three distinct tokens (`7 + 8 + 9`).
pub const MAX_LINE_SUM: u32 = 24;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A fully filled line whose tokens add up to this value wins.
    pub winning_sum: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            winning_sum: DEFAULT_WINNING_SUM,
        }
    }
}

impl EngineConfig {
    /// Create a config with the given winning sum.
    #[must_use]
    pub fn new(winning_sum: u32) -> Self {
        Self { winning_sum }
    }

    /// Set the winning sum.
    #[must_use]
    pub fn with_winning_sum(mut self, winning_sum: u32) -> Self {
        self.winning_sum = winning_sum;
        self
    }

    /// Check that some line of three distinct tokens can reach the winning sum.
    ///
    /// Every value in `6..=24` is the sum of some three distinct tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_LINE_SUM..=MAX_LINE_SUM).contains(&self.winning_sum) {
            Ok(())
        } else {
            Err(ConfigError::UnreachableWinningSum {
                sum: self.winning_sum,
                min: MIN_LINE_SUM,
                max: MAX_LINE_SUM,
            })
        }
    }
}
