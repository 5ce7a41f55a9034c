//! Game outcome classification and the reward table.

use serde::{Deserialize, Serialize};

use super::lines;
use crate::core::{Board, Side};

/// Reward for the agent completing a winning line.
pub const WIN_REWARD: i32 = 10;

/// Reward when the opponent completes a winning line.
pub const LOSS_REWARD: i32 = -10;

/// Reward for a full board with no winning line.
pub const TIE_REWARD: i32 = 0;

/// Per-round cost while the game continues.
pub const MOVE_REWARD: i32 = -1;

/// Status of a board snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    Resume,
    /// Some line hits the winning sum.
    Win,
    /// Board full, no winning line.
    Tie,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Resume)
    }

    /// Reward for reaching this outcome with a move by `mover`.
    #[must_use]
    pub const fn reward_for(self, mover: Side) -> i32 {
        reward(self, mover.is_agent())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Resume => write!(f, "Resume"),
            Outcome::Win => write!(f, "Win"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Terminal flag plus outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub terminal: bool,
    pub outcome: Outcome,
}

impl From<Outcome> for Classification {
    fn from(outcome: Outcome) -> Self {
        Self {
            terminal: outcome.is_terminal(),
            outcome,
        }
    }
}

/// Classify a board against `winning_sum`.
///
/// Win is checked before Tie, so a full board with a winning line is a Win.
#[must_use]
pub fn classify(board: &Board, winning_sum: u32) -> Classification {
    let outcome = if lines::is_winning(board, winning_sum) {
        Outcome::Win
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Resume
    };
    outcome.into()
}

/// Reward lookup.
///
/// | outcome | agent move | opponent move |
/// |---------|-----------:|--------------:|
/// | Win     |         10 |           -10 |
/// | Tie     |          0 |             0 |
/// | Resume  |         -1 |            -1 |
#[must_use]
pub const fn reward(outcome: Outcome, is_agent_move: bool) -> i32 {
    match (outcome, is_agent_move) {
        (Outcome::Win, true) => WIN_REWARD,
        (Outcome::Win, false) => LOSS_REWARD,
        (Outcome::Tie, _) => TIE_REWARD,
        (Outcome::Resume, _) => MOVE_REWARD,
    }
}
