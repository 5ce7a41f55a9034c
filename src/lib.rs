//! # numeric-ttt
//!
//! Rules engine for Numerical Tic-Tac-Toe, built for RL training loops.
//!
//! Two sides place distinct tokens `1..=9` on a 3x3 board: the agent plays
//! odd tokens, the opponent plays even tokens. A fully filled row, column or
//! diagonal whose tokens add up to the winning sum wins.
//!
//! ## Design Principles
//!
//! 1. **Stateless Engine**: The engine holds only its configuration. Boards
//!    are `Copy` values threaded through by the caller.
//!
//! 2. **Explicit Empties**: Cells are `Empty | Filled(Token)`. A line with an
//!    empty cell has no sum rather than a partial one.
//!
//! 3. **Injected Randomness**: The opponent draws from a caller-owned
//!    `GameRng`, so a seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Tokens, cells, sides, board, actions, RNG, configuration
//! - `rules`: Line sums, classification, rewards, opponent policy, `step`
//! - `error`: Illegal actions, rule violations, configuration errors
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionIter, Board, Cell, EngineConfig, GameRng, GameRngState, Side, Token, TokenPool,
};

pub use crate::error::{ConfigError, IllegalAction, RulesError};

pub use crate::rules::{
    Classification, NumericTicTacToe, OpponentPolicy, Outcome, StepResult, UniformOpponent,
};
