//! Core types: tokens, cells, sides, board, actions, RNG, configuration.
//!
//! Everything here is rule-agnostic except the parity split of the token
//! domain. Winning and scoring live in `rules`.

pub mod cell;
pub mod side;
pub mod board;
pub mod action;
pub mod rng;
pub mod config;

pub use cell::{Cell, Token, MAX_TOKEN, MIN_TOKEN};
pub use side::Side;
pub use board::{Board, Positions, TokenPool, CELL_COUNT, SIDE_LEN};
pub use action::{Action, ActionIter};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, DEFAULT_WINNING_SUM, MAX_LINE_SUM, MIN_LINE_SUM};
