//! Game rules: line sums, classification, rewards, and the round engine.
//!
//! - `lines`: the 8 fixed lines and win detection
//! - `outcome`: Win/Tie/Resume classification and the reward table
//! - `policy`: opponent move selection
//! - `engine`: `NumericTicTacToe`, which ties them together into `step`

pub mod lines;
pub mod outcome;
pub mod policy;
pub mod engine;

pub use lines::{is_winning, line_sum, line_sums, winning_lines, LineSums, LINES};
pub use outcome::{
    classify, reward, Classification, Outcome, LOSS_REWARD, MOVE_REWARD, TIE_REWARD, WIN_REWARD,
};
pub use policy::{OpponentPolicy, UniformOpponent};
pub use engine::{NumericTicTacToe, StepResult};
