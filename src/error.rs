use crate::core::{Side, Token};

/// Why an action cannot be played on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalAction {
    #[error("position {0} is outside the 3x3 board")]
    OutOfBounds(usize),

    #[error("position {position} already holds token {token}")]
    Occupied { position: usize, token: Token },

    #[error("value {0} is not a token in 1..=9")]
    InvalidToken(u8),

    #[error("token {0} has already been placed")]
    TokenUsed(Token),

    #[error("token {token} is not in the {side} pool")]
    WrongSide { token: Token, side: Side },
}

/// Errors raised while advancing a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),

    /// The opponent was asked to move on a board where it cannot. `step`
    /// only gets here if the caller's board breaks the token invariants.
    #[error("opponent has no legal move ({open_positions} open positions, {tokens_left} tokens left)")]
    NoLegalOpponentMove {
        open_positions: usize,
        tokens_left: usize,
    },
}

/// Errors in engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("winning sum {sum} is unreachable; three distinct tokens sum to {min}..={max}")]
    UnreachableWinningSum { sum: u32, min: u32, max: u32 },
}
