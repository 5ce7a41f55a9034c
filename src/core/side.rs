//! The two sides of a game and their token pools.
//!
//! The agent places odd tokens, the opponent places even tokens. Turn
//! ownership is carried by `Side` rather than re-derived from parity at each
//! call site.

use serde::{Deserialize, Serialize};

use super::cell::Token;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The learning side. Owns the odd tokens `1, 3, 5, 7, 9`.
    Agent,
    /// The environment side. Owns the even tokens `2, 4, 6, 8`.
    Opponent,
}

impl Side {
    /// Both sides, agent first.
    pub const ALL: [Side; 2] = [Side::Agent, Side::Opponent];

    /// The side whose pool contains `token`.
    #[must_use]
    pub const fn of_token(token: Token) -> Self {
        if token.is_odd() {
            Side::Agent
        } else {
            Side::Opponent
        }
    }

    /// Check if `token` belongs to this side's pool.
    #[must_use]
    pub const fn owns(self, token: Token) -> bool {
        matches!(
            (self, token.is_odd()),
            (Side::Agent, true) | (Side::Opponent, false)
        )
    }

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Agent => Side::Opponent,
            Side::Opponent => Side::Agent,
        }
    }

    /// Check if this is the agent.
    #[must_use]
    pub const fn is_agent(self) -> bool {
        matches!(self, Side::Agent)
    }

    /// Every token in this side's full pool, ascending.
    ///
    /// ```
    /// use numeric_ttt::core::Side;
    ///
    /// let evens: Vec<u8> = Side::Opponent.tokens().map(|t| t.get()).collect();
    /// assert_eq!(evens, vec![2, 4, 6, 8]);
    /// ```
    pub fn tokens(self) -> impl Iterator<Item = Token> {
        Token::ALL.into_iter().filter(move |&token| self.owns(token))
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Agent => write!(f, "agent"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}
