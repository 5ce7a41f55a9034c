//! Cell and token primitives.
//!
//! ## Token
//!
//! A numeric token in `1..=9`. Each token can be placed at most once per game.
//!
//! ## Cell
//!
//! A board cell is either `Empty` or `Filled` with a token. Empty cells are
//! an explicit variant rather than a sentinel number, so line arithmetic can
//! treat them as absent instead of zero.

use serde::{Deserialize, Serialize};

use crate::error::IllegalAction;

/// Smallest placeable token.
pub const MIN_TOKEN: u8 = 1;

/// Largest placeable token.
pub const MAX_TOKEN: u8 = 9;

/// A numeric token in `1..=9`.
///
/// Construction is fallible, so a `Token` in hand is always in range.
///
/// ```
/// use numeric_ttt::core::Token;
///
/// assert_eq!(Token::new(9).map(Token::get), Some(9));
/// assert!(Token::new(0).is_none());
/// assert!(Token::new(10).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Token(u8);

impl Token {
    /// Every token in ascending order.
    pub const ALL: [Token; 9] = [
        Token(1),
        Token(2),
        Token(3),
        Token(4),
        Token(5),
        Token(6),
        Token(7),
        Token(8),
        Token(9),
    ];

    /// Create a token, returning `None` outside `1..=9`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MIN_TOKEN && value <= MAX_TOKEN {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether the token is odd (agent pool).
    #[must_use]
    pub const fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    /// Bit for this token in a used-token mask.
    #[must_use]
    pub(crate) const fn bit(self) -> u16 {
        1 << self.0
    }
}

impl TryFrom<u8> for Token {
    type Error = IllegalAction;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Token::new(value).ok_or(IllegalAction::InvalidToken(value))
    }
}

impl From<Token> for u8 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No token placed yet.
    #[default]
    Empty,
    /// Holds a placed token.
    Filled(Token),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the token in this cell, if any.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Filled(token) => Some(token),
        }
    }

    /// Get the numeric value in this cell, if any.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Filled(token) => Some(token.get()),
        }
    }
}

impl From<Option<Token>> for Cell {
    fn from(token: Option<Token>) -> Self {
        token.map_or(Cell::Empty, Cell::Filled)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Filled(token) => write!(f, "{}", token),
        }
    }
}
