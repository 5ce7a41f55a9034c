//! The 3x3 board and its query functions.
//!
//! `Board` is a plain `Copy` value: nine cells in row-major order. The engine
//! never keeps a board between calls; callers thread it through `step` and
//! every transition returns a fresh value.
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::action::{Action, ActionIter};
use super::cell::{Cell, Token};
use super::side::Side;
use crate::error::IllegalAction;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Cells per row and per column.
pub const SIDE_LEN: usize = 3;

/// Open board positions, ascending.
pub type Positions = SmallVec<[usize; CELL_COUNT]>;

/// Tokens still available to one side, ascending. At most five (the odd pool).
pub type TokenPool = SmallVec<[Token; 5]>;

/// A 3x3 board of cells, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The canonical blank board.
    pub const EMPTY: Board = Board {
        cells: [Cell::Empty; CELL_COUNT],
    };

    /// Build a board from cells without checking token uniqueness.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Build a board from raw values, `None` meaning empty.
    ///
    /// Rejects values outside `1..=9` and tokens that appear twice.
    ///
    /// ```
    /// use numeric_ttt::core::Board;
    ///
    /// let board = Board::from_values([
    ///     Some(1), Some(2), Some(3),
    ///     Some(4), None, None,
    ///     None, None, None,
    /// ]).unwrap();
    /// assert_eq!(board.allowed_positions().as_slice(), &[4, 5, 6, 7, 8]);
    ///
    /// assert!(Board::from_values([Some(1), Some(1), None, None, None, None, None, None, None]).is_err());
    /// ```
    pub fn from_values(values: [Option<u8>; CELL_COUNT]) -> Result<Self, IllegalAction> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut used = 0u16;

        for (cell, value) in cells.iter_mut().zip(values) {
            let Some(value) = value else { continue };
            let token = Token::try_from(value)?;
            if used & token.bit() != 0 {
                return Err(IllegalAction::TokenUsed(token));
            }
            used |= token.bit();
            *cell = Cell::Filled(token);
        }

        Ok(Self { cells })
    }

    /// Raw values, `None` meaning empty.
    #[must_use]
    pub fn values(&self) -> [Option<u8>; CELL_COUNT] {
        self.cells.map(Cell::value)
    }

    /// All cells, row-major.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get the cell at `position`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    // === Queries ===

    /// Every empty index, ascending. Empty for a full board.
    #[must_use]
    pub fn allowed_positions(&self) -> Positions {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Tokens already on the board, in board order.
    pub fn used_values(&self) -> impl Iterator<Item = Token> + '_ {
        self.cells.iter().filter_map(|cell| cell.token())
    }

    /// Check if `token` has been placed.
    #[must_use]
    pub fn is_used(&self, token: Token) -> bool {
        self.used_mask() & token.bit() != 0
    }

    fn used_mask(&self) -> u16 {
        self.used_values().fold(0, |mask, token| mask | token.bit())
    }

    /// Unused tokens for one side, ascending.
    #[must_use]
    pub fn pool(&self, side: Side) -> TokenPool {
        let used = self.used_mask();
        side.tokens().filter(|t| used & t.bit() == 0).collect()
    }

    /// Unused tokens split by parity: `(agent_pool, opponent_pool)`.
    #[must_use]
    pub fn allowed_values(&self) -> (TokenPool, TokenPool) {
        (self.pool(Side::Agent), self.pool(Side::Opponent))
    }

    /// Lazy action iterators: `(agent_actions, opponent_actions)`.
    ///
    /// Each is `allowed_positions × pool`, position-major. Recomputed on every
    /// call.
    #[must_use]
    pub fn action_space(&self) -> (ActionIter, ActionIter) {
        (self.actions(Side::Agent), self.actions(Side::Opponent))
    }

    /// Lazy action iterator for one side.
    #[must_use]
    pub fn actions(&self, side: Side) -> ActionIter {
        ActionIter::new(self.allowed_positions(), self.pool(side))
    }

    /// Every legal action for one side, in `action_space` order.
    #[must_use]
    pub fn legal_actions(&self, side: Side) -> Vec<Action> {
        self.actions(side).collect()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    // === Transitions ===

    /// Return a copy with `action.value` placed at `action.position`.
    ///
    /// Does not validate. The caller guarantees the position is empty and the
    /// token unused; debug builds assert the position is empty.
    ///
    /// # Panics
    ///
    /// Panics if `action.position` is out of bounds.
    #[must_use]
    pub fn apply_action(&self, action: Action) -> Board {
        debug_assert!(
            self.cells[action.position].is_empty(),
            "position {} is already occupied",
            action.position
        );

        let mut next = *self;
        next.cells[action.position] = Cell::Filled(action.value);
        next
    }

    /// Check that `side` may play `action` on this board.
    pub fn validate_action(&self, side: Side, action: Action) -> Result<(), IllegalAction> {
        let cell = self
            .cell(action.position)
            .ok_or(IllegalAction::OutOfBounds(action.position))?;

        if let Cell::Filled(token) = cell {
            return Err(IllegalAction::Occupied {
                position: action.position,
                token,
            });
        }
        if !side.owns(action.value) {
            return Err(IllegalAction::WrongSide {
                token: action.value,
                side,
            });
        }
        if self.is_used(action.value) {
            return Err(IllegalAction::TokenUsed(action.value));
        }

        Ok(())
    }

    /// Validated `apply_action`.
    pub fn try_apply(&self, side: Side, action: Action) -> Result<Board, IllegalAction> {
        self.validate_action(side, action)?;
        Ok(self.apply_action(action))
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, position: usize) -> &Self::Output {
        &self.cells[position]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE_LEN).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
