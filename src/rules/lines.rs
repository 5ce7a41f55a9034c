//! Line sums and win detection.

use smallvec::SmallVec;

use crate::core::Board;

/// The 8 fixed lines: 3 rows, 3 columns, main diagonal, anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// One sum per entry of `LINES`. `None` for a line with an empty cell.
pub type LineSums = [Option<u32>; 8];

/// Sum of a single line, or `None` if any of its cells is empty.
#[must_use]
pub fn line_sum(board: &Board, line: &[usize; 3]) -> Option<u32> {
    line.iter()
        .try_fold(0, |acc, &i| board[i].value().map(|v| acc + u32::from(v)))
}

/// Sums of all 8 lines, in `LINES` order.
#[must_use]
pub fn line_sums(board: &Board) -> LineSums {
    LINES.map(|line| line_sum(board, &line))
}

/// Check if any fully filled line sums to `target`.
#[must_use]
pub fn is_winning(board: &Board, target: u32) -> bool {
    line_sums(board).contains(&Some(target))
}

/// Indices into `LINES` of every line summing to `target`.
#[must_use]
pub fn winning_lines(board: &Board, target: u32) -> SmallVec<[usize; 8]> {
    line_sums(board)
        .iter()
        .enumerate()
        .filter(|(_, sum)| **sum == Some(target))
        .map(|(i, _)| i)
        .collect()
}
