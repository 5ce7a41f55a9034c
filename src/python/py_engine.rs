//! Engine bindings for Python.
//!
//! The Rust engine is stateless; this wrapper keeps one board and one RNG so
//! a Python training loop can call `reset()` and `step()` like a gym
//! environment.

use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Action, Board, EngineConfig, GameRng, Side};
use crate::error::RulesError;
use crate::rules::NumericTicTacToe;

use super::py_core::PyAction;

fn to_py_err(error: RulesError) -> PyErr {
    match error {
        RulesError::IllegalAction(e) => PyErr::new::<PyValueError, _>(e.to_string()),
        e @ RulesError::NoLegalOpponentMove { .. } => PyErr::new::<PyRuntimeError, _>(e.to_string()),
    }
}

fn to_py_actions(actions: Vec<Action>) -> Vec<PyAction> {
    actions.into_iter().map(PyAction).collect()
}

/// Python wrapper for NumericTicTacToe.
#[pyclass(name = "NumericTicTacToe")]
pub struct PyNumericTicTacToe {
    engine: NumericTicTacToe,
    rng: GameRng,
    board: Board,
}

#[pymethods]
impl PyNumericTicTacToe {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - winning_sum: Line sum that wins (6-24)
    /// - seed: RNG seed for the opponent's moves
    #[new]
    #[pyo3(signature = (winning_sum = 15, seed = 42))]
    fn new(winning_sum: u32, seed: u64) -> PyResult<Self> {
        let engine = NumericTicTacToe::new(EngineConfig::new(winning_sum))
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(Self {
            engine,
            rng: GameRng::new(seed),
            board: Board::EMPTY,
        })
    }

    /// Start a new game and return the empty board.
    fn reset(&mut self) -> Vec<Option<u8>> {
        self.board = self.engine.reset();
        self.board.values().to_vec()
    }

    /// Play one round: the agent's move, then the opponent's reply.
    ///
    /// Returns `(board, reward, terminal)`.
    fn step(&mut self, position: usize, value: u8) -> PyResult<(Vec<Option<u8>>, i32, bool)> {
        let action = Action::try_new(position, value)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        let result = self
            .engine
            .step(&self.board, action, &mut self.rng)
            .map_err(to_py_err)?;

        self.board = result.board;
        Ok((self.board.values().to_vec(), result.reward, result.terminal))
    }

    /// Current board, `None` for empty cells.
    #[getter]
    fn board(&self) -> Vec<Option<u8>> {
        self.board.values().to_vec()
    }

    /// Current board as a float array with NaN for empty cells.
    fn board_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        let values = self
            .board
            .values()
            .into_iter()
            .map(|v| v.map_or(f64::NAN, f64::from))
            .collect();
        PyArray1::from_vec_bound(py, values)
    }

    /// Open positions, ascending.
    fn allowed_positions(&self) -> Vec<usize> {
        self.board.allowed_positions().to_vec()
    }

    /// Unused tokens as `(agent_values, opponent_values)`.
    fn allowed_values(&self) -> (Vec<u8>, Vec<u8>) {
        let (agent, opponent) = self.board.allowed_values();
        (
            agent.iter().map(|t| t.get()).collect(),
            opponent.iter().map(|t| t.get()).collect(),
        )
    }

    /// Legal agent actions, position-major.
    fn agent_actions(&self) -> Vec<PyAction> {
        to_py_actions(self.board.legal_actions(Side::Agent))
    }

    /// Legal opponent actions, position-major.
    fn opponent_actions(&self) -> Vec<PyAction> {
        to_py_actions(self.board.legal_actions(Side::Opponent))
    }

    /// Check if any line hits the winning sum.
    fn is_winning(&self) -> bool {
        self.engine.is_winning(&self.board)
    }

    /// Returns `(terminal, outcome)` with outcome one of "Win", "Tie", "Resume".
    fn is_terminal(&self) -> (bool, String) {
        let c = self.engine.classify(&self.board);
        (c.terminal, c.outcome.to_string())
    }

    /// The configured winning sum.
    #[getter]
    fn winning_sum(&self) -> u32 {
        self.engine.winning_sum()
    }

    fn __repr__(&self) -> String {
        format!(
            "NumericTicTacToe(winning_sum={}, filled={})",
            self.engine.winning_sum(),
            self.board.filled_count()
        )
    }
}
