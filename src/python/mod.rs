//! Python bindings for the numeric-ttt engine.
//!
//! Exposes the engine to Python training loops.
//!
//! # Quick Start
//!
//! ```python
//! import numeric_ttt as nt
//!
//! env = nt.NumericTicTacToe(winning_sum=15, seed=42)
//! board = env.reset()
//!
//! action = env.agent_actions()[0]
//! board, reward, terminal = env.step(action.position, action.value)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// numeric_ttt: Numerical Tic-Tac-Toe rules engine.
#[pymodule]
fn numeric_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PyNumericTicTacToe>()?;

    Ok(())
}
