//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Action;

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Create an action placing `value` at `position`.
    #[new]
    fn new(position: usize, value: u8) -> PyResult<Self> {
        Action::try_new(position, value)
            .map(Self)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    /// Board index (0-8, row-major).
    #[getter]
    fn position(&self) -> usize {
        self.0.position
    }

    /// Token value (1-9).
    #[getter]
    fn value(&self) -> u8 {
        self.0.value.get()
    }

    /// Unpack as a `(position, value)` tuple.
    fn to_tuple(&self) -> (usize, u8) {
        (self.0.position, self.0.value.get())
    }

    fn __repr__(&self) -> String {
        format!("Action(position={}, value={})", self.0.position, self.0.value)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        (self.0.position as u64) * 16 + u64::from(self.0.value.get())
    }
}
