//! rust_lsap — rectangular linear sum assignment with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the assignment solver to Python via the `_rust_lsap` extension module. When
//! the `python-bindings` feature is enabled, this module defines the
//! Python-facing class and the `assignment` submodule used by the `rust_lsap`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the [`assignment`] module as the public crate surface, with
//!   the everyday entry points ([`Assignment`], [`linear_sum_assignment`],
//!   [`solve_into`]) available at the crate root.
//! - Define the `#[pyclass]` wrapper [`LinearSumAssignment`] and the
//!   `#[pymodule]` initializer for the `_rust_lsap` Python extension.
//! - Register the `assignment` submodule under `rust_lsap` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in [`assignment`]; this file performs only FFI
//!   glue, input conversion, and error mapping.
//! - The Python class mirrors the semantics of [`Assignment::solve`]: the
//!   same validation, the same dimension-limit rules, the same outputs.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_lsap.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rust_lsap` package.
//! - Errors from core Rust code are propagated as [`LSAError`] internally and
//!   converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`assignment`] directly and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_lsap` and wraps its classes in
//!   user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   integration and property tests under `tests/`.
//! - The PyO3 layer is exercised from Python; its Rust-side helper
//!   [`utils::solve_view`] is unit tested without the Python runtime.

pub mod assignment;
pub mod utils;

pub use crate::assignment::{
    Assignment, DimensionLimit, LSAError, LSAErrorKind, LSAOptions, LSAResult,
    linear_sum_assignment, solve_into,
};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::utils::extract_cost_matrix;

/// LinearSumAssignment — Python-facing wrapper around [`Assignment::solve`].
///
/// Purpose
/// -------
/// Solve a linear sum assignment problem when called from Python and keep
/// the result for property access.
///
/// Key behaviors
/// -------------
/// - Borrow NumPy arrays of `float64`, `float32`, `int64`, `int32` or `bool`
///   without copying; copy nested float sequences into a `float64` array.
/// - Run the solver in the input's precision and store the outcome.
/// - Expose `row_ind`, `col_ind`, `total_cost` and `transposed` as Python
///   properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `LinearSumAssignment(cost_matrix, dimension_limit=None, maximize=False)`:
/// - `cost_matrix`: `&PyAny`
///   Two-dimensional array-like cost matrix.
/// - `dimension_limit`: `Option<i64>`
///   Number of leading columns eligible for matching; `None` means all.
///   Must satisfy `1 <= dimension_limit <= ncols`.
/// - `maximize`: `bool`
///   Maximize instead of minimize the total.
///
/// Fields
/// ------
/// - `inner`: [`Assignment`]
///   Rust-side result used by the accessors.
/// - `total`: `f64`
///   Sum of the selected entries in the input's units.
///
/// Errors
/// ------
/// - `ValueError`
///   Invalid `dimension_limit`, NaN or wrong-signed infinite entries, an
///   infeasible matrix, or a ragged nested sequence.
/// - `TypeError`
///   Input that is neither a supported 2-D array nor a nested sequence.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_lsap.assignment")]
pub struct LinearSumAssignment {
    inner: Assignment,
    total: f64,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LinearSumAssignment {
    #[new]
    #[pyo3(
        text_signature = "(cost_matrix, /, dimension_limit=None, maximize=False)",
        signature = (cost_matrix, dimension_limit = None, maximize = false)
    )]
    pub fn new<'py>(
        py: Python<'py>, cost_matrix: &Bound<'py, PyAny>, dimension_limit: Option<i64>,
        maximize: bool,
    ) -> PyResult<LinearSumAssignment> {
        let matrix = extract_cost_matrix(py, cost_matrix)?;
        let (inner, total) = matrix.solve(dimension_limit, maximize)?;
        Ok(LinearSumAssignment { inner, total })
    }

    /// Row indices, ascending; `-1` marks unused trailing slots.
    #[getter]
    pub fn row_ind(&self) -> Vec<i64> {
        self.inner.row_ind().to_vec()
    }

    /// Column indices paired with `row_ind`.
    #[getter]
    pub fn col_ind(&self) -> Vec<i64> {
        self.inner.col_ind().to_vec()
    }

    /// Total cost of the assignment in the input's units.
    #[getter]
    pub fn total_cost(&self) -> f64 {
        self.total
    }

    /// Whether the solver ran on the transposed matrix.
    #[getter]
    pub fn transposed(&self) -> bool {
        self.inner.was_transposed()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "LinearSumAssignment(row_ind={:?}, col_ind={:?}, total_cost={})",
            self.inner.row_ind(),
            self.inner.col_ind(),
            self.total
        )
    }
}

/// _rust_lsap — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_lsap` Python module and register the `assignment`
/// submodule used by the public `rust_lsap` package.
///
/// Key behaviors
/// -------------
/// - Create the `assignment` submodule and attach it to `_rust_lsap`.
/// - Register it in `sys.modules` so it is importable via a dotted path.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_lsap<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let assignment_mod = PyModule::new(_py, "assignment")?;
    assignment(_py, m, &assignment_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_lsap.assignment", assignment_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn assignment<'py>(
    _py: Python, rust_lsap: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<LinearSumAssignment>()?;
    rust_lsap.add_submodule(m)?;
    Ok(())
}
