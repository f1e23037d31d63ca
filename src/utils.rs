//! Helpers shared by the Python bindings in `lib.rs`.
//!
//! [`solve_view`] is plain Rust and is what the binding layer calls once a
//! cost matrix has been borrowed from Python. The extraction helpers are
//! only compiled with the `python-bindings` feature.
use ndarray::ArrayView2;

use crate::assignment::{
    core::{element::CostElement, options::LSAOptions, shape::DimensionLimit},
    errors::LSAResult,
    solver::Assignment,
};

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array2 → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray2,
};

/// Solve `cost` with a raw, possibly negative, dimension limit.
///
/// `None` selects every column; any other value goes through
/// [`DimensionLimit::from_raw`], so `0`, negatives and values above the
/// column count are rejected as invalid parameters. Returns the assignment
/// and its total cost in the caller's units.
pub fn solve_view<E: CostElement>(
    cost: ArrayView2<'_, E>, dimension_limit: Option<i64>, maximize: bool,
) -> LSAResult<(Assignment, f64)> {
    let limit = match dimension_limit {
        Some(raw) => DimensionLimit::from_raw(raw, cost.ncols())?,
        None => DimensionLimit::All,
    };
    let assignment = Assignment::solve(cost, &LSAOptions { dimension_limit: limit, maximize })?;
    let total = assignment.total_cost(cost);
    Ok((assignment, total))
}

/// A 2-D cost matrix borrowed from Python, tagged by NumPy dtype.
#[cfg(feature = "python-bindings")]
pub enum CostMatrix<'py> {
    F64(PyReadonlyArray2<'py, f64>),
    F32(PyReadonlyArray2<'py, f32>),
    I64(PyReadonlyArray2<'py, i64>),
    I32(PyReadonlyArray2<'py, i32>),
    Bool(PyReadonlyArray2<'py, bool>),
}

#[cfg(feature = "python-bindings")]
impl CostMatrix<'_> {
    /// Dispatch to [`solve_view`] in the matrix's own element type.
    pub fn solve(&self, dimension_limit: Option<i64>, maximize: bool) -> LSAResult<(Assignment, f64)> {
        match self {
            CostMatrix::F64(arr) => solve_view(arr.as_array(), dimension_limit, maximize),
            CostMatrix::F32(arr) => solve_view(arr.as_array(), dimension_limit, maximize),
            CostMatrix::I64(arr) => solve_view(arr.as_array(), dimension_limit, maximize),
            CostMatrix::I32(arr) => solve_view(arr.as_array(), dimension_limit, maximize),
            CostMatrix::Bool(arr) => solve_view(arr.as_array(), dimension_limit, maximize),
        }
    }
}

/// Borrow a 2-D NumPy array, or copy a nested sequence of floats.
///
/// NumPy arrays of `float64`, `float32`, `int64`, `int32` and `bool` are
/// borrowed read-only without copying. Anything else must extract as a
/// rectangular `Sequence[Sequence[float]]`, which is copied into a new
/// `float64` array.
#[cfg(feature = "python-bindings")]
pub fn extract_cost_matrix<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>,
) -> PyResult<CostMatrix<'py>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray2<f64>>() {
        return Ok(CostMatrix::F64(arr));
    }
    if let Ok(arr) = raw.extract::<PyReadonlyArray2<f32>>() {
        return Ok(CostMatrix::F32(arr));
    }
    if let Ok(arr) = raw.extract::<PyReadonlyArray2<i64>>() {
        return Ok(CostMatrix::I64(arr));
    }
    if let Ok(arr) = raw.extract::<PyReadonlyArray2<i32>>() {
        return Ok(CostMatrix::I32(arr));
    }
    if let Ok(arr) = raw.extract::<PyReadonlyArray2<bool>>() {
        return Ok(CostMatrix::Bool(arr));
    }

    let rows: Vec<Vec<f64>> = raw.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray (float64, float32, int64, int32, bool) or a nested sequence of float64",
        )
    })?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(PyValueError::new_err("cost_matrix rows must all have the same length"));
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let arr = Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| PyValueError::new_err(format!("invalid cost_matrix shape: {e}")))?;
    Ok(CostMatrix::F64(arr.into_pyarray(py).readonly()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::errors::{LSAError, LSAErrorKind};
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn solve_view_reports_total_in_caller_units() {
        let cost = array![[1_i32, 1000], [1000, 1]];

        let (assignment, total) = solve_view(cost.view(), None, true).unwrap();

        assert_eq!(assignment.col_ind(), &[1, 0]);
        assert_relative_eq!(total, 2000.0);
    }

    #[test]
    fn solve_view_accepts_the_all_columns_sentinel() {
        let cost = array![[3.0, 1.0, 2.0]];

        let (assignment, total) = solve_view(cost.view(), Some(i64::MAX), false).unwrap();

        assert_eq!(assignment.col_ind(), &[1]);
        assert_relative_eq!(total, 1.0);
    }

    #[test]
    fn solve_view_rejects_non_positive_and_oversized_limits() {
        let cost = array![[3.0, 1.0, 2.0]];

        for raw in [-1, 0, 4] {
            let err = solve_view(cost.view(), Some(raw), false).unwrap_err();
            assert_eq!(err.kind(), LSAErrorKind::ParamInvalid, "limit {raw}");
            assert!(matches!(err, LSAError::InvalidDimensionLimit { limit, .. } if limit == raw));
        }
    }
}
