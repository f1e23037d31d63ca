//! assignment::errors — error taxonomy for the linear sum assignment solver.
//!
//! Purpose
//! -------
//! Provide the single error enum and result alias used by every stage of a
//! solve call (validation, preprocessing, augmenting-path search), together
//! with a conversion into Python exceptions for the PyO3 layer.
//!
//! Key behaviors
//! -------------
//! - Define [`LSAError`] and [`LSAResult`] as the canonical error and result
//!   types of the `assignment` subtree.
//! - Group variants into three coarse kinds via [`LSAErrorKind`]:
//!   parameter errors, invalid numeric content, and infeasible problems.
//! - Map every variant to `PyValueError` at the Python boundary, keeping the
//!   `Display` message verbatim.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every error is raised before any caller-visible output is written; a
//!   failed solve never exposes a partial matching.
//! - Row/column payloads in [`LSAError::InvalidCostValue`] refer to the
//!   caller's (untransposed) matrix. The row in [`LSAError::Infeasible`]
//!   refers to the working orientation used by the solver.
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` messages embed their payloads and that
//!   [`LSAError::kind`] classifies each variant as documented.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for assignment operations that may produce [`LSAError`].
pub type LSAResult<T> = Result<T, LSAError>;

/// Coarse classification of [`LSAError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LSAErrorKind {
    /// A call parameter (limit, shape, output length) is out of range.
    ParamInvalid,
    /// The cost matrix holds NaN or negative infinity.
    NumericInvalid,
    /// No complete matching with finite cost exists.
    Infeasible,
}

/// LSAError — failure conditions of a linear sum assignment solve.
///
/// Variants
/// --------
/// - `InvalidDimensionLimit { limit, ncols, reason }`
///   The requested number of eligible leading columns is not in
///   `[1, ncols]`.
/// - `ShapeMismatch { expected, actual }`
///   A flat cost buffer does not hold `nr * ncols` elements.
/// - `OutputLengthMismatch { expected, actual }`
///   A caller-provided output slice does not have length `min(nr, ncols)`.
/// - `InvalidCostValue { row, col, value }`
///   A cost entry is NaN or `-∞` (`+∞` when maximizing). The opposite
///   infinity is accepted and means "forbidden".
/// - `Infeasible { row }`
///   The shortest augmenting path search for working row `row` found every
///   remaining column at infinite reduced cost.
#[derive(Debug, Clone, PartialEq)]
pub enum LSAError {
    // ---- Parameters ----
    InvalidDimensionLimit { limit: i64, ncols: usize, reason: &'static str },
    ShapeMismatch { expected: usize, actual: usize },
    OutputLengthMismatch { expected: usize, actual: usize },

    // ---- Numeric content ----
    InvalidCostValue { row: usize, col: usize, value: f64 },

    // ---- Algorithm ----
    Infeasible { row: usize },
}

impl LSAError {
    /// Classify this error into one of the three failure kinds.
    pub fn kind(&self) -> LSAErrorKind {
        match self {
            LSAError::InvalidDimensionLimit { .. }
            | LSAError::ShapeMismatch { .. }
            | LSAError::OutputLengthMismatch { .. } => LSAErrorKind::ParamInvalid,
            LSAError::InvalidCostValue { .. } => LSAErrorKind::NumericInvalid,
            LSAError::Infeasible { .. } => LSAErrorKind::Infeasible,
        }
    }
}

impl std::error::Error for LSAError {}

impl std::fmt::Display for LSAError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LSAError::InvalidDimensionLimit { limit, ncols, reason } => {
                write!(
                    f,
                    "Invalid dimension_limit {limit} for a cost matrix with {ncols} columns. {reason}"
                )
            }
            LSAError::ShapeMismatch { expected, actual } => {
                write!(f, "Cost buffer holds {actual} elements; expected {expected} (nr * nc).")
            }
            LSAError::OutputLengthMismatch { expected, actual } => {
                write!(f, "Output buffer has length {actual}; expected {expected} (min(nr, nc)).")
            }
            LSAError::InvalidCostValue { row, col, value } => {
                write!(f, "Cost entry at ({row}, {col}) is {value}; cost can't be NaN or -inf (+inf when maximizing).")
            }
            LSAError::Infeasible { row } => {
                write!(
                    f,
                    "Cost matrix is infeasible: no augmenting path with finite cost from row {row}."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LSAError> for PyErr {
    fn from(err: LSAError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting and payload embedding for each variant.
    // - The variant → `LSAErrorKind` classification.
    //
    // They intentionally DO NOT cover:
    // - The `From<LSAError> for PyErr` conversion, which needs the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidDimensionLimit` reports both the offending limit
    // and the column count.
    //
    // Given
    // -----
    // - limit = 7, ncols = 3.
    //
    // Expect
    // ------
    // - The message contains "7" and "3".
    fn invalid_dimension_limit_includes_limit_and_ncols() {
        // Arrange
        let err = LSAError::InvalidDimensionLimit {
            limit: 7,
            ncols: 3,
            reason: "dimension_limit must be <= the number of columns.",
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "message should include limit.\nGot: {msg}");
        assert!(msg.contains('3'), "message should include ncols.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure `InvalidCostValue` names the offending cell and value.
    //
    // Given
    // -----
    // - A NaN at (1, 2).
    //
    // Expect
    // ------
    // - The message contains "(1, 2)" and "NaN".
    fn invalid_cost_value_includes_position_and_value() {
        // Arrange
        let err = LSAError::InvalidCostValue { row: 1, col: 2, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("(1, 2)"), "message should include position.\nGot: {msg}");
        assert!(msg.contains("NaN"), "message should include value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Check the coarse classification of every variant.
    //
    // Given
    // -----
    // - One instance of each variant.
    //
    // Expect
    // ------
    // - Parameter, numeric and infeasibility variants map to their kinds.
    fn kind_classifies_each_variant() {
        // Arrange
        let cases = [
            (
                LSAError::InvalidDimensionLimit { limit: 0, ncols: 2, reason: "" },
                LSAErrorKind::ParamInvalid,
            ),
            (LSAError::ShapeMismatch { expected: 4, actual: 3 }, LSAErrorKind::ParamInvalid),
            (LSAError::OutputLengthMismatch { expected: 2, actual: 1 }, LSAErrorKind::ParamInvalid),
            (
                LSAError::InvalidCostValue { row: 0, col: 0, value: f64::NEG_INFINITY },
                LSAErrorKind::NumericInvalid,
            ),
            (LSAError::Infeasible { row: 1 }, LSAErrorKind::Infeasible),
        ];

        // Act / Assert
        for (err, expected) in cases {
            assert_eq!(err.kind(), expected, "wrong kind for {err:?}");
        }
    }
}
