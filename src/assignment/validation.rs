//! assignment::validation — input guards run before any solver work.
//!
//! Purpose
//! -------
//! Centralize the checks a cost matrix and its companion buffers must pass
//! before preprocessing starts, so that every failure is reported before a
//! working buffer is allocated or an output slot is written.
//!
//! Key behaviors
//! -------------
//! - [`validate_cost_values`] scans the caller's matrix once and rejects NaN
//!   and `-∞` entries. `+∞` is allowed: it marks a forbidden pairing. When
//!   maximizing, the roles of the two infinities swap, since the working
//!   buffer is negated.
//! - [`validate_flat_shape`] checks that a flat row-major buffer holds exactly
//!   `nr * raw_nc` elements.
//! - [`validate_output_len`] checks caller-provided output slices against
//!   `min(nr, raw_nc)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The value scan covers the whole matrix, including columns beyond the
//!   dimension limit.
//! - These helpers never allocate and never panic.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each rejection branch and the `+∞` acceptance.

use ndarray::ArrayView2;

use crate::assignment::{
    core::element::CostElement,
    errors::{LSAError, LSAResult},
};

/// Reject cost matrices containing NaN or negative infinity.
///
/// Parameters
/// ----------
/// - `cost`: `ArrayView2<E>`
///   The caller's `nr × raw_nc` matrix.
/// - `maximize`: `bool`
///   Direction of the solve. Under maximization `+∞` is rejected and `-∞`
///   marks a forbidden pairing.
///
/// Returns
/// -------
/// `LSAResult<()>`
///   - `Ok(())` if every entry is a number whose working value is not `-∞`.
///   - `Err(LSAError::InvalidCostValue)` for the first offending entry in
///     row-major order.
///
/// Notes
/// -----
/// - `+∞` entries (when minimizing) pass and are handled by the search as
///   unreachable pairs; a problem whose rows can only reach `+∞`
///   columns fails later as infeasible.
pub fn validate_cost_values<E: CostElement>(
    cost: ArrayView2<'_, E>, maximize: bool,
) -> LSAResult<()> {
    for ((row, col), &value) in cost.indexed_iter() {
        if value.is_invalid_cost(maximize) {
            return Err(LSAError::InvalidCostValue { row, col, value: value.as_f64() });
        }
    }
    Ok(())
}

/// Check that a flat buffer matches an `nr × raw_nc` shape.
pub fn validate_flat_shape(len: usize, nr: usize, raw_nc: usize) -> LSAResult<()> {
    let expected = nr.checked_mul(raw_nc).unwrap_or(usize::MAX);
    if len != expected {
        return Err(LSAError::ShapeMismatch { expected, actual: len });
    }
    Ok(())
}

/// Check that an output slice has length `expected`.
pub fn validate_output_len(len: usize, expected: usize) -> LSAResult<()> {
    if len != expected {
        return Err(LSAError::OutputLengthMismatch { expected, actual: len });
    }
    Ok(())
}
