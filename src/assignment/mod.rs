//! assignment — rectangular linear sum assignment: core numerics, solver, errors.
//!
//! Purpose
//! -------
//! Provide a single namespace for solving the rectangular linear sum
//! assignment problem: given an `nr × nc` cost matrix, choose `min(nr, nc)`
//! cells, at most one per row and per column, with minimum (or maximum)
//! total cost. This is the surface most consumers (including the Python
//! bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the numeric building blocks in [`core`]: element traits,
//!   shapes and dimension limits, options, the working cost buffer, the
//!   per-call workspace, and the augmenting-path search with its dual
//!   update and augmentation steps.
//! - Expose the user-facing entry points in [`solver`]: [`Assignment`],
//!   [`linear_sum_assignment`], [`solve_working`] and [`solve_into`].
//! - Centralize error types in [`errors`] ([`LSAError`], [`LSAErrorKind`],
//!   [`LSAResult`]) and up-front input checks in [`validation`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Matrices are validated before any solver state exists: NaN is always
//!   rejected, and so is the infinity pointing in the optimization direction
//!   (`-∞` when minimizing, `+∞` when maximizing).
//! - `+∞` (when minimizing) marks a forbidden pair; a solve that cannot avoid
//!   one fails with [`LSAError::Infeasible`].
//! - Only the first `dimension_limit` columns are eligible; the rest are
//!   still validated but never assigned.
//! - Every solve call owns its buffers. Calls are independent and may run
//!   concurrently on different threads.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. Output arrays use `i64` with `-1` marking unused
//!   trailing slots.
//! - Floating inputs are solved in their own precision. Booleans and integers
//!   up to 16 bits are solved in `f32`; 32- and 64-bit integers in `f64`.
//! - The solver logs through the `log` facade and never installs a logger.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Build an `ndarray` view of the cost matrix.
//!   2. Pick [`LSAOptions`] (dimension limit, maximize).
//!   3. Call [`Assignment::solve`] and read `row_ind` / `col_ind`, or
//!      `total_cost` for the objective in the caller's units.
//! - Kernel-style callers holding flat buffers use [`solve_into`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover each algorithm step in isolation.
//! - Unit tests in [`solver`] cover the documented end-to-end cases.
//! - Integration and property tests under `tests/` compare against brute
//!   force on small matrices.

pub mod core;
pub mod errors;
pub mod solver;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{CostElement, DimensionLimit, LSAOptions, WorkFloat};

pub use self::errors::{LSAError, LSAErrorKind, LSAResult};

pub use self::solver::{
    Assignment, WorkingSolution, linear_sum_assignment, solve_into, solve_working,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_lsap::assignment::prelude::*;
//
// to import the main assignment surface in a single line.

pub mod prelude {
    pub use super::{
        Assignment, CostElement, DimensionLimit, LSAError, LSAErrorKind, LSAOptions, LSAResult,
        linear_sum_assignment, solve_into,
    };
}
