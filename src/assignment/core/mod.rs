//! assignment::core — numeric building blocks of the assignment solver.
//!
//! Purpose
//! -------
//! Hold the pieces the orchestrator in `assignment::solver` strings together:
//! element/working-type traits, shape and options, the working cost buffer,
//! the per-call workspace, the augmenting-path search, the dual update and
//! augmentation, and post-processing into index arrays.
//!
//! Key behaviors
//! -------------
//! - [`element`]: [`WorkFloat`] / [`CostElement`] and the `+∞`-aware tie
//!   comparator.
//! - [`shape`] and [`options`]: [`CostShape`], [`DimensionLimit`],
//!   [`LSAOptions`].
//! - [`preprocess`]: [`WorkingCost`] (truncate, transpose, negate).
//! - [`workspace`]: [`LSAWorkspace`] with [`Duals`], [`Matching`] and
//!   [`PathState`].
//! - [`augment`]: [`find_augmenting_path`].
//! - [`extend`]: [`update_duals`] and [`augment_previous_solution`].
//! - [`postprocess`]: [`write_indices`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything here operates on a working matrix with `nr <= nc`; the
//!   orientation is fixed by [`WorkingCost::prepare`].
//! - Input validation happens in `assignment::validation` before any of
//!   these helpers run; they do not re-check values.
//!
//! Conventions
//! -----------
//! - 0-based indices; `None` for "unmatched" internally, `-1` only in the
//!   caller-facing output arrays.
//! - No I/O and no logging at this level; the orchestrator logs.

pub mod augment;
pub mod element;
pub mod extend;
pub mod options;
pub mod postprocess;
pub mod preprocess;
pub mod shape;
pub mod workspace;

pub use self::augment::{AugmentingPath, find_augmenting_path};
pub use self::element::{CostElement, WorkFloat, equal_with_positive_inf};
pub use self::extend::{augment_previous_solution, update_duals};
pub use self::options::LSAOptions;
pub use self::postprocess::write_indices;
pub use self::preprocess::WorkingCost;
pub use self::shape::{CostShape, DimensionLimit};
pub use self::workspace::{Duals, LSAWorkspace, Matching, PathState};
