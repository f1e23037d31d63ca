//! assignment::solver — orchestration of a full linear sum assignment solve.
//!
//! Purpose
//! -------
//! Drive one solve call end to end: resolve the shape, validate values,
//! build the working buffer, run one augmenting-path search per working
//! row, and translate the final matching into caller-facing index arrays.
//!
//! Key behaviors
//! -------------
//! - [`Assignment::solve`] is the main entry point for any [`CostElement`]
//!   matrix; [`linear_sum_assignment`] is a free-function shorthand.
//! - [`solve_working`] is the generic entry point over the working float
//!   type and also returns the final dual prices (an optimality
//!   certificate).
//! - [`solve_into`] is the kernel-boundary form: flat row-major input and
//!   caller-owned output slices.
//! - State machine per call: trivial return when `nr == 0` or `nc == 0`;
//!   otherwise for each working row, search → update duals → augment; any
//!   infeasible search aborts the whole call.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output arrays have length `min(nr, raw_nc)`, rows ascending, and `-1`
//!   in every slot beyond `min(nr, dimension_limit)`.
//! - No output is produced or written unless the entire solve succeeds.
//! - Each call owns its workspace; concurrent calls share nothing.
//!
//! Conventions
//! -----------
//! - Logging goes through the `log` facade: one `debug!` line when a solve
//!   starts and one when it finishes, a `warn!` on infeasibility. The crate
//!   never installs a logger.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover the documented concrete cases, transposition,
//!   dimension limits, infeasibility, dual feasibility of the returned
//!   certificate, and the no-partial-write guarantee of [`solve_into`].
//! - Brute-force optimality and the maximize/transpose properties are
//!   checked with `proptest` under `tests/`.

use log::{debug, warn};
use ndarray::ArrayView2;

use crate::assignment::{
    core::{
        augment::find_augmenting_path,
        element::{CostElement, WorkFloat},
        extend::{augment_previous_solution, update_duals},
        options::LSAOptions,
        postprocess::write_indices,
        preprocess::WorkingCost,
        shape::{CostShape, DimensionLimit},
        workspace::{Duals, LSAWorkspace},
    },
    errors::{LSAError, LSAResult},
    validation::{validate_cost_values, validate_flat_shape, validate_output_len},
};

/// Assignment — result of a linear sum assignment solve.
///
/// Purpose
/// -------
/// Carry the paired index arrays returned to callers, in the caller's
/// orientation, plus a little metadata about how the solve ran.
///
/// Fields
/// ------
/// - `row_ind`: `Vec<i64>`
///   Row indices, ascending, length `min(nr, raw_nc)`.
/// - `col_ind`: `Vec<i64>`
///   Column indices paired with `row_ind`, same length.
/// - `matched_len`: `usize`
///   Number of real pairs; slots at and beyond this index hold `-1`.
/// - `transposed`: `bool`
///   Whether the solver ran on the transposed matrix.
///
/// Invariants
/// ----------
/// - No row index and no column index appears twice among real pairs.
/// - Every column index is `< dimension_limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    row_ind: Vec<i64>,
    col_ind: Vec<i64>,
    matched_len: usize,
    transposed: bool,
}

/// Result of [`solve_working`]: the assignment plus the final duals.
///
/// `duals` are expressed in the working orientation: when
/// `assignment.was_transposed()` the `u` prices belong to the caller's
/// columns and `v` to the caller's rows, and when maximizing they price the
/// negated matrix. They are empty for degenerate (`nr == 0` or `nc == 0`)
/// problems.
#[derive(Debug, Clone)]
pub struct WorkingSolution<T> {
    pub assignment: Assignment,
    pub duals: Duals<T>,
}

impl Assignment {
    /// Solve the rectangular linear sum assignment problem.
    ///
    /// Parameters
    /// ----------
    /// - `cost`: `ArrayView2<E>`
    ///   Dense `nr × raw_nc` cost matrix. Any layout is accepted.
    /// - `opts`: `&LSAOptions`
    ///   Dimension limit and optimization direction.
    ///
    /// Returns
    /// -------
    /// `LSAResult<Assignment>`
    ///   - `Ok(Assignment)` with a minimum-cost (or maximum-cost) matching of
    ///     size `min(nr, dimension_limit)`.
    ///   - `Err(LSAError)` otherwise; nothing is returned on failure.
    ///
    /// Errors
    /// ------
    /// - `LSAError::InvalidDimensionLimit`
    ///   The limit is zero or exceeds `raw_nc`.
    /// - `LSAError::InvalidCostValue`
    ///   The matrix contains NaN, or `-∞` (`+∞` when maximizing).
    /// - `LSAError::Infeasible`
    ///   Some row can only be completed through `+∞` entries.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use ndarray::array;
    /// use rust_lsap::assignment::{Assignment, LSAOptions};
    ///
    /// let cost = array![[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]];
    /// let result = Assignment::solve(cost.view(), &LSAOptions::default()).unwrap();
    ///
    /// assert_eq!(result.row_ind(), &[0, 1, 2]);
    /// assert_eq!(result.col_ind(), &[1, 0, 2]);
    /// assert_eq!(result.total_cost(cost.view()), 5.0);
    /// ```
    pub fn solve<E: CostElement>(cost: ArrayView2<'_, E>, opts: &LSAOptions) -> LSAResult<Self> {
        solve_inner(cost, opts).map(|solution| solution.assignment)
    }

    /// Row indices, ascending; `-1` marks unused trailing slots.
    pub fn row_ind(&self) -> &[i64] {
        &self.row_ind
    }

    /// Column indices paired with [`row_ind`](Self::row_ind).
    pub fn col_ind(&self) -> &[i64] {
        &self.col_ind
    }

    /// Output length, `min(nr, raw_nc)`.
    pub fn len(&self) -> usize {
        self.row_ind.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ind.is_empty()
    }

    /// Number of real pairs, `min(nr, dimension_limit)`.
    pub fn matched_len(&self) -> usize {
        self.matched_len
    }

    pub fn was_transposed(&self) -> bool {
        self.transposed
    }

    /// Iterate over real `(row, col)` pairs, skipping `-1` padding.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_ind
            .iter()
            .zip(&self.col_ind)
            .filter(|&(&r, &c)| r >= 0 && c >= 0)
            .map(|(&r, &c)| (r as usize, c as usize))
    }

    /// Sum of the selected entries of `cost`, in the caller's units.
    ///
    /// When the solve maximized, this is the maximized total.
    ///
    /// # Panics
    /// Panics if `cost` is smaller than the matrix this assignment was
    /// solved on.
    pub fn total_cost<E: CostElement>(&self, cost: ArrayView2<'_, E>) -> f64 {
        self.pairs().map(|(r, c)| cost[[r, c]].as_f64()).sum()
    }

    /// Consume the assignment into `(row_ind, col_ind)`.
    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>) {
        (self.row_ind, self.col_ind)
    }
}

/// Solve with the dimension limit and direction given inline.
///
/// `dimension_limit = None` makes every column eligible.
pub fn linear_sum_assignment<E: CostElement>(
    cost: ArrayView2<'_, E>, dimension_limit: Option<usize>, maximize: bool,
) -> LSAResult<Assignment> {
    Assignment::solve(cost, &LSAOptions::new(dimension_limit, maximize))
}

/// Solve a matrix already in a working float type and return the duals.
pub fn solve_working<T>(cost: ArrayView2<'_, T>, opts: &LSAOptions) -> LSAResult<WorkingSolution<T>>
where
    T: WorkFloat + CostElement<Work = T>,
{
    solve_inner(cost, opts)
}

/// Solve a flat row-major `nr × raw_nc` buffer into caller-owned outputs.
///
/// `row_ind` and `col_ind` must both have length `min(nr, raw_nc)`. They are
/// written only after the whole solve has succeeded; on any error they are
/// left exactly as they were.
///
/// # Errors
/// - `LSAError::ShapeMismatch` if `cost.len() != nr * raw_nc`.
/// - `LSAError::OutputLengthMismatch` for wrongly sized outputs.
/// - Any error of [`Assignment::solve`].
pub fn solve_into<E: CostElement>(
    cost: &[E], nr: usize, raw_nc: usize, dimension_limit: DimensionLimit, maximize: bool,
    row_ind: &mut [i64], col_ind: &mut [i64],
) -> LSAResult<()> {
    validate_flat_shape(cost.len(), nr, raw_nc)?;
    let element_num = nr.min(raw_nc);
    validate_output_len(row_ind.len(), element_num)?;
    validate_output_len(col_ind.len(), element_num)?;

    let view = ArrayView2::from_shape((nr, raw_nc), cost).map_err(|_| {
        LSAError::ShapeMismatch { expected: nr.saturating_mul(raw_nc), actual: cost.len() }
    })?;
    let assignment = Assignment::solve(view, &LSAOptions { dimension_limit, maximize })?;

    row_ind.copy_from_slice(assignment.row_ind());
    col_ind.copy_from_slice(assignment.col_ind());
    Ok(())
}

/// Run every per-row search on a prepared working matrix.
///
/// Returns the final workspace (matching and duals) or the first
/// infeasibility encountered.
pub fn solve_working_cost<T: WorkFloat>(cost: &WorkingCost<T>) -> LSAResult<LSAWorkspace<T>> {
    let (nr, nc) = (cost.nrows(), cost.ncols());
    let mut ws = LSAWorkspace::new(nr, nc);

    for cur_row in 0..nr {
        let found =
            match find_augmenting_path(cost, &ws.duals, &ws.matching, &mut ws.search, cur_row) {
                Ok(found) => found,
                Err(err) => {
                    warn!("Linear sum assignment is infeasible: working row {cur_row} of {nr} has no finite augmenting path.");
                    return Err(err);
                }
            };

        update_duals(&mut ws.duals, &ws.search, &ws.matching, cur_row, found.min_val);
        augment_previous_solution(found.sink, cur_row, &ws.search, &mut ws.matching);
    }

    debug_assert!(ws.matching.is_consistent());
    Ok(ws)
}

fn solve_inner<E: CostElement>(
    cost: ArrayView2<'_, E>, opts: &LSAOptions,
) -> LSAResult<WorkingSolution<E::Work>> {
    let (nr, raw_nc) = cost.dim();
    let shape = CostShape::new(nr, raw_nc, opts.dimension_limit)?;
    validate_cost_values(cost, opts.maximize)?;

    let element_num = shape.element_num();
    let mut row_ind = vec![-1; element_num];
    let mut col_ind = vec![-1; element_num];

    if shape.is_degenerate() {
        debug!("Empty {nr}x{raw_nc} assignment problem; nothing to match.");
        return Ok(WorkingSolution {
            assignment: Assignment { row_ind, col_ind, matched_len: 0, transposed: false },
            duals: Duals::new(0, 0),
        });
    }

    debug!(
        "Solving {nr}x{raw_nc} linear sum assignment (eligible columns: {}, transposed: {}, maximize: {}).",
        shape.nc,
        shape.transposed(),
        opts.maximize
    );

    let working = WorkingCost::prepare(cost, &shape, opts.maximize);
    let ws = solve_working_cost(&working)?;
    write_indices(&ws.matching.col4row, working.transposed(), &mut row_ind, &mut col_ind);

    let matched_len = ws.matching.len();
    debug_assert_eq!(matched_len, shape.matched_len());
    debug!("Linear sum assignment matched {matched_len} of {element_num} output slots.");

    Ok(WorkingSolution {
        assignment: Assignment { row_ind, col_ind, matched_len, transposed: working.transposed() },
        duals: ws.duals,
    })
}
