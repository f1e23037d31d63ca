//! Working cost buffer — truncate, orient and sign the caller's matrix.
//!
//! Purpose
//! -------
//! Copy the eligible part of the caller's cost matrix into an owned,
//! row-major working buffer in the solver's float type, so that the search
//! always sweeps the longer dimension in its inner loop and always minimizes.
//!
//! Key behaviors
//! -------------
//! - Keep only the first `nc` (dimension-limited) columns.
//! - Transpose when `nc < nr`, swapping the roles of rows and columns for the
//!   rest of the solve; the decision is recorded in
//!   [`WorkingCost::transposed`] for post-processing.
//! - Negate every entry when maximizing, since minimizing `-cost` maximizes
//!   `cost`.
//!
//! Invariants & assumptions
//! ------------------------
//! - After construction `nrows() <= ncols()`.
//! - The buffer is single-owner and lives for one solve call.
//! - Values have already passed `validation::validate_cost_values` for the
//!   same direction, so the buffer holds no NaN and no `-∞`; `+∞` entries
//!   are forbidden pairs.
use ndarray::{Array2, ArrayView2, s};

use crate::assignment::core::{
    element::{CostElement, WorkFloat},
    shape::CostShape,
};

/// Owned `nr' × nc'` working matrix with `nr' <= nc'`.
#[derive(Debug, Clone)]
pub struct WorkingCost<T> {
    matrix: Array2<T>,
    transposed: bool,
}

impl<T: WorkFloat> WorkingCost<T> {
    /// Build the working buffer for one solve.
    ///
    /// Parameters
    /// ----------
    /// - `cost`: `ArrayView2<E>`
    ///   Caller's `nr × raw_nc` matrix.
    /// - `shape`: `&CostShape`
    ///   Validated shape carrying the effective column count `nc`.
    /// - `maximize`: `bool`
    ///   Negate entries when `true`.
    ///
    /// Returns
    /// -------
    /// A standard-layout (row-major) buffer of shape `(nr, nc)` or, when
    /// transposed, `(nc, nr)`.
    pub fn prepare<E>(cost: ArrayView2<'_, E>, shape: &CostShape, maximize: bool) -> Self
    where
        E: CostElement<Work = T>,
    {
        let leading = cost.slice(s![.., ..shape.nc]);
        let transposed = shape.transposed();
        let oriented = if transposed { leading.reversed_axes() } else { leading };

        let matrix = Array2::from_shape_fn(oriented.dim(), |(i, j)| {
            let value = oriented[[i, j]].to_work();
            if maximize { -value } else { value }
        });

        WorkingCost { matrix, transposed }
    }

    /// Rows of the working matrix (the shorter side).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    /// Columns of the working matrix (the longer side).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }

    /// Entry `(i, j)` of the working matrix.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        self.matrix[[i, j]]
    }

    /// Whether rows and columns were swapped relative to the caller.
    #[inline]
    pub fn transposed(&self) -> bool {
        self.transposed
    }

    /// Read-only view of the whole working matrix.
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.matrix.view()
    }
}
