//! Solver workspace — duals, matching and per-row search state.
//!
//! Purpose
//! -------
//! Own every mutable buffer a single solve call needs, grouped by lifetime:
//! dual prices and the matching persist across rows, while the shortest-path
//! state is reset at the start of each row's search.
//!
//! Key behaviors
//! -------------
//! - [`Duals`] holds the row prices `u` and column prices `v`.
//! - [`Matching`] holds `col4row` / `row4col`, with `None` meaning unmatched.
//! - [`PathState`] holds `shortest_path_costs`, predecessor rows `path`, the
//!   visited flags `sr` / `sc`, and the unvisited-column worklist `remaining`.
//! - [`LSAWorkspace`] bundles the three for one `nr × nc` problem.
//!
//! Invariants & assumptions
//! ------------------------
//! - `nr <= nc` (the working matrix is never taller than wide).
//! - After every completed row, `col4row[i] == Some(j)` iff
//!   `row4col[j] == Some(i)`; see [`Matching::is_consistent`].
//! - Duals are never reset during a call.
//! - A workspace is owned by exactly one call; nothing here is shared, so
//!   independent solves may run on separate threads without locking.
//!
//! Conventions
//! -----------
//! - Index arrays are plain `Vec`s sized by `nr` / `nc`; all access is
//!   bounds-checked.
//! - `path[j]` is meaningful only for columns relaxed during the current
//!   search; stale entries are overwritten before they are read.
use ndarray::Array1;

use crate::assignment::core::element::WorkFloat;

/// Dual prices `u[nr]`, `v[nc]`.
///
/// Together with the matching they satisfy `u[i] + v[j] <= cost[i][j]`
/// everywhere and equality on matched pairs, up to floating-point error.
#[derive(Debug, Clone)]
pub struct Duals<T> {
    pub u: Array1<T>,
    pub v: Array1<T>,
}

impl<T: WorkFloat> Duals<T> {
    pub fn new(nr: usize, nc: usize) -> Self {
        Duals { u: Array1::from_elem(nr, T::zero()), v: Array1::from_elem(nc, T::zero()) }
    }
}

/// Row ↔ column matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    pub col4row: Vec<Option<usize>>,
    pub row4col: Vec<Option<usize>>,
}

impl Matching {
    pub fn new(nr: usize, nc: usize) -> Self {
        Matching { col4row: vec![None; nr], row4col: vec![None; nc] }
    }

    /// Check `col4row[i] == Some(j) ⇔ row4col[j] == Some(i)`.
    pub fn is_consistent(&self) -> bool {
        let forward = self
            .col4row
            .iter()
            .enumerate()
            .all(|(i, c)| c.is_none_or(|j| self.row4col.get(j) == Some(&Some(i))));
        let backward = self
            .row4col
            .iter()
            .enumerate()
            .all(|(j, r)| r.is_none_or(|i| self.col4row.get(i) == Some(&Some(j))));
        forward && backward
    }

    /// Number of matched rows.
    pub fn len(&self) -> usize {
        self.col4row.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scratch state of one augmenting-path search.
#[derive(Debug, Clone)]
pub struct PathState<T> {
    pub shortest_path_costs: Array1<T>,
    pub path: Vec<usize>,
    pub sr: Vec<bool>,
    pub sc: Vec<bool>,
    pub remaining: Vec<usize>,
}

impl<T: WorkFloat> PathState<T> {
    pub fn new(nr: usize, nc: usize) -> Self {
        PathState {
            shortest_path_costs: Array1::from_elem(nc, T::infinity()),
            path: vec![usize::MAX; nc],
            sr: vec![false; nr],
            sc: vec![false; nc],
            remaining: (0..nc).rev().collect(),
        }
    }

    /// Prepare for a fresh search: clear visited flags, set every tentative
    /// distance to `+∞`, and refill the worklist in descending column order.
    pub fn reset(&mut self) {
        self.sr.fill(false);
        self.sc.fill(false);
        self.shortest_path_costs.fill(T::infinity());
        let nc = self.remaining.len();
        for (it, slot) in self.remaining.iter_mut().enumerate() {
            *slot = nc - it - 1;
        }
    }
}

/// All mutable state of one solve over an `nr × nc` working matrix.
#[derive(Debug, Clone)]
pub struct LSAWorkspace<T> {
    pub duals: Duals<T>,
    pub matching: Matching,
    pub search: PathState<T>,
}

impl<T: WorkFloat> LSAWorkspace<T> {
    pub fn new(nr: usize, nc: usize) -> Self {
        LSAWorkspace {
            duals: Duals::new(nr, nc),
            matching: Matching::new(nr, nc),
            search: PathState::new(nr, nc),
        }
    }

    pub fn nrows(&self) -> usize {
        self.matching.col4row.len()
    }

    pub fn ncols(&self) -> usize {
        self.matching.row4col.len()
    }
}
