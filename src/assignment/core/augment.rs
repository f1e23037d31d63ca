//! Shortest augmenting path search (one Dijkstra-like sweep per free row).
//!
//! Purpose
//! -------
//! Starting from an unmatched working row, grow a shortest-path tree over
//! reduced costs `cost[i][j] - u[i] - v[j]` until an unmatched column (the
//! sink) is reached. The resulting tree and tentative distances drive both
//! the dual update and the augmentation in `core::extend`.
//!
//! Key behaviors
//! -------------
//! - Relax every remaining column from the current frontier row, recording
//!   the predecessor row in `path`.
//! - Pick the remaining column with the smallest tentative distance. Ties
//!   (within machine epsilon, or both `+∞`) prefer a free column, which ends
//!   the search early and fixes which of several optimal matchings is found.
//! - Continue the sweep from the row currently holding the chosen column, or
//!   stop when the chosen column is free.
//!
//! Invariants & assumptions
//! ------------------------
//! - `u` and `v` are finite on entry; reduced costs are therefore `+∞`
//!   exactly where the working cost is `+∞`.
//! - When every remaining column sits at `+∞`, no finite augmenting path
//!   exists and the whole solve fails with [`LSAError::Infeasible`]. The
//!   search only writes scratch state, so nothing observable is committed.
//!
//! Performance
//! -----------
//! - O(nc) per frontier row, O(nr · nc) per search in the worst case.
//! - `remaining` is compacted by swap-removal, so no allocation happens
//!   inside the sweep.
use crate::assignment::{
    core::{
        element::{WorkFloat, equal_with_positive_inf},
        preprocess::WorkingCost,
        workspace::{Duals, Matching, PathState},
    },
    errors::{LSAError, LSAResult},
};

/// End point of a successful search.
///
/// - `sink`: the free column that terminates the path.
/// - `min_val`: shortest-path distance to `sink`, used by the dual update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugmentingPath<T> {
    pub sink: usize,
    pub min_val: T,
}

/// Run one shortest augmenting path search from `start_row`.
///
/// Parameters
/// ----------
/// - `cost`: working matrix (`nr <= nc`).
/// - `duals`: current dual prices; read only.
/// - `matching`: current matching; read only.
/// - `search`: scratch state, reset on entry and left holding the search
///   tree (`path`, `shortest_path_costs`, `sr`, `sc`) on success.
/// - `start_row`: an unmatched working row.
///
/// Returns
/// -------
/// `LSAResult<AugmentingPath<T>>`
///   - `Ok` with the sink column and its distance.
///   - `Err(LSAError::Infeasible { row: start_row })` if every remaining
///     column is unreachable.
pub fn find_augmenting_path<T: WorkFloat>(
    cost: &WorkingCost<T>, duals: &Duals<T>, matching: &Matching, search: &mut PathState<T>,
    start_row: usize,
) -> LSAResult<AugmentingPath<T>> {
    search.reset();

    let inf = T::infinity();
    let mut num_remaining = cost.ncols();
    let mut min_val = T::zero();
    let mut i = start_row;

    loop {
        let mut index = 0;
        let mut lowest = inf;
        search.sr[i] = true;

        for it in 0..num_remaining {
            let j = search.remaining[it];

            let r = min_val + cost.at(i, j) - duals.u[i] - duals.v[j];
            if r < search.shortest_path_costs[j] {
                search.path[j] = i;
                search.shortest_path_costs[j] = r;
            }

            let candidate = search.shortest_path_costs[j];
            if candidate < lowest
                || (equal_with_positive_inf(candidate, lowest) && matching.row4col[j].is_none())
            {
                lowest = candidate;
                index = it;
            }
        }

        min_val = lowest;
        if min_val == inf {
            return Err(LSAError::Infeasible { row: start_row });
        }

        let j = search.remaining[index];
        search.sc[j] = true;
        num_remaining -= 1;
        search.remaining[index] = search.remaining[num_remaining];

        match matching.row4col[j] {
            None => return Ok(AugmentingPath { sink: j, min_val }),
            Some(row) => i = row,
        }
    }
}
