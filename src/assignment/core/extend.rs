//! Dual update and alternating-path augmentation after a successful search.
//!
//! The two steps must run in this order: [`update_duals`] reads `col4row`
//! as it stood during the search (each visited row's column on the tree),
//! and [`augment_previous_solution`] then rewrites `col4row` along the path.
use crate::assignment::core::{
    element::WorkFloat,
    workspace::{Duals, Matching, PathState},
};

/// Shift dual prices so that every tree edge becomes tight.
///
/// - `u[cur_row] += min_val`
/// - `u[i] += min_val - d[col4row[i]]` for every other visited row `i`
/// - `v[j] -= min_val - d[j]` for every visited column `j`
///
/// where `d` is `search.shortest_path_costs`.
pub fn update_duals<T: WorkFloat>(
    duals: &mut Duals<T>, search: &PathState<T>, matching: &Matching, cur_row: usize, min_val: T,
) {
    let d = &search.shortest_path_costs;

    duals.u[cur_row] = duals.u[cur_row] + min_val;
    for (i, &visited) in search.sr.iter().enumerate() {
        if !visited || i == cur_row {
            continue;
        }
        if let Some(j) = matching.col4row[i] {
            duals.u[i] = duals.u[i] + (min_val - d[j]);
        }
    }

    for (j, &visited) in search.sc.iter().enumerate() {
        if visited {
            duals.v[j] = duals.v[j] - (min_val - d[j]);
        }
    }
}

/// Flip the alternating path ending at `sink` back to `cur_row`.
///
/// Each step assigns column `j` to its predecessor row `i = path[j]` and
/// continues with the column `i` held before, until `cur_row` is reached.
/// The matching grows by exactly one pair.
pub fn augment_previous_solution<T>(
    sink: usize, cur_row: usize, search: &PathState<T>, matching: &mut Matching,
) {
    let mut j = sink;
    loop {
        let i = search.path[j];
        matching.row4col[j] = Some(i);
        let previous = std::mem::replace(&mut matching.col4row[i], Some(j));
        if i == cur_row {
            break;
        }
        match previous {
            Some(prev) => j = prev,
            None => break,
        }
    }
}
