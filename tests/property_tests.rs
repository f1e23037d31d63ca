//! Property-based tests for the linear sum assignment solver.
//!
//! These tests use proptest to check optimality against brute force and the
//! structural properties of every result on small random integer-valued
//! matrices (integer values keep every total exact in floating point).

use ndarray::{Array2, s};
use proptest::prelude::*;
use rust_lsap::assignment::{Assignment, LSAOptions, linear_sum_assignment, solve_working};

// ============================================================================
// Test Utilities
// ============================================================================

/// Strategy for small cost matrices with 1..=5 rows and columns.
fn matrix_strategy() -> impl Strategy<Value = Array2<f64>> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(nr, nc)| {
        prop::collection::vec(-50i32..50, nr * nc).prop_map(move |values| {
            let data: Vec<f64> = values.into_iter().map(f64::from).collect();
            Array2::from_shape_vec((nr, nc), data).unwrap()
        })
    })
}

/// Strategy for a matrix together with a valid dimension limit.
fn matrix_with_limit_strategy() -> impl Strategy<Value = (Array2<f64>, usize)> {
    matrix_strategy().prop_flat_map(|m| {
        let nc = m.ncols();
        (Just(m), 1usize..=nc)
    })
}

/// Exhaustive minimum over all maximal matchings.
fn brute_force_min(cost: &Array2<f64>) -> f64 {
    fn go(m: &Array2<f64>, row: usize, used: &mut [bool]) -> f64 {
        if row == m.nrows() {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for j in 0..m.ncols() {
            if !used[j] {
                used[j] = true;
                best = best.min(m[[row, j]] + go(m, row + 1, used));
                used[j] = false;
            }
        }
        best
    }

    let m = if cost.nrows() <= cost.ncols() { cost.clone() } else { cost.t().to_owned() };
    let mut used = vec![false; m.ncols()];
    go(&m, 0, &mut used)
}

fn solve(cost: &Array2<f64>, maximize: bool) -> Assignment {
    linear_sum_assignment(cost.view(), None, maximize).unwrap()
}

// ============================================================================
// Structure
// ============================================================================

proptest! {
    /// Property: lengths, ascending rows, distinct columns, no padding on full problems
    #[test]
    fn prop_result_is_well_formed(cost in matrix_strategy()) {
        let (nr, nc) = cost.dim();
        let result = solve(&cost, false);

        prop_assert_eq!(result.len(), nr.min(nc));
        prop_assert_eq!(result.matched_len(), nr.min(nc));

        let pairs: Vec<(usize, usize)> = result.pairs().collect();
        prop_assert_eq!(pairs.len(), nr.min(nc));
        for window in pairs.windows(2) {
            prop_assert!(window[0].0 < window[1].0);
        }
        let mut cols: Vec<usize> = pairs.iter().map(|&(_, c)| c).collect();
        cols.sort_unstable();
        cols.dedup();
        prop_assert_eq!(cols.len(), pairs.len());
        prop_assert!(pairs.iter().all(|&(r, c)| r < nr && c < nc));
    }

    /// Property: square and wide problems report rows 0..nr in order
    #[test]
    fn prop_wide_rows_are_identity(cost in matrix_strategy()) {
        prop_assume!(cost.nrows() <= cost.ncols());
        let result = solve(&cost, false);

        let expected: Vec<i64> = (0..cost.nrows() as i64).collect();
        prop_assert_eq!(result.row_ind(), expected.as_slice());
    }
}

// ============================================================================
// Optimality
// ============================================================================

proptest! {
    /// Property: the total equals the brute-force minimum
    #[test]
    fn prop_total_is_optimal(cost in matrix_strategy()) {
        let result = solve(&cost, false);

        prop_assert_eq!(result.total_cost(cost.view()), brute_force_min(&cost));
    }

    /// Property: maximize(M) returns the same indices as minimize(-M)
    #[test]
    fn prop_maximize_is_negated_minimize(cost in matrix_strategy()) {
        let negated = cost.mapv(|x| -x);

        let maximized = solve(&cost, true);
        let minimized = solve(&negated, false);

        prop_assert_eq!(maximized.row_ind(), minimized.row_ind());
        prop_assert_eq!(maximized.col_ind(), minimized.col_ind());
        prop_assert_eq!(maximized.total_cost(cost.view()), -brute_force_min(&negated));
    }

    /// Property: solving the transpose gives the same total, and its pairs flipped
    /// back to (col, row) form a valid matching of the original with that total
    #[test]
    fn prop_transpose_preserves_total_and_mapping(cost in matrix_strategy()) {
        let (nr, nc) = cost.dim();
        let transposed = cost.t().to_owned();

        let direct = solve(&cost, false);
        let flipped = solve(&transposed, false);

        let direct_total = direct.total_cost(cost.view());
        prop_assert_eq!(direct_total, flipped.total_cost(transposed.view()));

        let mut mapped: Vec<(usize, usize)> = flipped.pairs().map(|(r, c)| (c, r)).collect();
        prop_assert_eq!(mapped.len(), direct.matched_len());
        prop_assert!(mapped.iter().all(|&(r, c)| r < nr && c < nc));

        let mapped_total: f64 = mapped.iter().map(|&(r, c)| cost[[r, c]]).sum();
        prop_assert_eq!(mapped_total, direct_total);

        mapped.sort_unstable();
        let mut rows: Vec<usize> = mapped.iter().map(|&(r, _)| r).collect();
        let mut cols: Vec<usize> = mapped.iter().map(|&(_, c)| c).collect();
        rows.dedup();
        cols.sort_unstable();
        cols.dedup();
        prop_assert_eq!(rows.len(), mapped.len());
        prop_assert_eq!(cols.len(), mapped.len());
    }

    /// Property: a dimension limit k matches min(nr, k) rows into columns < k, optimally
    #[test]
    fn prop_dimension_limit_is_respected((cost, limit) in matrix_with_limit_strategy()) {
        let (nr, nc) = cost.dim();
        let result = linear_sum_assignment(cost.view(), Some(limit), false).unwrap();

        prop_assert_eq!(result.len(), nr.min(nc));
        prop_assert_eq!(result.matched_len(), nr.min(limit));
        prop_assert!(result.pairs().all(|(_, c)| c < limit));
        for k in result.matched_len()..result.len() {
            prop_assert_eq!(result.row_ind()[k], -1);
            prop_assert_eq!(result.col_ind()[k], -1);
        }

        let leading = cost.slice(s![.., ..limit]).to_owned();
        prop_assert_eq!(result.total_cost(cost.view()), brute_force_min(&leading));
    }

    /// Property: f32 and integer inputs reach the same optimum as f64
    #[test]
    fn prop_working_precision_does_not_change_total(cost in matrix_strategy()) {
        let as_f32 = cost.mapv(|x| x as f32);
        let as_i64 = cost.mapv(|x| x as i64);
        let as_i16 = cost.mapv(|x| x as i16);

        let expected = brute_force_min(&cost);
        let from_f32 = linear_sum_assignment(as_f32.view(), None, false).unwrap();
        let from_i64 = linear_sum_assignment(as_i64.view(), None, false).unwrap();

        prop_assert_eq!(from_f32.total_cost(as_f32.view()), expected);
        prop_assert_eq!(from_i64.total_cost(as_i64.view()), expected);
        let from_i16 = linear_sum_assignment(as_i16.view(), None, false).unwrap();
        prop_assert_eq!(from_i16.total_cost(as_i16.view()), expected);
    }

    /// Property: 64-bit integer costs offset far beyond f32 precision stay optimal
    #[test]
    fn prop_large_integer_offsets_stay_optimal(cost in matrix_strategy()) {
        let offset = 1_i64 << 40;
        let shifted = cost.mapv(|x| x as i64 + offset);
        let k = cost.nrows().min(cost.ncols()) as f64;

        let result = linear_sum_assignment(shifted.view(), None, false).unwrap();

        let expected = brute_force_min(&cost) + k * offset as f64;
        prop_assert_eq!(result.total_cost(shifted.view()), expected);
    }

    /// Property: the returned duals are feasible and tight on matched pairs
    #[test]
    fn prop_duals_certify_optimality(cost in matrix_strategy()) {
        let solution = solve_working(cost.view(), &LSAOptions::default()).unwrap();
        let working = if solution.assignment.was_transposed() {
            cost.t().to_owned()
        } else {
            cost.clone()
        };
        let (u, v) = (&solution.duals.u, &solution.duals.v);
        let tol = 1e-9;

        for ((i, j), &c) in working.indexed_iter() {
            prop_assert!(u[i] + v[j] <= c + tol);
        }
        for (r, c) in solution.assignment.pairs() {
            let (i, j) = if solution.assignment.was_transposed() { (c, r) } else { (r, c) };
            prop_assert!((u[i] + v[j] - working[[i, j]]).abs() <= tol);
        }
    }
}
