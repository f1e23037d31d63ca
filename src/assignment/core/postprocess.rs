//! Convert the internal matching into caller-facing index arrays.
//!
//! The solver matches working rows to working columns. Without a transpose
//! those are the caller's rows and columns and the output is simply
//! `(i, col4row[i])`. With a transpose the working rows are the caller's
//! columns, so pairs are flipped back and re-sorted by the caller's row
//! index. Slots beyond the matched size are padded with `-1`.

/// Write `(row_ind, col_ind)` from a completed matching.
///
/// - `col4row`: working-row → working-column matching, length `min(nr, nc)`.
/// - `transposed`: whether the working matrix was the caller's transpose.
/// - `row_ind`, `col_ind`: output slices of equal length
///   `element_num >= col4row.len()`.
///
/// Rows in the output are ascending. Unmatched working rows (only possible
/// for a partial matching) and trailing slots are written as `-1`.
pub fn write_indices(
    col4row: &[Option<usize>], transposed: bool, row_ind: &mut [i64], col_ind: &mut [i64],
) {
    let matched = col4row.len().min(row_ind.len()).min(col_ind.len());

    if transposed {
        let mut index: Vec<usize> = (0..col4row.len()).collect();
        index.sort_by_key(|&k| col4row[k]);
        for (slot, &k) in index.iter().take(matched).enumerate() {
            match col4row[k] {
                Some(row) => {
                    row_ind[slot] = row as i64;
                    col_ind[slot] = k as i64;
                }
                None => {
                    row_ind[slot] = -1;
                    col_ind[slot] = -1;
                }
            }
        }
    } else {
        for (i, col) in col4row.iter().take(matched).enumerate() {
            row_ind[i] = i as i64;
            col_ind[i] = col.map_or(-1, |j| j as i64);
        }
    }

    row_ind[matched..].fill(-1);
    col_ind[matched..].fill(-1);
}
