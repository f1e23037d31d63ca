//! Problem shape and the dimension limit on eligible columns.
//!
//! A cost matrix has `nr` rows and `raw_nc` columns. Only the first
//! `nc = dimension_limit` columns take part in the matching; the rest are
//! ignored by the solver but still count towards the output length
//! `min(nr, raw_nc)`.
use crate::assignment::errors::{LSAError, LSAResult};

/// How many leading columns of the cost matrix are eligible for matching.
///
/// - `All`: every column (the kernel encodes this as `i64::MAX`).
/// - `Leading(k)`: columns `0..k`; requires `1 <= k <= raw_nc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionLimit {
    #[default]
    All,
    Leading(usize),
}

impl DimensionLimit {
    /// Interpret a raw integer limit as passed across the kernel boundary.
    ///
    /// `i64::MAX` selects all columns. Any other value must lie in
    /// `[1, ncols]`.
    ///
    /// # Errors
    /// - [`LSAError::InvalidDimensionLimit`] if `raw <= 0` or `raw > ncols`.
    pub fn from_raw(raw: i64, ncols: usize) -> LSAResult<Self> {
        if raw == i64::MAX {
            return Ok(DimensionLimit::All);
        }
        if raw <= 0 {
            return Err(LSAError::InvalidDimensionLimit {
                limit: raw,
                ncols,
                reason: "dimension_limit must be positive.",
            });
        }
        let limit = DimensionLimit::Leading(raw as usize);
        limit.resolve(ncols)?;
        Ok(limit)
    }

    /// Number of eligible columns for a matrix with `ncols` columns.
    ///
    /// # Errors
    /// - [`LSAError::InvalidDimensionLimit`] if the limit is zero or exceeds
    ///   `ncols`.
    pub fn resolve(self, ncols: usize) -> LSAResult<usize> {
        match self {
            DimensionLimit::All => Ok(ncols),
            DimensionLimit::Leading(0) => Err(LSAError::InvalidDimensionLimit {
                limit: 0,
                ncols,
                reason: "dimension_limit must be positive.",
            }),
            DimensionLimit::Leading(k) if k > ncols => Err(LSAError::InvalidDimensionLimit {
                limit: i64::try_from(k).unwrap_or(i64::MAX),
                ncols,
                reason: "dimension_limit must be <= the number of columns of the cost matrix.",
            }),
            DimensionLimit::Leading(k) => Ok(k),
        }
    }
}

impl From<Option<usize>> for DimensionLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(DimensionLimit::All, DimensionLimit::Leading)
    }
}

/// Validated shape of one solve call.
///
/// - `nr`: rows of the caller's matrix.
/// - `raw_nc`: columns of the caller's matrix.
/// - `nc`: eligible columns after applying the dimension limit.
///
/// Invariant: `nc <= raw_nc`, and `nc >= 1` unless `raw_nc == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostShape {
    pub nr: usize,
    pub raw_nc: usize,
    pub nc: usize,
}

impl CostShape {
    /// Resolve `limit` against an `nr × raw_nc` matrix.
    ///
    /// # Errors
    /// - [`LSAError::InvalidDimensionLimit`] from [`DimensionLimit::resolve`].
    pub fn new(nr: usize, raw_nc: usize, limit: DimensionLimit) -> LSAResult<Self> {
        let nc = limit.resolve(raw_nc)?;
        Ok(CostShape { nr, raw_nc, nc })
    }

    /// Length of the output index arrays, `min(nr, raw_nc)`.
    pub fn element_num(&self) -> usize {
        self.nr.min(self.raw_nc)
    }

    /// Number of pairs an optimal matching contains, `min(nr, nc)`.
    pub fn matched_len(&self) -> usize {
        self.nr.min(self.nc)
    }

    /// Whether the solver works on the transposed matrix (`nc < nr`).
    pub fn transposed(&self) -> bool {
        self.nc < self.nr
    }

    /// `true` when there is nothing to match.
    pub fn is_degenerate(&self) -> bool {
        self.nr == 0 || self.nc == 0
    }
}
