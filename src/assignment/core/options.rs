//! Solver options — dimension limit and optimization direction.
//!
//! Purpose
//! -------
//! Bundle the two per-call knobs of a linear sum assignment solve into a
//! small `Copy` value so that call sites (Rust API, flat kernel API, Python
//! bindings) share one configuration type.
//!
//! Key behaviors
//! -------------
//! - [`LSAOptions::default`] selects every column and minimizes total cost.
//! - Chainable setters adjust the limit or switch to maximization.
//! - No validation happens here: the limit only becomes meaningful against a
//!   concrete column count and is checked by [`CostShape::new`] at solve time.
//!
//! Conventions
//! -----------
//! - `dimension_limit = None` is equivalent to the kernel sentinel
//!   `i64::MAX` ("all columns").
//!
//! [`CostShape::new`]: crate::assignment::core::shape::CostShape::new
use crate::assignment::core::shape::DimensionLimit;

/// LSAOptions — per-call configuration of the assignment solver.
///
/// Fields
/// ------
/// - `dimension_limit`: [`DimensionLimit`]
///   Number of leading columns eligible for matching.
/// - `maximize`: `bool`
///   When `true`, the solver maximizes the total cost instead of minimizing
///   it (internally by negating the working matrix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LSAOptions {
    pub dimension_limit: DimensionLimit,
    pub maximize: bool,
}

impl LSAOptions {
    /// Build options from an optional column limit and a direction flag.
    pub fn new(dimension_limit: Option<usize>, maximize: bool) -> Self {
        LSAOptions { dimension_limit: dimension_limit.into(), maximize }
    }

    /// Restrict matching to the first `limit` columns.
    pub fn with_dimension_limit(mut self, limit: usize) -> Self {
        self.dimension_limit = DimensionLimit::Leading(limit);
        self
    }

    /// Set the optimization direction.
    pub fn maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify the documented defaults and the chainable setters.
    //
    // Given
    // -----
    // - `LSAOptions::default()` and a chained builder.
    //
    // Expect
    // ------
    // - Defaults: all columns, minimize. Chained: Leading(2), maximize.
    fn lsaoptions_defaults_and_setters() {
        // Arrange
        let defaults = LSAOptions::default();
        let chained = LSAOptions::default().with_dimension_limit(2).maximize(true);

        // Act / Assert
        assert_eq!(defaults.dimension_limit, DimensionLimit::All);
        assert!(!defaults.maximize);
        assert_eq!(chained, LSAOptions::new(Some(2), true));
    }
}
