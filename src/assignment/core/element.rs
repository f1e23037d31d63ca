//! Numeric element traits for cost matrices.
//!
//! Two traits split the numeric concerns of a solve:
//! - [`WorkFloat`] is the floating-point type the solver runs in. It must have
//!   a well-defined `+∞` and total-enough comparisons for the Dijkstra sweep.
//! - [`CostElement`] is any element type a caller may hand in. Each element
//!   type names its working float and knows how to cast into it. Floating
//!   inputs run in their own precision. Booleans and integers up to 16 bits
//!   are widened to `f32`, which holds them exactly. 32- and 64-bit integers
//!   are widened to `f64`, so distinct costs stay distinct up to `2^53`.
use std::fmt::Debug;

use num_traits::Float;

/// Floating-point working type of the solver.
pub trait WorkFloat: Float + Debug + Send + Sync + 'static {
    /// Lossless (or widening) conversion used for reporting and totals.
    fn as_f64(self) -> f64;
}

impl WorkFloat for f32 {
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl WorkFloat for f64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// Tie-break equality used when picking the next column of a sweep.
///
/// Two `+∞` values compare equal; otherwise values are equal when their
/// absolute difference is below the machine epsilon of `T`. Note that
/// `∞ - ∞` is NaN, so the infinity case must be handled first.
#[inline]
pub fn equal_with_positive_inf<T: WorkFloat>(a: T, b: T) -> bool {
    let inf = T::infinity();
    if a == inf && b == inf {
        return true;
    }
    (a - b).abs() < T::epsilon()
}

/// Element type accepted in a caller's cost matrix.
pub trait CostElement: Copy + Debug {
    /// Working float the solver uses for this element type.
    type Work: WorkFloat;

    /// Cast into the working type.
    fn to_work(self) -> Self::Work;

    /// Widen to `f64` for totals and error payloads.
    fn as_f64(self) -> f64;

    /// `true` for NaN, and for the infinity that turns into `-∞` in the
    /// working buffer: `-∞` when minimizing, `+∞` when maximizing. Integer
    /// and boolean types are never invalid.
    #[inline]
    fn is_invalid_cost(self, _maximize: bool) -> bool {
        false
    }
}

macro_rules! float_cost_element {
    ($($t:ty),*) => {
        $(
            impl CostElement for $t {
                type Work = $t;

                #[inline]
                fn to_work(self) -> $t {
                    self
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_invalid_cost(self, maximize: bool) -> bool {
                    let forbidden = if maximize { <$t>::INFINITY } else { <$t>::NEG_INFINITY };
                    self.is_nan() || self == forbidden
                }
            }
        )*
    };
}

macro_rules! integer_cost_element {
    ($work:ty => $($t:ty),*) => {
        $(
            impl CostElement for $t {
                type Work = $work;

                #[inline]
                fn to_work(self) -> $work {
                    self as $work
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

float_cost_element!(f32, f64);
integer_cost_element!(f32 => i8, i16, u8, u16);
integer_cost_element!(f64 => i32, i64, u32, u64);

impl CostElement for bool {
    type Work = f32;

    #[inline]
    fn to_work(self) -> f32 {
        if self { 1.0 } else { 0.0 }
    }

    #[inline]
    fn as_f64(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_infinities_compare_equal() {
        assert!(equal_with_positive_inf(f64::INFINITY, f64::INFINITY));
        assert!(equal_with_positive_inf(f32::INFINITY, f32::INFINITY));
    }

    #[test]
    fn finite_and_infinite_values_are_not_equal() {
        assert!(!equal_with_positive_inf(1.0_f64, f64::INFINITY));
        assert!(!equal_with_positive_inf(f64::INFINITY, 1.0_f64));
    }

    #[test]
    fn near_values_within_epsilon_are_equal() {
        let a = 0.1_f64 + 0.2;
        let b = 0.3_f64;
        assert!(equal_with_positive_inf(a, b));
        assert!(!equal_with_positive_inf(0.3_f64, 0.31));
    }

    #[test]
    fn float_elements_flag_nan_and_negative_infinity_only() {
        assert!(f64::NAN.is_invalid_cost(false));
        assert!(f32::NEG_INFINITY.is_invalid_cost(false));
        assert!(!f64::INFINITY.is_invalid_cost(false));
        assert!(!(-3.5_f32).is_invalid_cost(false));
    }

    #[test]
    fn maximizing_swaps_which_infinity_is_invalid() {
        assert!(f64::INFINITY.is_invalid_cost(true));
        assert!(!f64::NEG_INFINITY.is_invalid_cost(true));
        assert!(f64::NAN.is_invalid_cost(true));
    }

    #[test]
    fn narrow_integers_and_bool_widen_to_f32() {
        assert_eq!((-7_i16).to_work(), -7.0_f32);
        assert_eq!(200_u8.to_work(), 200.0_f32);
        assert_eq!(true.to_work(), 1.0_f32);
        assert_eq!(false.as_f64(), 0.0);
        assert!(!(-1_i32).is_invalid_cost(false));
    }

    #[test]
    fn wide_integers_keep_distinct_values_in_f64() {
        assert_eq!(16_777_217_i64.to_work(), 16_777_217.0_f64);
        assert_ne!(16_777_217_i64.to_work(), 16_777_216_i64.to_work());
        assert_eq!(100_000_001_i32.to_work(), 100_000_001.0_f64);
        assert_eq!(u32::MAX.to_work(), 4_294_967_295.0_f64);
    }
}
