//! The fixed comparison tolerance shared by every predicate in the crate.
//!
//! Coordinates computed by the kernel (circumcenters, clip points, projections)
//! are never compared for exact equality. Two values are considered equal when
//! they differ by less than [`TOLERANCE`], and every containment test is
//! widened or narrowed by the same amount.

use num_traits::Float;

/// Absolute tolerance used for coordinate equality and predicate decisions.
pub const TOLERANCE: f64 = 1e-9;

/// Returns [`TOLERANCE`] converted to `F`.
#[inline]
pub fn tolerance<F: Float>() -> F {
    F::from(TOLERANCE).unwrap_or_else(F::epsilon)
}

/// Returns `true` if `a` and `b` differ by less than [`TOLERANCE`].
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F) -> bool {
    (a - b).abs() < tolerance()
}

/// Converts an `f64` literal into `F`.
#[inline]
pub(crate) fn lit<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_f64() {
        assert_eq!(tolerance::<f64>(), 1e-9);
    }

    #[test]
    fn test_tolerance_f32_is_positive() {
        assert!(tolerance::<f32>() > 0.0);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0_f64, 1.0 + 1e-12));
        assert!(!approx_eq(1.0_f64, 1.0 + 1e-6));
    }

    #[test]
    fn test_lit() {
        let two: f32 = lit(2.0);
        assert_eq!(two, 2.0);
    }
}
