//! Utilities

use num_traits::Float;

/// Clamp a value to the given range
pub fn clamp<T>(value: T, min: T, max: T) -> T where T: PartialOrd {
    if value < min { min } else if value > max { max } else { value }
}

/// Clamp a value to the `[0, 1]` range.
///
/// Comparison-based, so a NaN input passes through unchanged instead of
/// being forced onto a bound.
#[inline]
pub fn saturate<T>(value: T) -> T where T: Float {
    clamp(value, T::zero(), T::one())
}

#[cfg(test)]
mod test {
    use super::{clamp, saturate};

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(7.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(::std::f32::NEG_INFINITY, 0.01, 10.0), 0.01);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(0.25f32), 0.25);
        assert_eq!(saturate(-0.25f32), 0.0);
        assert_eq!(saturate(1.25f32), 1.0);
    }

    #[test]
    fn test_saturate_passes_nan_through() {
        assert!(saturate(::std::f32::NAN).is_nan());
    }
}
