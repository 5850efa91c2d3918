//! Scalar float-to-integer conversions used by the quantization operations of
//! [`Aab`](crate::math::Aab).
//!
//! All three saturate at the bounds of [`IntCoordinate`] and map NaN to zero, which is
//! the behavior of `as` casts.

use crate::math::{FreeCoordinate, IntCoordinate};

/// Rounds to the nearest integer, with ties going to the even neighbor.
#[inline]
pub(crate) fn round_to_int(value: FreeCoordinate) -> IntCoordinate {
    // `rintf` honors the default rounding mode, which is round-half-to-even.
    libm::rintf(value) as IntCoordinate
}

/// Rounds toward positive infinity.
#[inline]
pub(crate) fn ceil_to_int(value: FreeCoordinate) -> IntCoordinate {
    libm::ceilf(value) as IntCoordinate
}

/// Rounds toward negative infinity.
#[inline]
pub(crate) fn floor_to_int(value: FreeCoordinate) -> IntCoordinate {
    libm::floorf(value) as IntCoordinate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0, 0, 0)]
    #[case(0.5, 0, 1, 0)]
    #[case(1.5, 2, 2, 1)]
    #[case(2.5, 2, 3, 2)]
    #[case(-0.5, 0, 0, -1)]
    #[case(-1.5, -2, -1, -2)]
    #[case(-2.25, -2, -2, -3)]
    #[case(7.75, 8, 8, 7)]
    fn conversions(
        #[case] input: f32,
        #[case] round: i32,
        #[case] ceil: i32,
        #[case] floor: i32,
    ) {
        assert_eq!(
            (round_to_int(input), ceil_to_int(input), floor_to_int(input)),
            (round, ceil, floor)
        );
    }

    #[test]
    fn saturation() {
        assert_eq!(round_to_int(f32::INFINITY), IntCoordinate::MAX);
        assert_eq!(ceil_to_int(1e20), IntCoordinate::MAX);
        assert_eq!(floor_to_int(f32::NEG_INFINITY), IntCoordinate::MIN);
        assert_eq!(round_to_int(f32::NAN), 0);
    }
}
