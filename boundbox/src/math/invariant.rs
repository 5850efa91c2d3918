//! The corner-ordering rule shared by every bound-setting operation of [`Aab`].
//!
//! [`Aab`]: crate::math::Aab

use crate::math::{Axis, FreeCoordinate, FreePoint};

/// Identifies one of the two corners of a box.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Bound {
    /// The most negative corner (`min`).
    Lower,
    /// The most positive corner (`max`).
    Upper,
}

impl Bound {
    /// Returns the other corner.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Bound::Lower => Bound::Upper,
            Bound::Upper => Bound::Lower,
        }
    }
}

/// Sets one coordinate of one corner of a box, and returns the corrected pair of corners.
///
/// The `bound` corner's coordinate on `axis` becomes `value`. If that would put the
/// corners out of order on `axis`, the opposite corner's coordinate is moved to `value`
/// as well, so that the box collapses to zero size on that axis instead of inverting.
/// The other two axes are never modified.
///
/// This is the rule used by [`Aab::set_min()`], [`Aab::set_max()`], and the
/// single-edge setters such as [`Aab::set_left()`].
///
/// ```
/// use boundbox::math::{set_bound, Axis, Bound, FreePoint};
///
/// let (lower, upper) = set_bound(
///     FreePoint::new(5.0, 5.0, 5.0),
///     FreePoint::new(10.0, 10.0, 10.0),
///     Axis::X,
///     1.0,
///     Bound::Upper,
/// );
/// assert_eq!(lower, FreePoint::new(1.0, 5.0, 5.0));
/// assert_eq!(upper, FreePoint::new(1.0, 10.0, 10.0));
/// ```
///
/// [`Aab::set_min()`]: crate::math::Aab::set_min
/// [`Aab::set_max()`]: crate::math::Aab::set_max
/// [`Aab::set_left()`]: crate::math::Aab::set_left
#[inline]
#[must_use]
pub fn set_bound(
    mut lower: FreePoint,
    mut upper: FreePoint,
    axis: Axis,
    value: FreeCoordinate,
    bound: Bound,
) -> (FreePoint, FreePoint) {
    match bound {
        Bound::Lower => {
            if value > upper[axis] {
                upper[axis] = value;
            }
            lower[axis] = value;
        }
        Bound::Upper => {
            if value < lower[axis] {
                lower[axis] = value;
            }
            upper[axis] = value;
        }
    }
    (lower, upper)
}

/// Applies [`set_bound()`] on every axis, replacing the whole `bound` corner with `point`.
#[inline]
#[must_use]
pub fn set_corner(
    lower: FreePoint,
    upper: FreePoint,
    point: FreePoint,
    bound: Bound,
) -> (FreePoint, FreePoint) {
    Axis::ALL
        .into_iter()
        .fold((lower, upper), |(lower, upper), axis| {
            set_bound(lower, upper, axis, point[axis], bound)
        })
}
