use core::fmt;
use core::ops::RangeInclusive;

use euclid::size3;

use crate::math::{Aab, Axis, FreeCoordinate, IntCoordinate, IntPoint, IntSize, sort_two};

/// Axis-aligned box with integer corner coordinates.
///
/// This is the integer counterpart of [`Aab`], and is normally obtained from one of
/// [`Aab::round_to_int()`], [`Aab::ceil_to_int()`], or [`Aab::floor_to_int()`].
/// Like [`Aab`], its lower corner is never greater than its upper corner on any axis.
/// Because the coordinates are integers, that ordering is always enforced.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct IntAab {
    lower_bounds: IntPoint,
    /// Constructor ensures this is not smaller than `lower_bounds`.
    upper_bounds: IntPoint,
}

impl IntAab {
    /// The [`IntAab`] of zero size at the origin.
    pub const EMPTY: IntAab = IntAab {
        lower_bounds: IntPoint::new(0, 0, 0),
        upper_bounds: IntPoint::new(0, 0, 0),
    };

    /// Constructs an [`IntAab`] whose corners are the componentwise minimum and maximum
    /// of the two given points, in whichever order they are given.
    ///
    /// ```
    /// use boundbox::math::IntAab;
    ///
    /// assert_eq!(
    ///     IntAab::new([4, 1, 6], [1, 5, 3]),
    ///     IntAab::new([1, 1, 3], [4, 5, 6]),
    /// );
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn new(a: impl Into<IntPoint>, b: impl Into<IntPoint>) -> Self {
        let mut lower_bounds = a.into();
        let mut upper_bounds = b.into();
        for axis in Axis::ALL {
            sort_two(&mut lower_bounds[axis], &mut upper_bounds[axis]);
        }
        IntAab {
            lower_bounds,
            upper_bounds,
        }
    }

    /// The most negative corner of the box.
    #[inline]
    pub const fn min(&self) -> IntPoint {
        self.lower_bounds
    }

    /// The most positive corner of the box.
    #[inline]
    pub const fn max(&self) -> IntPoint {
        self.upper_bounds
    }

    /// Size of the box in each axis; equivalent to `self.max() - self.min()`, except
    /// that the result is unsigned (which is necessary so that it cannot overflow).
    #[inline]
    pub const fn size(&self) -> IntSize {
        size3(
            // upper >= lower, so the wrapped difference read as unsigned is exact.
            i32::wrapping_sub(self.upper_bounds.x, self.lower_bounds.x).cast_unsigned(),
            i32::wrapping_sub(self.upper_bounds.y, self.lower_bounds.y).cast_unsigned(),
            i32::wrapping_sub(self.upper_bounds.z, self.lower_bounds.z).cast_unsigned(),
        )
    }

    /// Size of the box along the X axis.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.size().width
    }

    /// Size of the box along the Y axis.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.size().height
    }

    /// Size of the box along the Z axis.
    #[inline]
    pub const fn depth(&self) -> u32 {
        self.size().depth
    }

    /// Returns whether both corners are at the origin, i.e. whether this equals
    /// [`IntAab::EMPTY`].
    ///
    /// As with [`Aab::is_empty()`], a box of zero size elsewhere is not “empty”.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The closed range of coordinates spanned along the given axis.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<IntCoordinate> {
        self.lower_bounds[axis]..=self.upper_bounds[axis]
    }

    /// Converts `self` to floating-point coordinates.
    ///
    /// Coordinates with magnitude above 2<sup>24</sup> may not be exactly representable
    /// and are rounded to the nearest [`FreeCoordinate`].
    #[inline]
    pub fn to_free(self) -> Aab {
        Aab::new(
            self.lower_bounds.map(|c| c as FreeCoordinate),
            self.upper_bounds.map(|c| c as FreeCoordinate),
        )
    }
}

impl fmt::Debug for IntAab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntAab")
            .field(&self.axis_range(Axis::X))
            .field(&self.axis_range(Axis::Y))
            .field(&self.axis_range(Axis::Z))
            .finish()
    }
}

/// Formats as `"(x, y, z) - (x, y, z)"`, lower corner first.
impl fmt::Display for IntAab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            lower_bounds: l,
            upper_bounds: u,
        } = self;
        write!(
            f,
            "({}, {}, {}) - ({}, {}, {})",
            l.x, l.y, l.z, u.x, u.y, u.z
        )
    }
}

impl From<IntAab> for Aab {
    /// Same as [`IntAab::to_free()`].
    #[inline]
    fn from(value: IntAab) -> Self {
        value.to_free()
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for IntAab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let a: [IntCoordinate; 3] = u.arbitrary()?;
        let b: [IntCoordinate; 3] = u.arbitrary()?;
        Ok(IntAab::new(a, b))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[[IntCoordinate; 3]; 2] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}
