use core::fmt;
use core::ops;

use euclid::{Point3D, Vector3D};

/// One of the three coordinate axes.
///
/// Points, vectors and `[T; 3]` arrays can be indexed by an [`Axis`], which lets
/// per-axis box logic be written once instead of three times.
///
/// Formatting with `{:x}` or `{:X}` prints the axis name in lower or upper case.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[allow(missing_docs)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// `[X, Y, Z]`.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Position of this axis's component in an `[x, y, z]` array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Names of the lower and upper faces of an [`Aab`](crate::math::Aab) on this axis,
    /// matching its edge accessors such as [`left()`](crate::math::Aab::left).
    ///
    /// ```
    /// use boundbox::math::Axis;
    ///
    /// assert_eq!(Axis::Y.face_names(), ("top", "bottom"));
    /// ```
    #[inline]
    pub const fn face_names(self) -> (&'static str, &'static str) {
        match self {
            Axis::X => ("left", "right"),
            Axis::Y => ("top", "bottom"),
            Axis::Z => ("front", "back"),
        }
    }

    fn name(self, upper_case: bool) -> &'static str {
        match (self, upper_case) {
            (Axis::X, false) => "x",
            (Axis::Y, false) => "y",
            (Axis::Z, false) => "z",
            (Axis::X, true) => "X",
            (Axis::Y, true) => "Y",
            (Axis::Z, true) => "Z",
        }
    }
}

impl fmt::LowerHex for Axis {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(false))
    }
}
impl fmt::UpperHex for Axis {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(true))
    }
}

impl From<Axis> for usize {
    #[inline]
    fn from(value: Axis) -> Self {
        value.index()
    }
}

impl<T> ops::Index<Axis> for [T; 3] {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        &self[axis.index()]
    }
}
impl<T> ops::IndexMut<Axis> for [T; 3] {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self[axis.index()]
    }
}

impl<T, U> ops::Index<Axis> for Point3D<T, U> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
impl<T, U> ops::IndexMut<Axis> for Point3D<T, U> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl<T, U> ops::Index<Axis> for Vector3D<T, U> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
impl<T, U> ops::IndexMut<Axis> for Vector3D<T, U> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{FreePoint, FreeVector};
    use exhaust::Exhaust as _;

    #[test]
    fn axis_fmt() {
        use Axis::*;
        assert_eq!(
            format!("{X:x} {Y:x} {Z:x} {X:X} {Y:X} {Z:X}"),
            "x y z X Y Z"
        );
    }

    #[test]
    fn all_matches_exhaust() {
        assert_eq!(Axis::exhaust().collect::<std::vec::Vec<_>>(), Axis::ALL);
    }

    #[test]
    fn face_names_are_distinct() {
        let mut names = std::vec::Vec::new();
        for axis in Axis::ALL {
            let (lower, upper) = axis.face_names();
            names.extend([lower, upper]);
        }
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn index_agrees_with_fields() {
        let mut p = FreePoint::new(1.0, 2.0, 3.0);
        let v = FreeVector::new(4.0, 5.0, 6.0);
        let a = [7, 8, 9];
        assert_eq!([p[Axis::X], p[Axis::Y], p[Axis::Z]], [1.0, 2.0, 3.0]);
        assert_eq!([v[Axis::X], v[Axis::Y], v[Axis::Z]], [4.0, 5.0, 6.0]);
        for axis in Axis::ALL {
            assert_eq!(a[axis], 7 + axis.index());
            assert_eq!(usize::from(axis), axis.index());
        }
        p[Axis::Y] = 20.0;
        assert_eq!(p, FreePoint::new(1.0, 20.0, 3.0));
    }
}
