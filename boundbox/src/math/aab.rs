use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use euclid::{Point3D, Vector3D};
use manyfmt::Refmt as _;

use crate::math::quantize::{ceil_to_int, floor_to_int, round_to_int};
use crate::math::{
    Axis, Bound, FreeCoordinate, FreePoint, FreeVector, IntAab, IntPoint, set_bound, set_corner,
};
use crate::util::ConciseDebug;


/// Axis-Aligned Box data type.
///
/// An [`Aab`] is defined by its lower corner ([`min()`](Self::min)) and upper corner
/// ([`max()`](Self::max)). Every operation that sets a corner or an edge keeps
/// `min[axis] <= max[axis]` on every axis, by moving the opposite corner along with it
/// when necessary.
///
/// A few operations are defined by arithmetic and do *not* re-establish that ordering:
/// [`Aab::from_size()`] and the size setters with a negative size, and
/// [`Aab::scale()`] with a negative factor. Such a box is reported by
/// [`Aab::validate()`] and stays inverted until a later corner or edge assignment
/// fixes it. NaN and infinite coordinates are accepted everywhere and are never
/// rejected, except by [`Aab::checked_from_size()`] and [`Aab::validate()`].
///
/// Note that this has continuous coordinates, and an integer analogue exists as
/// [`IntAab`].
///
/// Equality is exact floating-point equality of the corners.
#[derive(Copy, Clone, PartialEq)]
pub struct Aab {
    lower_bounds: FreePoint,
    upper_bounds: FreePoint,
}

/// Whether a point lying exactly on the surface of a box counts as inside it.
///
/// Used by [`Aab::contains_point()`].
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Boundary {
    /// Only points strictly inside the box are contained.
    Exclusive,
    /// Points on the faces, edges and corners of the box are also contained.
    Inclusive,
}

impl Aab {
    /// The [`Aab`] of zero size at the origin.
    ///
    /// This is also the value [`Aab::intersection()`] returns when its inputs do not
    /// overlap, so it cannot be told apart from a genuine zero-size intersection at the
    /// origin.
    pub const EMPTY: Aab = Aab {
        lower_bounds: Point3D::new(0., 0., 0.),
        upper_bounds: Point3D::new(0., 0., 0.),
    };

    /// The box from `[0, 0, 0]` to `[1, 1, 1]`.
    pub const UNIT: Aab = Aab {
        lower_bounds: Point3D::new(0., 0., 0.),
        upper_bounds: Point3D::new(1., 1., 1.),
    };

    /// Constructs the [`Aab`] which has `a` and `b` as opposite corners.
    ///
    /// The points may be given in any order; the lower corner is their componentwise
    /// minimum and the upper corner their componentwise maximum.
    ///
    /// ```
    /// use boundbox::math::{Aab, FreePoint};
    ///
    /// let aab = Aab::new([10.0, 0.0, 5.0], [0.0, 10.0, 5.0]);
    /// assert_eq!(aab.min(), FreePoint::new(0.0, 0.0, 5.0));
    /// assert_eq!(aab.max(), FreePoint::new(10.0, 10.0, 5.0));
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn new(a: impl Into<FreePoint>, b: impl Into<FreePoint>) -> Self {
        let a = a.into();
        let b = b.into();
        Self {
            lower_bounds: a.min(b),
            upper_bounds: a.max(b),
        }
    }

    /// Constructs an [`Aab`] from individual coordinates.
    /// As with [`Aab::new()`], each axis is put in order.
    #[inline]
    pub fn from_coordinates(
        min_x: FreeCoordinate,
        min_y: FreeCoordinate,
        min_z: FreeCoordinate,
        max_x: FreeCoordinate,
        max_y: FreeCoordinate,
        max_z: FreeCoordinate,
    ) -> Self {
        Self::new(
            Point3D::new(min_x, min_y, min_z),
            Point3D::new(max_x, max_y, max_z),
        )
    }

    /// Constructs an [`Aab`] from its lower corner and its size.
    ///
    /// The upper corner is `location + size`, and nothing is reordered: if any component
    /// of `size` is negative, the result is inverted on that axis (see
    /// [`Aab::validate()`]). Use [`Aab::checked_from_size()`] to reject such input.
    ///
    /// ```
    /// use boundbox::math::{Aab, FreePoint, FreeVector};
    ///
    /// let aab = Aab::from_size([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
    /// assert_eq!(aab.location(), FreePoint::new(1.0, 2.0, 3.0));
    /// assert_eq!(aab.size(), FreeVector::new(4.0, 5.0, 6.0));
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_size(location: impl Into<FreePoint>, size: impl Into<FreeVector>) -> Self {
        let location = location.into();
        let aab = Self {
            lower_bounds: location,
            upper_bounds: location + size.into(),
        };
        aab.note_if_invalid("from_size");
        aab
    }

    /// Constructs an [`Aab`] from its lower corner and its size, like
    /// [`Aab::from_size()`], but returns [`Err`] if the result would be inverted or
    /// contain NaN.
    ///
    /// ```
    /// use boundbox::math::Aab;
    ///
    /// assert!(Aab::checked_from_size([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).is_ok());
    /// assert!(Aab::checked_from_size([0.0, 0.0, 0.0], [1.0, -1.0, 1.0]).is_err());
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_size(
        location: impl Into<FreePoint>,
        size: impl Into<FreeVector>,
    ) -> Result<Self, BoundsError> {
        let location = location.into();
        let aab = Self {
            lower_bounds: location,
            upper_bounds: location + size.into(),
        };
        aab.validate()?;
        Ok(aab)
    }

    /// Checks whether the corners are in order on every axis and free of NaN.
    ///
    /// Every constructor and mutator of [`Aab`] keeps this true, except for the ones
    /// documented as being able to invert the box.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn validate(&self) -> Result<(), BoundsError> {
        let lower = self.lower_bounds;
        let upper = self.upper_bounds;
        if Axis::ALL
            .into_iter()
            .any(|axis| lower[axis].is_nan() || upper[axis].is_nan())
        {
            return Err(BoundsError(BoundsErrorKind::NotANumber { lower, upper }));
        }
        for axis in Axis::ALL {
            if lower[axis] > upper[axis] {
                return Err(BoundsError(BoundsErrorKind::Inverted {
                    axis,
                    lower,
                    upper,
                }));
            }
        }
        Ok(())
    }

    /// Returns whether [`Aab::validate()`] would succeed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Logs, at debug level, if an arithmetic operation left the box invalid.
    fn note_if_invalid(&self, operation: &str) {
        if let Err(error) = self.validate() {
            log::debug!("Aab::{operation}() produced an invalid box: {error}");
        }
    }

    // --- Corners ---

    /// The most negative corner of the box.
    #[inline]
    pub const fn min(&self) -> FreePoint {
        self.lower_bounds
    }

    /// The most positive corner of the box.
    #[inline]
    pub const fn max(&self) -> FreePoint {
        self.upper_bounds
    }

    /// Replaces the lower corner.
    ///
    /// On each axis where `min` is greater than the current upper corner, the upper
    /// corner is moved to `min` too, so the box becomes flat on that axis.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn set_min(&mut self, min: impl Into<FreePoint>) {
        (self.lower_bounds, self.upper_bounds) =
            set_corner(self.lower_bounds, self.upper_bounds, min.into(), Bound::Lower);
    }

    /// Replaces the upper corner.
    ///
    /// On each axis where `max` is less than the current lower corner, the lower corner
    /// is moved to `max` too, so the box becomes flat on that axis.
    ///
    /// ```
    /// use boundbox::math::{Aab, FreePoint};
    ///
    /// let mut aab = Aab::new([5.0, 5.0, 5.0], [10.0, 10.0, 10.0]);
    /// aab.set_max([1.0, 7.0, 12.0]);
    /// assert_eq!(aab.min(), FreePoint::new(1.0, 5.0, 5.0));
    /// assert_eq!(aab.max(), FreePoint::new(1.0, 7.0, 12.0));
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn set_max(&mut self, max: impl Into<FreePoint>) {
        (self.lower_bounds, self.upper_bounds) =
            set_corner(self.lower_bounds, self.upper_bounds, max.into(), Bound::Upper);
    }

    /// The lower corner; the same as [`Aab::min()`].
    #[inline]
    pub const fn location(&self) -> FreePoint {
        self.lower_bounds
    }

    /// Returns the coordinate of one face of the box: the `bound` corner's coordinate
    /// on `axis`.
    #[inline]
    pub fn edge(&self, axis: Axis, bound: Bound) -> FreeCoordinate {
        match bound {
            Bound::Lower => self.lower_bounds[axis],
            Bound::Upper => self.upper_bounds[axis],
        }
    }

    /// Moves one face of the box, following the rule of [`set_bound()`]: if the face
    /// would pass the opposite face, the opposite face moves with it.
    #[inline]
    pub fn set_edge(&mut self, axis: Axis, bound: Bound, value: FreeCoordinate) {
        (self.lower_bounds, self.upper_bounds) =
            set_bound(self.lower_bounds, self.upper_bounds, axis, value, bound);
    }

    /// Lower X coordinate.
    #[inline]
    pub fn left(&self) -> FreeCoordinate {
        self.lower_bounds.x
    }
    /// Lower Y coordinate.
    #[inline]
    pub fn top(&self) -> FreeCoordinate {
        self.lower_bounds.y
    }
    /// Lower Z coordinate.
    #[inline]
    pub fn front(&self) -> FreeCoordinate {
        self.lower_bounds.z
    }
    /// Upper X coordinate.
    #[inline]
    pub fn right(&self) -> FreeCoordinate {
        self.upper_bounds.x
    }
    /// Upper Y coordinate.
    #[inline]
    pub fn bottom(&self) -> FreeCoordinate {
        self.upper_bounds.y
    }
    /// Upper Z coordinate.
    #[inline]
    pub fn back(&self) -> FreeCoordinate {
        self.upper_bounds.z
    }

    /// Sets the lower X coordinate. See [`Aab::set_edge()`].
    #[inline]
    pub fn set_left(&mut self, value: FreeCoordinate) {
        self.set_edge(Axis::X, Bound::Lower, value);
    }
    /// Sets the lower Y coordinate. See [`Aab::set_edge()`].
    #[inline]
    pub fn set_top(&mut self, value: FreeCoordinate) {
        self.set_edge(Axis::Y, Bound::Lower, value);
    }
    /// Sets the lower Z coordinate. See [`Aab::set_edge()`].
    #[inline]
    pub fn set_front(&mut self, value: FreeCoordinate) {
        self.set_edge(Axis::Z, Bound::Lower, value);
    }
    /// Sets the upper X coordinate. See [`Aab::set_edge()`].
    #[inline]
    pub fn set_right(&mut self, value: FreeCoordinate) {
        self.set_edge(Axis::X, Bound::Upper, value);
    }
    /// Sets the upper Y coordinate. See [`Aab::set_edge()`].
    #[inline]
    pub fn set_bottom(&mut self, value: FreeCoordinate) {
        self.set_edge(Axis::Y, Bound::Upper, value);
    }
    /// Sets the upper Z coordinate. See [`Aab::set_edge()`].
    #[inline]
    pub fn set_back(&mut self, value: FreeCoordinate) {
        self.set_edge(Axis::Z, Bound::Upper, value);
    }

    /// Iterates over the eight corner points of the box.
    /// The ordering is deterministic but not currently declared stable.
    #[inline]
    pub fn corner_points(
        self,
    ) -> impl DoubleEndedIterator<Item = FreePoint> + ExactSizeIterator + FusedIterator {
        let l = self.lower_bounds;
        let u = self.upper_bounds;
        (0..8).map(move |i| {
            Point3D::new(
                if i & 1 == 0 { l.x } else { u.x },
                if i & 2 == 0 { l.y } else { u.y },
                if i & 4 == 0 { l.z } else { u.z },
            )
        })
    }

    // --- Size and center ---

    /// Size of the box in each axis; equivalent to `self.max() - self.min()`.
    ///
    /// Note that due to floating-point rounding, translating one corner point by the size
    /// does not necessarily exactly reach the opposite corner.
    #[inline]
    pub fn size(&self) -> FreeVector {
        self.upper_bounds - self.lower_bounds
    }

    /// Resizes the box by moving the upper corner, keeping the lower corner in place.
    ///
    /// A negative component inverts the box on that axis; it is not corrected.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn set_size(&mut self, size: impl Into<FreeVector>) {
        self.upper_bounds = self.lower_bounds + size.into();
        self.note_if_invalid("set_size");
    }

    /// Size of the box along one axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> FreeCoordinate {
        self.upper_bounds[axis] - self.lower_bounds[axis]
    }

    /// Resizes the box along one axis by moving the upper face.
    /// Like [`Aab::set_size()`], a negative value is not corrected.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn set_extent(&mut self, axis: Axis, value: FreeCoordinate) {
        self.upper_bounds[axis] = self.lower_bounds[axis] + value;
        self.note_if_invalid("set_extent");
    }

    /// Size along the X axis.
    #[inline]
    pub fn width(&self) -> FreeCoordinate {
        self.extent(Axis::X)
    }
    /// Size along the Y axis.
    #[inline]
    pub fn height(&self) -> FreeCoordinate {
        self.extent(Axis::Y)
    }
    /// Size along the Z axis.
    #[inline]
    pub fn depth(&self) -> FreeCoordinate {
        self.extent(Axis::Z)
    }
    /// Sets the size along the X axis. See [`Aab::set_extent()`].
    #[inline]
    pub fn set_width(&mut self, value: FreeCoordinate) {
        self.set_extent(Axis::X, value);
    }
    /// Sets the size along the Y axis. See [`Aab::set_extent()`].
    #[inline]
    pub fn set_height(&mut self, value: FreeCoordinate) {
        self.set_extent(Axis::Y, value);
    }
    /// Sets the size along the Z axis. See [`Aab::set_extent()`].
    #[inline]
    pub fn set_depth(&mut self, value: FreeCoordinate) {
        self.set_extent(Axis::Z, value);
    }

    /// The size of the box; the same as [`Aab::size()`].
    ///
    /// The difference from [`Aab::size()`] is in the setter:
    /// [`Aab::set_centered_size()`] keeps the center fixed rather than the lower corner.
    #[inline]
    pub fn centered_size(&self) -> FreeVector {
        self.size()
    }

    /// Resizes the box symmetrically about its current center.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn set_centered_size(&mut self, size: impl Into<FreeVector>) {
        let center = self.center();
        let half = size.into() * 0.5;
        self.lower_bounds = center - half;
        self.upper_bounds = center + half;
        self.note_if_invalid("set_centered_size");
    }

    /// Half of [`Aab::size()`]: the distance from the center to the upper corner.
    #[inline]
    pub fn half_size(&self) -> FreeVector {
        self.size() / 2.0
    }

    /// Resizes the box symmetrically about its current center so that its half size is
    /// `half_size`.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn set_half_size(&mut self, half_size: impl Into<FreeVector>) {
        self.set_centered_size(half_size.into() * 2.0);
    }

    /// The center of the enclosed volume.
    ///
    /// ```
    /// use boundbox::math::{Aab, FreePoint};
    ///
    /// let aab = Aab::new([1.0, 3.0, 5.0], [2.0, 4.0, 6.0]);
    /// assert_eq!(aab.center(), FreePoint::new(1.5, 3.5, 5.5));
    /// ```
    #[inline]
    pub fn center(&self) -> FreePoint {
        self.lower_bounds + self.half_size()
    }

    /// Moves the box, without resizing it, so that its center is `center`.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn set_center(&mut self, center: impl Into<FreePoint>) {
        let offset = center.into() - self.center();
        self.translate(offset);
    }

    /// Returns whether both corners are exactly at the origin.
    ///
    /// This is *not* a test for zero volume: a flat or zero-size box anywhere other than
    /// the origin is not empty. It is mainly useful for recognizing [`Aab::EMPTY`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    // --- Set operations ---

    /// Returns the box where `a` and `b` overlap, or [`Aab::EMPTY`] if there is no such
    /// box.
    ///
    /// Boxes which only touch on a face, edge or corner have a flat or zero-size
    /// intersection, which is returned as such.
    ///
    /// ```
    /// use boundbox::math::Aab;
    ///
    /// let a = Aab::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
    /// assert_eq!(
    ///     Aab::intersection(a, Aab::new([5.0, 5.0, 5.0], [15.0, 15.0, 15.0])),
    ///     Aab::new([5.0, 5.0, 5.0], [10.0, 10.0, 10.0]),
    /// );
    /// assert_eq!(
    ///     Aab::intersection(a, Aab::new([20.0, 0.0, 0.0], [30.0, 10.0, 10.0])),
    ///     Aab::EMPTY,
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn intersection(a: Aab, b: Aab) -> Aab {
        let lower = a.lower_bounds.max(b.lower_bounds);
        let upper = a.upper_bounds.min(b.upper_bounds);
        if Axis::ALL
            .into_iter()
            .all(|axis| upper[axis] >= lower[axis])
        {
            Aab::new(lower, upper)
        } else {
            Aab::EMPTY
        }
    }

    /// Replaces `self` with its intersection with `other`, as defined by
    /// [`Aab::intersection()`].
    #[inline]
    pub fn intersect(&mut self, other: Aab) {
        let result = Aab::intersection(other, *self);
        // Reassigned as location and size, so the upper corner is subject to the same
        // rounding as `set_size()`.
        self.lower_bounds = result.lower_bounds;
        self.upper_bounds = result.lower_bounds + result.size();
    }

    /// Returns the intersection of `self` and `other`, as defined by
    /// [`Aab::intersection()`].
    #[inline]
    #[must_use]
    pub fn intersected(self, other: Aab) -> Aab {
        Aab::intersection(other, self)
    }

    /// Returns whether the interiors of `self` and `other` overlap.
    ///
    /// Boxes which only touch on their surfaces do not intersect; see
    /// [`Aab::touches()`] for the inclusive version.
    #[inline]
    pub fn intersects_with(&self, other: Aab) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            other.lower_bounds[axis] < self.upper_bounds[axis]
                && self.lower_bounds[axis] < other.upper_bounds[axis]
        })
    }

    /// Returns whether `self` and `other` overlap or touch, including the boundary.
    ///
    /// ```
    /// use boundbox::math::Aab;
    ///
    /// let a = Aab::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
    /// let b = Aab::new([10.0, 10.0, 10.0], [20.0, 20.0, 20.0]);
    /// assert!(a.touches(b));
    /// assert!(!a.intersects_with(b));
    /// ```
    #[inline]
    pub fn touches(&self, other: Aab) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            other.lower_bounds[axis] <= self.upper_bounds[axis]
                && self.lower_bounds[axis] <= other.upper_bounds[axis]
        })
    }

    /// Returns the smallest box which contains both `a` and `b`.
    #[inline]
    #[must_use]
    pub fn union(a: Aab, b: Aab) -> Aab {
        Aab::new(
            a.lower_bounds.min(b.lower_bounds),
            a.upper_bounds.max(b.upper_bounds),
        )
    }

    // --- Point and box queries ---

    /// Returns whether `point` is strictly inside this box, not on its surface.
    ///
    /// This is [`Aab::contains_point()`] with [`Boundary::Exclusive`].
    #[inline]
    pub fn contains(&self, point: FreePoint) -> bool {
        self.contains_point(point, Boundary::Exclusive)
    }

    /// Returns whether `point` is inside this box, with points on the surface counted
    /// according to `boundary`.
    #[inline]
    pub fn contains_point(&self, point: FreePoint, boundary: Boundary) -> bool {
        let l = self.lower_bounds;
        let u = self.upper_bounds;
        match boundary {
            Boundary::Exclusive => Axis::ALL
                .into_iter()
                .all(|axis| l[axis] < point[axis] && point[axis] < u[axis]),
            Boundary::Inclusive => Axis::ALL
                .into_iter()
                .all(|axis| l[axis] <= point[axis] && point[axis] <= u[axis]),
        }
    }

    /// Returns whether this box and `other` overlap or touch.
    ///
    /// **Caution:** despite the name, this is not a subset test. It is true whenever
    /// the two boxes share at least one point, exactly like [`Aab::touches()`], and
    /// so a small box that merely grazes a large one is “contained” by it, and the
    /// relation is symmetric. Existing callers rely on this meaning, so it is kept.
    ///
    /// ```
    /// use boundbox::math::Aab;
    ///
    /// let big = Aab::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
    /// let straddling = Aab::new([8.0, 8.0, 8.0], [12.0, 12.0, 12.0]);
    /// assert!(big.contains_box(straddling));
    /// assert!(straddling.contains_box(big));
    /// ```
    #[inline]
    pub fn contains_box(&self, other: Aab) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            self.upper_bounds[axis] >= other.lower_bounds[axis]
                && self.lower_bounds[axis] <= other.upper_bounds[axis]
        })
    }

    /// Returns the Euclidean distance from `point` to the nearest point of this box.
    ///
    /// This is zero for every point inside the box or on its surface, no matter how far
    /// it is from the surface.
    ///
    /// ```
    /// use boundbox::math::{Aab, FreePoint};
    ///
    /// let aab = Aab::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
    /// assert_eq!(aab.distance_to_nearest_edge(FreePoint::new(15.0, 5.0, 5.0)), 5.0);
    /// assert_eq!(aab.distance_to_nearest_edge(FreePoint::new(13.0, 14.0, 5.0)), 5.0);
    /// assert_eq!(aab.distance_to_nearest_edge(FreePoint::new(5.0, 5.0, 5.0)), 0.0);
    /// ```
    #[inline]
    pub fn distance_to_nearest_edge(&self, point: FreePoint) -> FreeCoordinate {
        let mut outside: FreeVector = Vector3D::zero();
        for axis in Axis::ALL {
            let below = self.lower_bounds[axis] - point[axis];
            let above = point[axis] - self.upper_bounds[axis];
            // `f32::max` discards NaN operands; the distance must not.
            outside[axis] = if below.is_nan() || above.is_nan() {
                FreeCoordinate::NAN
            } else {
                below.max(above).max(0.0)
            };
        }
        outside.length()
    }

    /// Returns a random point within this box, using inclusive ranges
    /// (`min()[axis] ≤ random_point()[axis] ≤ max()[axis]`).
    ///
    /// Returns [`None`] if the box is not [valid](Aab::validate), or if its size on some
    /// axis is not a finite [`FreeCoordinate`] (infinite corners, or finite corners too
    /// far apart), since there is no uniform distribution to sample from.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn random_point(self, rng: &mut impl rand::Rng) -> Option<FreePoint> {
        let finite = Axis::ALL
            .into_iter()
            .all(|axis| self.extent(axis).is_finite());
        if !finite || !self.is_valid() {
            return None;
        }
        let l = self.lower_bounds;
        let u = self.upper_bounds;
        Some(FreePoint::new(
            rng.random_range(l.x..=u.x),
            rng.random_range(l.y..=u.y),
            rng.random_range(l.z..=u.z),
        ))
    }

    // --- Transformations ---

    /// Moves this box by `offset`.
    ///
    /// Note that due to rounding error, the result may not have exactly the same size.
    #[inline]
    pub fn translate(&mut self, offset: FreeVector) {
        self.lower_bounds += offset;
        self.upper_bounds += offset;
    }

    /// Returns a copy of this box moved by `offset`. See [`Aab::translate()`].
    #[inline]
    #[must_use]
    pub fn translated(mut self, offset: FreeVector) -> Self {
        self.translate(offset);
        self
    }

    /// Scales this box about `anchor`: each corner moves to
    /// `anchor + (corner - anchor) * scale`, componentwise.
    ///
    /// A negative component of `scale` inverts the box on that axis; it is not
    /// corrected.
    ///
    /// ```
    /// use boundbox::math::{Aab, FreePoint, FreeVector};
    ///
    /// let mut aab = Aab::new([1.0, 1.0, 1.0], [3.0, 3.0, 3.0]);
    /// aab.scale(FreeVector::new(2.0, 2.0, 1.0), FreePoint::new(1.0, 1.0, 1.0));
    /// assert_eq!(aab, Aab::new([1.0, 1.0, 1.0], [5.0, 5.0, 3.0]));
    /// ```
    #[inline]
    pub fn scale(&mut self, scale: FreeVector, anchor: FreePoint) {
        self.lower_bounds = anchor + (self.lower_bounds - anchor).component_mul(scale);
        self.upper_bounds = anchor + (self.upper_bounds - anchor).component_mul(scale);
        self.note_if_invalid("scale");
    }

    /// Returns a copy of this box scaled about `anchor`. See [`Aab::scale()`].
    #[inline]
    #[must_use]
    pub fn scaled(mut self, scale: FreeVector, anchor: FreePoint) -> Self {
        self.scale(scale, anchor);
        self
    }

    /// Enlarges this box just enough that it contains `point`, boundary inclusive.
    #[inline]
    pub fn inflate(&mut self, point: FreePoint) {
        self.lower_bounds = self.lower_bounds.min(point);
        self.upper_bounds = self.upper_bounds.max(point);
    }

    /// Returns a copy of this box enlarged to contain `point`. See [`Aab::inflate()`].
    #[inline]
    #[must_use]
    pub fn inflated(mut self, point: FreePoint) -> Self {
        self.inflate(point);
        self
    }

    // --- Quantization ---

    /// Converts to an [`IntAab`] by rounding each coordinate of each corner to the
    /// nearest integer, ties to even.
    ///
    /// Coordinates outside the range of [`IntCoordinate`](crate::math::IntCoordinate)
    /// saturate, and NaN becomes 0.
    ///
    /// ```
    /// use boundbox::math::{Aab, IntAab};
    ///
    /// assert_eq!(
    ///     Aab::new([0.4, 0.5, 1.5], [2.5, 2.6, 3.0]).round_to_int(),
    ///     IntAab::new([0, 0, 2], [2, 3, 3]),
    /// );
    /// ```
    #[inline]
    pub fn round_to_int(self) -> IntAab {
        IntAab::new(
            self.lower_bounds.map(round_to_int),
            self.upper_bounds.map(round_to_int),
        )
    }

    /// Converts to an [`IntAab`] by rounding the lower corner up, and separately
    /// rounding the size up; the upper corner is the sum of the two.
    ///
    /// This is not the same as rounding the upper corner up, when the fractional parts
    /// of the corners differ:
    ///
    /// ```
    /// use boundbox::math::{Aab, IntAab};
    ///
    /// // ceil(0.25) + ceil(1.75) = 3, while ceil(2.0) would be 2.
    /// let aab = Aab::new([0.25, 0.0, 0.0], [2.0, 1.0, 1.0]);
    /// assert_eq!(aab.ceil_to_int(), IntAab::new([1, 0, 0], [3, 1, 1]));
    /// ```
    ///
    /// Coordinates saturate at the range of [`IntCoordinate`](crate::math::IntCoordinate),
    /// including the sum.
    #[inline]
    pub fn ceil_to_int(self) -> IntAab {
        let lower = self.lower_bounds.map(ceil_to_int);
        let size = self.size().map(ceil_to_int);
        let mut upper: IntPoint = lower;
        for axis in Axis::ALL {
            upper[axis] = lower[axis].saturating_add(size[axis]);
        }
        IntAab::new(lower, upper)
    }

    /// Converts to an [`IntAab`] by rounding the lower corner down, and separately
    /// rounding the size down; the upper corner is the sum of the two.
    ///
    /// ```
    /// use boundbox::math::{Aab, IntAab};
    ///
    /// // floor(0.75) + floor(1.5) = 1, while floor(2.25) would be 2.
    /// let aab = Aab::new([0.75, 0.0, 0.0], [2.25, 1.0, 1.0]);
    /// assert_eq!(aab.floor_to_int(), IntAab::new([0, 0, 0], [1, 1, 1]));
    /// ```
    ///
    /// Coordinates saturate at the range of [`IntCoordinate`](crate::math::IntCoordinate),
    /// including the sum.
    #[inline]
    pub fn floor_to_int(self) -> IntAab {
        let lower = self.lower_bounds.map(floor_to_int);
        let size = self.size().map(floor_to_int);
        let mut upper: IntPoint = lower;
        for axis in Axis::ALL {
            upper[axis] = lower[axis].saturating_add(size[axis]);
        }
        IntAab::new(lower, upper)
    }
}

/// Hashes the exact coordinates, except that `-0.0` hashes the same as `0.0`,
/// since the two compare equal.
impl Hash for Aab {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        fn bits(c: FreeCoordinate) -> u64 {
            u64::from(if c == 0.0 { 0 } else { c.to_bits() })
        }
        for p in [self.lower_bounds, self.upper_bounds] {
            // Hashers work on 64-bit quantities, so pack two coordinates per input.
            (bits(p.x) | (bits(p.y) << 32)).hash(state);
            bits(p.z).hash(state);
        }
    }
}

impl fmt::Debug for Aab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Aab {
            lower_bounds: l,
            upper_bounds: u,
        } = *self;
        f.debug_tuple("Aab")
            .field(&(l.x..=u.x))
            .field(&(l.y..=u.y))
            .field(&(l.z..=u.z))
            .finish()
    }
}

/// Formats as `"(x, y, z) - (x, y, z)"`, lower corner first, with each coordinate in
/// its [`Display`](fmt::Display) format.
impl fmt::Display for Aab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Aab {
            lower_bounds: l,
            upper_bounds: u,
        } = *self;
        write!(
            f,
            "({}, {}, {}) - ({}, {}, {})",
            l.x, l.y, l.z, u.x, u.y, u.z
        )
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Aab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let a: [FreeCoordinate; 3] = u.arbitrary()?;
        let b: [FreeCoordinate; 3] = u.arbitrary()?;
        Ok(Aab::new(a, b))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[[FreeCoordinate; 3]; 2] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

/// Error when an [`Aab`] does not have its corners in order.
///
/// Returned by [`Aab::validate()`] and [`Aab::checked_from_size()`].
#[derive(Clone, Copy, Debug, displaydoc::Display, PartialEq)]
#[displaydoc("{0}")]
pub struct BoundsError(BoundsErrorKind);

impl BoundsError {
    /// The first axis on which the lower corner exceeds the upper corner, if that is
    /// what is wrong (rather than NaN).
    #[inline]
    pub fn axis(&self) -> Option<Axis> {
        match self.0 {
            BoundsErrorKind::Inverted { axis, .. } => Some(axis),
            BoundsErrorKind::NotANumber { .. } => None,
        }
    }
}

/// Error details for [`BoundsError`].
#[derive(Clone, Copy, Debug, PartialEq)]
enum BoundsErrorKind {
    Inverted {
        axis: Axis,
        lower: FreePoint,
        upper: FreePoint,
    },
    NotANumber {
        lower: FreePoint,
        upper: FreePoint,
    },
}

impl fmt::Display for BoundsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoundsErrorKind::Inverted { axis, lower, upper } => {
                let (lower_face, upper_face) = axis.face_names();
                write!(
                    f,
                    "Aab's lower bounds {} exceed upper bounds {} on the {axis:x} axis \
                        ({lower_face} > {upper_face})",
                    lower.refmt(&ConciseDebug),
                    upper.refmt(&ConciseDebug),
                )
            }
            BoundsErrorKind::NotANumber { lower, upper } => write!(
                f,
                "Aab's bounds {} and {} contain NaN",
                lower.refmt(&ConciseDebug),
                upper.refmt(&ConciseDebug),
            ),
        }
    }
}

impl core::error::Error for BoundsError {}
