//! Numeric types used for coordinates and related quantities.

use euclid::{Point3D, Size3D, Vector3D};

/// Unit-of-measure marker for the [`euclid`] types used by this crate.
///
/// All boxes live in one coordinate space; this type exists only so that our points
/// and vectors do not mix with [`euclid::UnknownUnit`] values by accident.
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Space {}

/// Coordinates of an [`Aab`](crate::math::Aab).
pub type FreeCoordinate = f32;

/// Positions in continuous space, such as the corners of an [`Aab`](crate::math::Aab).
pub type FreePoint = Point3D<FreeCoordinate, Space>;

/// Displacements, sizes and per-axis factors in continuous space.
pub type FreeVector = Vector3D<FreeCoordinate, Space>;

/// Coordinates of an [`IntAab`](crate::math::IntAab).
pub type IntCoordinate = i32;

/// Positions locked to integer coordinates, such as the corners of an
/// [`IntAab`](crate::math::IntAab).
pub type IntPoint = Point3D<IntCoordinate, Space>;

/// Numeric type in an [`IntSize`].
pub type IntSizeCoord = u32;

/// Sizes of integer-cornered boxes. Unsigned, so that the size of any valid
/// [`IntAab`](crate::math::IntAab) is representable.
pub type IntSize = Size3D<IntSizeCoord, Space>;
