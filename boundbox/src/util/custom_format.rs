#![allow(clippy::missing_inline_in_public_items)]

use core::fmt;

use manyfmt::{Fmt, Refmt as _};

use crate::math::Aab;

/// [`manyfmt::Fmt`] format for points, vectors and boxes, shorter than [`fmt::Debug`].
///
/// Each coordinate is written with an explicit sign and three decimal places, so
/// columns line up and small errors stay visible. Output is always on one line. This is
/// the format used for coordinates in error messages.
///
/// ```
/// use boundbox::math::FreePoint;
/// use boundbox::util::ConciseDebug;
/// use manyfmt::Refmt as _;
///
/// let p = FreePoint::new(1.0, -0.25, 1.0 / 3.0);
/// assert_eq!(format!("{}", p.refmt(&ConciseDebug)), "(+1.000, -0.250, +0.333)");
/// ```
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConciseDebug;

fn write_components<T: fmt::Debug>(
    fmt: &mut fmt::Formatter<'_>,
    [x, y, z]: [&T; 3],
) -> fmt::Result {
    write!(fmt, "({x:+.3?}, {y:+.3?}, {z:+.3?})")
}

impl<T: fmt::Debug, U> Fmt<ConciseDebug> for euclid::Point3D<T, U> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write_components(fmt, [&self.x, &self.y, &self.z])
    }
}

impl<T: fmt::Debug, U> Fmt<ConciseDebug> for euclid::Vector3D<T, U> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write_components(fmt, [&self.x, &self.y, &self.z])
    }
}

/// Writes the lower and upper corners joined by `..`.
impl Fmt<ConciseDebug> for Aab {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        let lower = self.min();
        let upper = self.max();
        write!(fmt, "{}..{}", lower.refmt(fopt), upper.refmt(fopt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FreeVector;

    #[test]
    fn vector() {
        let v = FreeVector::new(0.0, 10.0, -2.5);
        assert_eq!(
            format!("{}", v.refmt(&ConciseDebug)),
            "(+0.000, +10.000, -2.500)"
        );
    }

    #[test]
    fn aab() {
        let aab = Aab::new([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]);
        assert_eq!(
            format!("{}", aab.refmt(&ConciseDebug)),
            "(+0.000, +0.000, +0.000)..(+1.000, +2.000, +3.000)"
        );
    }

    #[test]
    fn inverted_aab_is_written_as_is() {
        let aab = Aab::from_size([1.0, 1.0, 1.0], [-1.0, 0.5, 0.0]);
        assert_eq!(
            format!("{}", aab.refmt(&ConciseDebug)),
            "(+1.000, +1.000, +1.000)..(+0.000, +1.500, +1.000)"
        );
    }
}
