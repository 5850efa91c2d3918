//! Geometric types and the functions that operate on them.

mod aab;
pub use aab::*;
mod axis;
pub use axis::*;
mod coord;
pub use coord::*;
mod int_aab;
pub use int_aab::*;
mod invariant;
pub use invariant::*;
mod quantize;

/// Sort exactly two items; swap them if `a > b`.
#[inline]
#[doc(hidden)]
pub fn sort_two<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        core::mem::swap(a, b);
    }
}
