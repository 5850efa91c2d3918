//! Axis-aligned bounding boxes in three dimensions.
//!
//! The central type is [`math::Aab`], a box defined by a lower and an upper corner
//! point, whose corner and edge setters keep the corners in order. [`math::IntAab`]
//! is its integer-coordinate counterpart, produced by one of the three quantization
//! operations on [`math::Aab`].
//!
//! Vector arithmetic is provided by [`euclid`]; coordinates are [`f32`].
//!
//! ```
//! use boundbox::math::{Aab, FreePoint};
//!
//! let a = Aab::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
//! let b = Aab::new([5.0, 5.0, 5.0], [15.0, 15.0, 15.0]);
//! assert_eq!(Aab::intersection(a, b), Aab::new([5.0, 5.0, 5.0], [10.0, 10.0, 10.0]));
//! assert_eq!(a.distance_to_nearest_edge(FreePoint::new(15.0, 5.0, 5.0)), 5.0);
//! ```
//!
//! # Package features
//!
//! * `std`: links the standard library. Without it, this crate is `no_std` and needs no allocator.
//! * `arbitrary`: implements `arbitrary::Arbitrary` for the geometric types, for fuzzing.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

pub mod math;

pub mod util;

// reexport for convenience of our callers and tests
#[doc(hidden)]
pub use euclid;
