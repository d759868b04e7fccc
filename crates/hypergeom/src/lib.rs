//! N-dimensional vectors, epsilon-tolerant float comparison, and
//! axis-aligned hyperrectangles.
//!
//! Every binary operation requires its operands to have the same number of
//! dimensions and panics otherwise. Most types come in two flavors: an owning
//! value type whose operations allocate a fresh result, and a `*Mut` view over
//! borrowed storage whose operations write in place.

pub use {approx, smallvec};

#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Index of the first axis.
pub const X: usize = 0;
/// Index of the second axis.
pub const Y: usize = 1;
/// Index of the third axis.
pub const Z: usize = 2;
/// Index of the fourth axis.
pub const W: usize = 3;

/// Names for the axes that have named constants.
pub const AXIS_NAMES: &str = "XYZW";

/// Returns the axis index for a character, ignoring case.
pub fn axis_from_char(c: char) -> Option<usize> {
    AXIS_NAMES.find(c.to_ascii_uppercase())
}

/// Asserts that both arguments are approximately equal using
/// [`DEFAULT_EPSILON`].
///
/// Works on any type implementing [`approx::AbsDiffEq`] with
/// [`Epsilon`] as its epsilon type, such as [`Vector`] and
/// [`Hyperrectangle`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::DEFAULT_EPSILON)
    };
}

#[macro_use]
mod vector;

pub mod approx_cmp;
pub mod epsilon;
pub mod error;
pub mod hyperrectangle;
pub mod hypersphere;
pub mod ndim;
pub mod ray;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::epsilon::{DEFAULT_EPSILON, Epsilon, MIN_NORMAL_GAP};
    pub use crate::error::GeomError;
    pub use crate::hyperrectangle::{Hyperrectangle, HyperrectangleMut};
    pub use crate::hypersphere::Hypersphere;
    pub use crate::ndim::Ndim;
    pub use crate::ray::Ray;
    pub use crate::vector::*;
    pub use crate::{AXIS_NAMES, Float, W, X, Y, Z, axis_from_char, vector};
}
pub use prelude::*;
