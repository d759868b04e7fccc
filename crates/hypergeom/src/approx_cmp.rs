//! Approximate comparison functions that automatically use
//! [`DEFAULT_EPSILON`].

use std::cmp::Ordering;

pub use approx::AbsDiffEq;

use crate::{DEFAULT_EPSILON, Float};

/// Compares two numbers, but considers them equal if [`DEFAULT_EPSILON`]
/// does.
///
/// Infinities of the same sign are equal.
pub fn approx_eq(a: Float, b: Float) -> bool {
    DEFAULT_EPSILON.within(a, b)
}

/// Compares two numbers, but considers them equal if [`DEFAULT_EPSILON`]
/// does.
pub fn approx_cmp(a: Float, b: Float) -> Ordering {
    if approx_eq(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
/// Returns whether one number is less than another and not approximately
/// equal to it.
pub fn approx_lt(a: Float, b: Float) -> bool {
    a < b && !approx_eq(a, b)
}
/// Returns whether one number is greater than another and not approximately
/// equal to it.
pub fn approx_gt(a: Float, b: Float) -> bool {
    a > b && !approx_eq(a, b)
}

/// Returns whether one number is less than or approximately equal to another.
pub fn approx_lt_eq(a: Float, b: Float) -> bool {
    a < b || approx_eq(a, b)
}
/// Returns whether one number is greater than or approximately equal to
/// another.
pub fn approx_gt_eq(a: Float, b: Float) -> bool {
    a > b || approx_eq(a, b)
}
