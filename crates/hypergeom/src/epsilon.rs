//! Configurable tolerance for floating-point equality.
//!
//! An [`Epsilon`] maps a pair of candidate values to the tolerance used to
//! compare them. Two values are equal if they are identical (which also
//! covers infinities of the same sign) or if they differ by less than the
//! larger of [`MIN_NORMAL_GAP`] and the policy's tolerance.

use std::fmt;

use crate::Float;

/// Gap between the smallest positive normal float and its successor.
///
/// Values separated by less than this are always equal, regardless of policy.
pub const MIN_NORMAL_GAP: Float = Float::MIN_POSITIVE * Float::EPSILON;

/// Default comparison policy: [`Epsilon::Normal`] with a factor of 128.
pub const DEFAULT_EPSILON: Epsilon = Epsilon::normal(128.0);

/// Policy deciding whether two floats are close enough to be equal.
#[derive(Copy, Clone)]
pub enum Epsilon {
    /// Fixed tolerance, independent of the operands.
    Absolute(Float),
    /// Tolerance `t / (|a| + |b|)`.
    Relative(Float),
    /// Tolerance of `i` gaps between `a` and its neighbor towards `b`,
    /// multiplied by the combined magnitude `|a| + |b|` (at least 1).
    ///
    /// The gap grows with the magnitude of `a`, so this stays meaningful both
    /// near zero and at very large magnitudes.
    Normal(Float),
    /// Arbitrary tolerance function.
    Custom(fn(Float, Float) -> Float),
}

impl Default for Epsilon {
    fn default() -> Self {
        DEFAULT_EPSILON
    }
}

impl fmt::Debug for Epsilon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(e) => f.debug_tuple("Absolute").field(e).finish(),
            Self::Relative(t) => f.debug_tuple("Relative").field(t).finish(),
            Self::Normal(i) => f.debug_tuple("Normal").field(i).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").finish_non_exhaustive(),
        }
    }
}

impl Epsilon {
    /// Constructs an epsilon from an arbitrary tolerance function.
    pub const fn new(policy: fn(Float, Float) -> Float) -> Self {
        Self::Custom(policy)
    }
    /// Constructs an epsilon with a fixed tolerance.
    pub const fn absolute(e: Float) -> Self {
        Self::Absolute(e)
    }
    /// Constructs an epsilon whose tolerance is `t` divided by the combined
    /// magnitude of the operands.
    pub const fn relative(t: Float) -> Self {
        Self::Relative(t)
    }
    /// Constructs an epsilon whose tolerance is `i` representable gaps,
    /// scaled by the combined magnitude of the operands.
    pub const fn normal(i: Float) -> Self {
        Self::Normal(i)
    }

    /// Returns the tolerance that this policy computes for `a` and `b`,
    /// without applying [`MIN_NORMAL_GAP`].
    pub fn tolerance(&self, a: Float, b: Float) -> Float {
        let magnitude = Float::min(a.abs() + b.abs(), Float::MAX);
        match *self {
            Self::Absolute(e) => e,
            Self::Relative(t) => t / magnitude,
            Self::Normal(i) => i * (a - next_toward(a, b)).abs() * magnitude.max(1.0),
            Self::Custom(f) => f(a, b),
        }
    }

    /// Returns whether `a` and `b` should be considered equal.
    ///
    /// NaN inputs are unsupported.
    pub fn within(&self, a: Float, b: Float) -> bool {
        // native equality also handles infinities of the same sign, whose
        // difference is NaN
        a == b || (a - b).abs() < Float::max(MIN_NORMAL_GAP, self.tolerance(a, b))
    }
}

/// Returns the representable float adjacent to `a` in the direction of `b`,
/// or `b` if they are equal.
pub fn next_toward(a: Float, b: Float) -> Float {
    if a < b {
        a.next_up()
    } else if a > b {
        a.next_down()
    } else {
        b
    }
}
