//! N-dimensional balls.

use std::fmt;

use approx::AbsDiffEq;

use crate::approx_cmp::approx_lt_eq;
use crate::ndim::assert_same_ndim;
use crate::{DEFAULT_EPSILON, Epsilon, Float, Ndim, Vector, VectorRef};

/// Closed N-dimensional ball, described by its center and radius.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Hypersphere {
    center: Vector,
    radius: Float,
}

impl Ndim for Hypersphere {
    fn ndim(&self) -> usize {
        self.center.ndim()
    }
}

impl fmt::Display for Hypersphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ball({}, r={})", self.center, self.radius)
    }
}

impl AbsDiffEq for Hypersphere {
    type Epsilon = Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.ndim() == other.ndim() && self.within_epsilon(other, epsilon)
    }
}

impl Hypersphere {
    /// Constructs a ball from its center and radius.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or NaN.
    #[track_caller]
    pub fn new(center: impl Into<Vector>, radius: Float) -> Self {
        assert!(radius >= 0.0, "invalid radius {radius}");
        Self {
            center: center.into(),
            radius,
        }
    }

    /// Returns the center of the ball.
    pub fn center(&self) -> &Vector {
        &self.center
    }
    /// Returns the radius of the ball.
    pub fn radius(&self) -> Float {
        self.radius
    }

    /// Returns whether `point` lies in the ball, including points within
    /// [`DEFAULT_EPSILON`] of its boundary.
    #[track_caller]
    pub fn contains_point(&self, point: impl VectorRef) -> bool {
        assert_same_ndim(self, &point);
        // compare squared distances to skip the square root
        let dist2 = (&self.center - point).mag2();
        approx_lt_eq(dist2, self.radius * self.radius)
    }

    /// Returns whether the balls have the same center and radius according to
    /// [`DEFAULT_EPSILON`].
    #[track_caller]
    pub fn within(&self, other: &Hypersphere) -> bool {
        self.within_epsilon(other, DEFAULT_EPSILON)
    }
    /// Returns whether the balls have the same center and radius according to
    /// `epsilon`.
    #[track_caller]
    pub fn within_epsilon(&self, other: &Hypersphere, epsilon: Epsilon) -> bool {
        self.center.within_epsilon(&other.center, epsilon)
            && epsilon.within(self.radius, other.radius)
    }
}
