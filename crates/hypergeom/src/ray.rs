//! N-dimensional rays.

use std::fmt;

use itertools::izip;

use crate::ndim::assert_same_ndim;
use crate::{Float, Hyperrectangle, Ndim, Vector, VectorRef};

/// Half-line starting at an origin and extending along a unit direction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    origin: Vector,
    direction: Vector,
}

impl Ndim for Ray {
    fn ndim(&self) -> usize {
        self.origin.ndim()
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + t{}", self.origin, self.direction)
    }
}

impl Ray {
    /// Constructs a ray from its origin and direction, normalizing the
    /// direction. Returns `None` if the direction is zero.
    ///
    /// # Panics
    ///
    /// Panics if `origin` and `direction` have different numbers of
    /// dimensions.
    #[track_caller]
    pub fn new(origin: impl Into<Vector>, direction: impl Into<Vector>) -> Option<Self> {
        let origin = origin.into();
        let direction = direction.into();
        assert_same_ndim(&origin, &direction);
        Some(Self {
            origin,
            direction: direction.normalize()?,
        })
    }

    /// Returns the starting point of the ray.
    pub fn origin(&self) -> &Vector {
        &self.origin
    }
    /// Returns the unit direction of the ray.
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
    /// Returns the point at parameter `t` along the ray.
    pub fn point_at(&self, t: Float) -> Vector {
        &self.origin + &self.direction * t
    }

    /// Returns whether the ray passes through the box, including its
    /// boundary.
    #[track_caller]
    pub fn intersects_hyperrectangle(&self, rect: &Hyperrectangle) -> bool {
        assert_same_ndim(self, rect);

        // Clip the parameter interval against each slab `min[i] <= x[i] <=
        // max[i]` in turn.
        let mut t_enter = Float::NEG_INFINITY;
        let mut t_exit = Float::INFINITY;
        for (p, d, lo, hi) in izip!(
            self.origin.iter(),
            self.direction.iter(),
            rect.min().iter(),
            rect.max().iter(),
        ) {
            if d == 0.0 {
                // parallel to the slab
                if p < lo || hi < p {
                    return false;
                }
                continue;
            }
            let t0 = (lo - p) / d;
            let t1 = (hi - p) / d;
            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));
        }
        t_enter <= t_exit && t_exit >= 0.0
    }
}
