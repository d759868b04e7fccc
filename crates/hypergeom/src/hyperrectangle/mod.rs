//! Axis-aligned boxes in N-dimensional space.
//!
//! A [`Hyperrectangle`] is the closed interval product `[min₀, max₀] × … ×
//! [minₙ, maxₙ]`. Its allocating operations copy the receiver into a fresh
//! rectangle and delegate to [`HyperrectangleMut`], which holds the actual
//! algorithms and can also operate on caller-supplied buffers.

use std::cmp::Ordering::{Equal, Less};
use std::fmt;

use approx::AbsDiffEq;
use itertools::izip;

use crate::ndim::assert_same_ndim;
use crate::{DEFAULT_EPSILON, Epsilon, Float, GeomError, Ndim, Vector, VectorRef};

mod mutable;

pub use mutable::HyperrectangleMut;

/// Returns an error unless `min` and `max` describe a valid box.
fn validate_bounds(min: &[Float], max: &[Float]) -> Result<(), GeomError> {
    crate::ndim::ensure_same_ndim(min, max)?;
    // NaN bounds are unordered and therefore invalid
    let is_ordered = |lo: &Float, hi: &Float| matches!(lo.partial_cmp(hi), Some(Less | Equal));
    match izip!(0.., min, max).find(|&(_, lo, hi)| !is_ordered(lo, hi)) {
        Some((axis, &min, &max)) => Err(GeomError::InvalidInterval { axis, min, max }),
        None => Ok(()),
    }
}

/// Axis-aligned N-dimensional box.
///
/// Boxes may be degenerate along any number of axes, in which case they have
/// zero measure along those axes.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[Vector; 2]", into = "[Vector; 2]")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperrectangle {
    /// Lower corner.
    min: Vector,
    /// Upper corner.
    max: Vector,
}

impl Ndim for Hyperrectangle {
    fn ndim(&self) -> usize {
        self.min.ndim()
    }
}

impl fmt::Display for Hyperrectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}

impl TryFrom<[Vector; 2]> for Hyperrectangle {
    type Error = GeomError;

    fn try_from([min, max]: [Vector; 2]) -> Result<Self, Self::Error> {
        Self::try_new(min, max)
    }
}
impl From<Hyperrectangle> for [Vector; 2] {
    fn from(value: Hyperrectangle) -> Self {
        [value.min, value.max]
    }
}

impl AbsDiffEq for Hyperrectangle {
    type Epsilon = Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.ndim() == other.ndim() && self.within_epsilon(other, epsilon)
    }
}

impl Hyperrectangle {
    /// Constructs a box from its lower and upper corners.
    ///
    /// # Panics
    ///
    /// Panics if `min` and `max` have different numbers of dimensions, or if
    /// `min` is greater than `max` along any axis.
    #[track_caller]
    pub fn new(min: impl Into<Vector>, max: impl Into<Vector>) -> Self {
        match Self::try_new(min, max) {
            Ok(ret) => ret,
            Err(e) => panic!("{e}"),
        }
    }
    /// Constructs a box from its lower and upper corners, or returns an error
    /// if they do not describe a valid box.
    pub fn try_new(min: impl Into<Vector>, max: impl Into<Vector>) -> Result<Self, GeomError> {
        let min = min.into();
        let max = max.into();
        validate_bounds(&min.0, &max.0)?;
        Ok(Self { min, max })
    }

    /// Returns the lower corner.
    pub fn min(&self) -> &Vector {
        &self.min
    }
    /// Returns the upper corner.
    pub fn max(&self) -> &Vector {
        &self.max
    }
    /// Returns the length of each edge.
    pub fn edge_lengths(&self) -> Vector {
        &self.max - &self.min
    }

    /// Returns a mutable view of the box, for in-place operations.
    pub fn view_mut(&mut self) -> HyperrectangleMut<'_> {
        HyperrectangleMut::from_valid(&mut self.min.0, &mut self.max.0)
    }

    /// Returns whether `point` lies in the box, including its boundary.
    #[track_caller]
    pub fn contains_point(&self, point: impl VectorRef) -> bool {
        assert_same_ndim(self, &point);
        izip!(self.min.iter(), self.max.iter(), point.iter())
            .all(|(lo, hi, x)| lo <= x && x <= hi)
    }

    /// Returns the intersection of two boxes, or `None` if they do not
    /// overlap.
    ///
    /// Boxes that only touch along a boundary intersect in a degenerate box.
    #[track_caller]
    #[must_use]
    pub fn intersect(&self, other: &Hyperrectangle) -> Option<Hyperrectangle> {
        let mut ret = self.clone();
        let is_nonempty = ret.view_mut().intersect(other);
        is_nonempty.then_some(ret)
    }
    /// Returns the smallest box containing both boxes.
    #[track_caller]
    #[must_use]
    pub fn union(&self, other: &Hyperrectangle) -> Hyperrectangle {
        let mut ret = self.clone();
        ret.view_mut().union(other);
        ret
    }
    /// Returns a copy of the box with every edge length multiplied by
    /// `factor`, keeping the lower corner fixed.
    ///
    /// This scales each edge, not the volume. To scale the volume by `c`,
    /// pass `c.powf(1.0 / ndim)`.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is negative, infinite, or NaN.
    #[track_caller]
    #[must_use]
    pub fn scale(&self, factor: Float) -> Hyperrectangle {
        let mut ret = self.clone();
        ret.view_mut().scale(factor);
        ret
    }

    /// Returns whether `other` lies entirely within the box, including its
    /// boundary.
    #[track_caller]
    pub fn contains(&self, other: &Hyperrectangle) -> bool {
        assert_same_ndim(self, other);
        izip!(
            self.min.iter(),
            self.max.iter(),
            other.min.iter(),
            other.max.iter(),
        )
        .all(|(r_min, r_max, s_min, s_max)| r_min <= s_min && s_max <= r_max)
    }
    /// Returns whether the two boxes share no points.
    ///
    /// Boxes that touch along a boundary are not disjoint.
    #[track_caller]
    pub fn is_disjoint(&self, other: &Hyperrectangle) -> bool {
        assert_same_ndim(self, other);
        // A single separating axis suffices for axis-aligned boxes.
        izip!(
            self.min.iter(),
            self.max.iter(),
            other.min.iter(),
            other.max.iter(),
        )
        .any(|(r_min, r_max, s_min, s_max)| r_max < s_min || s_max < r_min)
    }

    /// Returns the N-dimensional volume of the box.
    ///
    /// A zero-dimensional box has volume 1.
    pub fn volume(&self) -> Float {
        self.edge_lengths().iter().product()
    }
    /// Returns the total (N-1)-dimensional measure of the boundary of the
    /// box.
    ///
    /// In 2D this is the perimeter and in 3D this is the surface area. Boxes
    /// with fewer than 2 dimensions have no surface area.
    ///
    /// This is the sum over axes of twice the product of the other edge
    /// lengths. For boxes with every edge nonzero it equals `Σ 2V/dᵢ`, but a
    /// degenerate box keeps the area of its remaining faces: a flat 2×3 box
    /// in 3D has surface area 12, not 0.
    pub fn surface_area(&self) -> Float {
        let d = self.edge_lengths();
        let n = d.ndim();
        if n < 2 {
            return 0.0;
        }

        // Each face perpendicular to axis `i` has measure equal to the
        // product of every other edge length, which is `V / d[i]` when `d[i]`
        // is nonzero. Prefix and suffix products avoid that division.
        let mut suffix = vec![1.0; n + 1];
        for (i, d_i) in d.iter().enumerate().rev() {
            suffix[i] = suffix[i + 1] * d_i;
        }
        let mut prefix = 1.0;
        let mut total = 0.0;
        for (d_i, rest) in std::iter::zip(d.iter(), &suffix[1..]) {
            total += prefix * rest;
            prefix *= d_i;
        }
        2.0 * total
    }

    /// Returns whether both corners of the boxes are equal according to
    /// [`DEFAULT_EPSILON`].
    #[track_caller]
    pub fn within(&self, other: &Hyperrectangle) -> bool {
        self.within_epsilon(other, DEFAULT_EPSILON)
    }
    /// Returns whether both corners of the boxes are equal according to
    /// `epsilon`.
    #[track_caller]
    pub fn within_epsilon(&self, other: &Hyperrectangle, epsilon: Epsilon) -> bool {
        self.min.within_epsilon(&other.min, epsilon)
            && self.max.within_epsilon(&other.max, epsilon)
    }
}
