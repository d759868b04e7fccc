//! In-place box operations over borrowed storage.

use itertools::izip;

use super::{Hyperrectangle, validate_bounds};
use crate::ndim::assert_same_ndim;
use crate::{Float, GeomError, Ndim, Vector, VectorRef};

/// Mutable view of an axis-aligned N-dimensional box.
///
/// Operations write their result into the borrowed corners instead of
/// allocating, and always leave the box valid.
#[derive(Debug, PartialEq)]
pub struct HyperrectangleMut<'a> {
    min: &'a mut [Float],
    max: &'a mut [Float],
}

impl Ndim for HyperrectangleMut<'_> {
    fn ndim(&self) -> usize {
        self.min.len()
    }
}

impl<'a> HyperrectangleMut<'a> {
    /// Constructs a mutable view of the box with corners stored in `min` and
    /// `max`.
    ///
    /// # Panics
    ///
    /// Panics if `min` and `max` have different lengths, or if `min` is
    /// greater than `max` along any axis.
    #[track_caller]
    pub fn new(min: &'a mut [Float], max: &'a mut [Float]) -> Self {
        match Self::try_new(min, max) {
            Ok(ret) => ret,
            Err(e) => panic!("{e}"),
        }
    }
    /// Constructs a mutable view of the box with corners stored in `min` and
    /// `max`, or returns an error if they do not describe a valid box.
    pub fn try_new(min: &'a mut [Float], max: &'a mut [Float]) -> Result<Self, GeomError> {
        validate_bounds(min, max)?;
        Ok(Self::from_valid(min, max))
    }
    pub(super) fn from_valid(min: &'a mut [Float], max: &'a mut [Float]) -> Self {
        Self { min, max }
    }

    /// Returns the lower corner.
    pub fn min(&self) -> &[Float] {
        &*self.min
    }
    /// Returns the upper corner.
    pub fn max(&self) -> &[Float] {
        &*self.max
    }
    /// Returns an owned copy of the box.
    pub fn to_hyperrectangle(&self) -> Hyperrectangle {
        Hyperrectangle {
            min: Vector::new(self.min()),
            max: Vector::new(self.max()),
        }
    }

    /// Overwrites the box with `src`.
    #[track_caller]
    pub fn copy_from(&mut self, src: &Hyperrectangle) {
        assert_same_ndim(&*self, src);
        self.min.copy_from_slice(src.min.as_slice());
        self.max.copy_from_slice(src.max.as_slice());
    }
    /// Collapses the box to the origin.
    pub fn zero(&mut self) {
        self.min.fill(0.0);
        self.max.fill(0.0);
    }

    /// Shrinks the box to its intersection with `other` and returns `true`,
    /// or returns `false` if the boxes do not overlap.
    ///
    /// Every axis is checked before any is written, so the box is left
    /// unchanged when this returns `false`.
    #[track_caller]
    pub fn intersect(&mut self, other: &Hyperrectangle) -> bool {
        assert_same_ndim(&*self, other);

        let overlaps = izip!(
            &*self.min,
            &*self.max,
            other.min.iter(),
            other.max.iter(),
        )
        .all(|(&r_min, &r_max, s_min, s_max)| r_min.max(s_min) <= r_max.min(s_max));
        if !overlaps {
            log::trace!("intersection with {other} is empty");
            return false;
        }

        for (r_min, s_min) in std::iter::zip(&mut *self.min, other.min.iter()) {
            *r_min = r_min.max(s_min);
        }
        for (r_max, s_max) in std::iter::zip(&mut *self.max, other.max.iter()) {
            *r_max = r_max.min(s_max);
        }
        true
    }
    /// Grows the box to the smallest box containing both it and `other`.
    #[track_caller]
    pub fn union(&mut self, other: &Hyperrectangle) {
        assert_same_ndim(&*self, other);
        for (r_min, s_min) in std::iter::zip(&mut *self.min, other.min.iter()) {
            *r_min = r_min.min(s_min);
        }
        for (r_max, s_max) in std::iter::zip(&mut *self.max, other.max.iter()) {
            *r_max = r_max.max(s_max);
        }
    }
    /// Multiplies every edge length by `factor`, keeping the lower corner
    /// fixed.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is negative, infinite, or NaN.
    #[track_caller]
    pub fn scale(&mut self, factor: Float) {
        // an infinite factor turns degenerate axes into `0 * inf = NaN`
        assert!(
            factor.is_finite() && factor >= 0.0,
            "invalid scale factor {factor}",
        );
        for (&mut r_min, r_max) in std::iter::zip(&mut *self.min, &mut *self.max) {
            *r_max = r_min + (*r_max - r_min) * factor;
        }
    }
}
