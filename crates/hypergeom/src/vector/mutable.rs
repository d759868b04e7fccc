//! In-place vector operations over borrowed storage.

use crate::ndim::assert_same_ndim;
use crate::vector::check_axis;
use crate::{Float, Ndim, VectorRef};

/// Mutable view of an N-dimensional vector.
///
/// The view never reallocates its storage, so it can be used to reuse a
/// scratch buffer across many operations. Binary operations panic if the
/// operands have different numbers of dimensions.
#[derive(Debug, PartialEq)]
pub struct VectorMut<'a>(&'a mut [Float]);

impl Ndim for VectorMut<'_> {
    /// Returns the number of components in the vector.
    fn ndim(&self) -> usize {
        self.0.len()
    }
}

impl<'a> VectorMut<'a> {
    /// Constructs a mutable view of `storage`.
    pub fn new(storage: &'a mut [Float]) -> Self {
        Self(storage)
    }

    /// Returns the components of the vector.
    pub fn as_slice(&self) -> &[Float] {
        &*self.0
    }
    /// Returns the components of the vector mutably.
    pub fn as_mut_slice(&mut self) -> &mut [Float] {
        &mut *self.0
    }
    /// Returns a shorter-lived view of the same storage.
    pub fn reborrow(&mut self) -> VectorMut<'_> {
        VectorMut(&mut *self.0)
    }

    /// Sets a component of the vector.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is out of range.
    #[track_caller]
    pub fn set(&mut self, axis: usize, value: Float) {
        check_axis(self.ndim(), axis);
        self.0[axis] = value;
    }

    /// Overwrites the vector with `src`.
    #[track_caller]
    pub fn copy_from(&mut self, src: impl VectorRef) {
        assert_same_ndim(&*self, &src);
        self.0.copy_from_slice(src.as_slice());
    }
    /// Sets every component to zero.
    pub fn zero(&mut self) {
        self.0.fill(0.0);
    }

    /// Adds `rhs` to the vector.
    #[track_caller]
    pub fn add(&mut self, rhs: impl VectorRef) {
        assert_same_ndim(&*self, &rhs);
        for (l, r) in std::iter::zip(self.0.iter_mut(), rhs.iter()) {
            *l += r;
        }
    }
    /// Subtracts `rhs` from the vector.
    #[track_caller]
    pub fn sub(&mut self, rhs: impl VectorRef) {
        assert_same_ndim(&*self, &rhs);
        for (l, r) in std::iter::zip(self.0.iter_mut(), rhs.iter()) {
            *l -= r;
        }
    }
    /// Multiplies every component by `scalar`.
    pub fn scale(&mut self, scalar: Float) {
        for x in self.0.iter_mut() {
            *x *= scalar;
        }
    }
    /// Scales the vector to unit length.
    ///
    /// The zero vector has no direction; normalizing it leaves every
    /// component non-finite.
    pub fn unit(&mut self) {
        let mag = self.as_slice().mag();
        if mag == 0.0 {
            log::warn!("normalizing a zero vector produces non-finite components");
        }
        self.scale(1.0 / mag);
    }
}
