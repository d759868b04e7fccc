//! Number of dimensions trait.

use crate::GeomError;

/// Number of dimensions.
pub trait Ndim {
    /// Returns the number of dimensions of the object.
    ///
    /// This method may return `0`.
    fn ndim(&self) -> usize;
}

impl<T: Ndim + ?Sized> Ndim for &'_ T {
    fn ndim(&self) -> usize {
        (**self).ndim()
    }
}
impl<T: Ndim + ?Sized> Ndim for &'_ mut T {
    fn ndim(&self) -> usize {
        (**self).ndim()
    }
}

/// Returns the shared number of dimensions of `a` and `b`, or an error if
/// they differ.
pub fn ensure_same_ndim(
    a: &(impl Ndim + ?Sized),
    b: &(impl Ndim + ?Sized),
) -> Result<usize, GeomError> {
    let expected = a.ndim();
    let actual = b.ndim();
    match expected == actual {
        true => Ok(expected),
        false => Err(GeomError::DimensionMismatch { expected, actual }),
    }
}

/// Returns the shared number of dimensions of `a` and `b`.
///
/// # Panics
///
/// Panics if the dimensions differ.
#[track_caller]
pub fn assert_same_ndim(a: &(impl Ndim + ?Sized), b: &(impl Ndim + ?Sized)) -> usize {
    match ensure_same_ndim(a, b) {
        Ok(ndim) => ndim,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ensure_same_ndim() {
        assert_eq!(ensure_same_ndim(&[1.0, 2.0], &[3.0, 4.0]), Ok(2));
        assert_eq!(
            ensure_same_ndim(&[1.0, 2.0], &[3.0]),
            Err(GeomError::DimensionMismatch {
                expected: 2,
                actual: 1,
            }),
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch: expected 1 dimensions but got 3")]
    fn test_assert_same_ndim_panics() {
        assert_same_ndim(&[1.0], &[1.0, 2.0, 3.0]);
    }
}
