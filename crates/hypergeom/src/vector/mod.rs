//! N-dimensional vector math.
//!
//! [`Vector`] owns its components and its arithmetic allocates a new vector.
//! [`VectorMut`] borrows existing storage and mutates it in place. The
//! allocating operations are implemented on top of the in-place ones.

use std::fmt;
use std::ops::*;

use approx::AbsDiffEq;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::ndim::assert_same_ndim;
use crate::{DEFAULT_EPSILON, Epsilon, Float, Ndim, W, X, Y, Z};

mod mutable;

pub use mutable::VectorMut;

/// Constructs an N-dimensional vector, using the same syntax as `vec![]`.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector($crate::smallvec::smallvec![$($tok)*])
    };
}

/// N-dimensional vector.
///
/// Binary operations panic if the operands have different numbers of
/// dimensions. Indexing out of bounds panics.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vector(pub SmallVec<[Float; 4]>);

/// Panics if `axis` is out of range for a vector with `ndim` dimensions.
#[track_caller]
pub(crate) fn check_axis(ndim: usize, axis: usize) {
    if axis >= ndim {
        panic!(
            "cannot access {}-dimensional data in a {ndim}-dimensional vector",
            axis + 1,
        );
    }
}

/// Read-only reference to an N-dimensional vector.
pub trait VectorRef: fmt::Debug + Ndim {
    /// Returns the components of the vector.
    fn as_slice(&self) -> &[Float];

    /// Converts the vector to a `Vector`.
    fn to_vector(&self) -> Vector {
        Vector(SmallVec::from_slice(self.as_slice()))
    }

    /// Returns a component of the vector.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is out of range.
    #[track_caller]
    fn get(&self, axis: usize) -> Float {
        check_axis(self.ndim(), axis);
        self.as_slice()[axis]
    }
    /// Returns the X component of the vector.
    #[track_caller]
    fn x(&self) -> Float {
        self.get(X)
    }
    /// Returns the Y component of the vector.
    #[track_caller]
    fn y(&self) -> Float {
        self.get(Y)
    }
    /// Returns the Z component of the vector.
    #[track_caller]
    fn z(&self) -> Float {
        self.get(Z)
    }
    /// Returns the W component of the vector.
    #[track_caller]
    fn w(&self) -> Float {
        self.get(W)
    }

    /// Returns an iterator over the components of the vector.
    fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Float>> {
        self.as_slice().iter().copied()
    }

    /// Returns the dot product of this vector with another.
    #[track_caller]
    fn dot(&self, rhs: impl VectorRef) -> Float {
        assert_same_ndim(self, &rhs);
        std::iter::zip(self.iter(), rhs.iter())
            .map(|(l, r)| l * r)
            .sum()
    }

    /// Returns the magnitude of the vector.
    fn mag(&self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    fn mag2(&self) -> Float {
        self.dot(self)
    }

    /// Returns a scaled copy of the vector.
    #[must_use]
    fn scale(&self, scalar: Float) -> Vector {
        let mut ret = self.to_vector();
        ret.view_mut().scale(scalar);
        ret
    }
    /// Returns a copy of the vector scaled to unit length.
    ///
    /// The zero vector has no direction, so the result has non-finite
    /// components. Use [`VectorRef::normalize()`] when the input may be zero.
    #[must_use]
    fn unit(&self) -> Vector {
        let mut ret = self.to_vector();
        ret.view_mut().unit();
        ret
    }
    /// Returns a copy of the vector scaled to unit length, or `None` if the
    /// vector is zero.
    #[must_use]
    fn normalize(&self) -> Option<Vector> {
        let mult = 1.0 / self.mag();
        mult.is_finite().then(|| self.scale(mult))
    }

    /// Returns whether the dot product of the two vectors is exactly zero.
    #[track_caller]
    fn is_orthogonal(&self, rhs: impl VectorRef) -> bool {
        self.dot(rhs) == 0.0
    }

    /// Returns whether every component of the two vectors is equal according
    /// to [`DEFAULT_EPSILON`].
    #[track_caller]
    fn within(&self, rhs: impl VectorRef) -> bool {
        self.within_epsilon(rhs, DEFAULT_EPSILON)
    }
    /// Returns whether every component of the two vectors is equal according
    /// to `epsilon`.
    ///
    /// Components are compared individually, so a tiny component is never
    /// drowned out by a large one.
    #[track_caller]
    fn within_epsilon(&self, rhs: impl VectorRef, epsilon: Epsilon) -> bool {
        assert_same_ndim(self, &rhs);
        std::iter::zip(self.iter(), rhs.iter()).all(|(l, r)| epsilon.within(l, r))
    }
}

impl Ndim for Vector {
    /// Returns the number of components in the vector.
    fn ndim(&self) -> usize {
        self.0.len()
    }
}
impl VectorRef for Vector {
    fn as_slice(&self) -> &[Float] {
        &self.0
    }
}

impl Ndim for [Float] {
    /// Returns the number of components in the vector.
    fn ndim(&self) -> usize {
        self.len()
    }
}
impl VectorRef for [Float] {
    fn as_slice(&self) -> &[Float] {
        self
    }
}

impl<const N: usize> Ndim for [Float; N] {
    /// Returns the number of components in the vector.
    fn ndim(&self) -> usize {
        N
    }
}
impl<const N: usize> VectorRef for [Float; N] {
    fn as_slice(&self) -> &[Float] {
        self
    }
}

impl<V: VectorRef + ?Sized> VectorRef for &'_ V {
    fn as_slice(&self) -> &[Float] {
        (**self).as_slice()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().format(", "))
    }
}

macro_rules! impl_vector_ops {
    (impl for $type_name:ty) => {
        impl<V: VectorRef> Add<V> for $type_name {
            type Output = Vector;

            #[track_caller]
            fn add(self, rhs: V) -> Self::Output {
                let mut ret = Vector::from(self);
                ret.view_mut().add(rhs);
                ret
            }
        }

        impl<V: VectorRef> Sub<V> for $type_name {
            type Output = Vector;

            #[track_caller]
            fn sub(self, rhs: V) -> Self::Output {
                let mut ret = Vector::from(self);
                ret.view_mut().sub(rhs);
                ret
            }
        }

        impl Neg for $type_name {
            type Output = Vector;

            fn neg(self) -> Self::Output {
                let mut ret = Vector::from(self);
                ret.view_mut().scale(-1.0);
                ret
            }
        }

        impl Mul<Float> for $type_name {
            type Output = Vector;

            fn mul(self, rhs: Float) -> Self::Output {
                let mut ret = Vector::from(self);
                ret.view_mut().scale(rhs);
                ret
            }
        }
        impl Div<Float> for $type_name {
            type Output = Vector;

            #[allow(clippy::suspicious_arithmetic_impl)]
            fn div(self, rhs: Float) -> Self::Output {
                let mut ret = Vector::from(self);
                ret.view_mut().scale(1.0 / rhs);
                ret
            }
        }
    };
}
impl_vector_ops!(impl for Vector);
impl_vector_ops!(impl for &'_ Vector);

impl Mul<Vector> for Float {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}
impl Mul<&Vector> for Float {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs * self
    }
}

impl<V: VectorRef> AddAssign<V> for Vector {
    #[track_caller]
    fn add_assign(&mut self, rhs: V) {
        self.view_mut().add(rhs);
    }
}
impl<V: VectorRef> SubAssign<V> for Vector {
    #[track_caller]
    fn sub_assign(&mut self, rhs: V) {
        self.view_mut().sub(rhs);
    }
}
impl MulAssign<Float> for Vector {
    fn mul_assign(&mut self, rhs: Float) {
        self.view_mut().scale(rhs);
    }
}
impl DivAssign<Float> for Vector {
    #[allow(clippy::suspicious_op_assign_impl)]
    fn div_assign(&mut self, rhs: Float) {
        self.view_mut().scale(1.0 / rhs);
    }
}

impl Index<usize> for Vector {
    type Output = Float;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        check_axis(self.ndim(), index);
        &self.0[index]
    }
}
impl IndexMut<usize> for Vector {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        check_axis(self.ndim(), index);
        &mut self.0[index]
    }
}

impl Vector {
    /// Zero-dimensional empty vector.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Constructs a vector from its components.
    pub fn new(components: &[Float]) -> Self {
        Self(SmallVec::from_slice(components))
    }
    /// Returns a zero vector.
    pub fn zero(ndim: usize) -> Self {
        vector![0.0; ndim]
    }
    /// Returns a unit vector along an axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is out of range.
    #[track_caller]
    pub fn basis(ndim: usize, axis: usize) -> Self {
        let mut ret = Self::zero(ndim);
        ret[axis] = 1.0;
        ret
    }

    /// Returns a mutable view of the vector's storage, for in-place
    /// operations.
    pub fn view_mut(&mut self) -> VectorMut<'_> {
        VectorMut::new(&mut self.0)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON
    }

    /// Returns whether the vectors have the same number of dimensions and are
    /// equal component-wise according to `epsilon`.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.ndim() == other.ndim() && self.within_epsilon(other, epsilon)
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl<const N: usize> From<[Float; N]> for Vector {
    fn from(value: [Float; N]) -> Self {
        Self::new(&value)
    }
}
impl From<&[Float]> for Vector {
    fn from(value: &[Float]) -> Self {
        Self::new(value)
    }
}
impl From<Vec<Float>> for Vector {
    fn from(value: Vec<Float>) -> Self {
        Self(SmallVec::from_vec(value))
    }
}
impl From<&Vector> for Vector {
    fn from(value: &Vector) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_vector_add() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 0.5, 0.0];
        assert_eq!(&v1 + &v2, vector![-4.0, 2.5, -10.0]);
        assert_eq!(v2 + v1, vector![-4.0, 2.5, -10.0]);
        assert_eq!(vector![1.0, 2.0] + vector![0.0, 0.0], vector![1.0, 2.0]);
    }

    #[test]
    fn test_vector_sub() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 0.5, 0.0];
        assert_eq!(&v1 - &v2, vector![6.0, 1.5, -10.0]);
        assert_eq!(v2 - &v1, vector![-6.0, -1.5, 10.0]);
        assert_eq!(vector![1.0, 2.0] - [1.0, 2.0], vector![0.0, 0.0]);
    }

    #[test]
    fn test_vector_neg() {
        let v1 = vector![1.0, 2.0, -10.0];
        assert_eq!(-&v1, vector![-1.0, -2.0, 10.0]);
        assert_eq!(-v1, vector![-1.0, -2.0, 10.0]);
    }

    #[test]
    fn test_vector_scale() {
        let v = vector![1.0, 2.0];
        assert_eq!(v.scale(2.0), vector![2.0, 4.0]);
        assert_eq!(&v * 2.0, vector![2.0, 4.0]);
        assert_eq!(2.0 * &v, vector![2.0, 4.0]);
        assert_eq!(&v / 2.0, vector![0.5, 1.0]);
        // allocating operations leave their input alone
        assert_eq!(v, vector![1.0, 2.0]);
    }

    #[test]
    fn test_vector_assign_ops() {
        let mut v = vector![1.0, 2.0];
        v += [1.0, 1.0];
        assert_eq!(v, vector![2.0, 3.0]);
        v -= &vector![2.0, 0.0];
        assert_eq!(v, vector![0.0, 3.0]);
        v *= 4.0;
        assert_eq!(v, vector![0.0, 12.0]);
        v /= 3.0;
        assert_eq!(v, vector![0.0, 4.0]);
    }

    #[test]
    fn test_dot_product() {
        let v1 = vector![1.0, 2.0];
        let v2 = vector![2.0, 3.0];
        assert_eq!(v1.dot(&v2), 8.0);
        assert_eq!(vector![1.0, 2.0, -10.0].dot([-5.0, 16.0, 0.0]), 27.0);
    }

    #[test]
    fn test_magnitude() {
        let v = vector![3.0, 4.0];
        assert_eq!(v.mag2(), 25.0);
        assert_eq!(v.mag(), 5.0);
        assert_eq!(Vector::EMPTY.mag(), 0.0);
    }

    #[test]
    fn test_unit() {
        assert_approx_eq!(vector![5.0, 0.0].unit(), vector![1.0, 0.0]);
        assert_approx_eq!(vector![0.0, -2.0, 0.0].unit(), vector![0.0, -1.0, 0.0]);
        assert!(vector![0.0, 0.0].unit().iter().all(|x| !x.is_finite()));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(vector![0.0, 0.0].normalize(), None);
        let n = vector![3.0, 4.0].normalize().expect("nonzero vector");
        assert_approx_eq!(n, vector![0.6, 0.8]);
    }

    #[test]
    fn test_is_orthogonal() {
        assert!(vector![1.0, 1.0].is_orthogonal([-1.0, 1.0]));
        assert!(!vector![1.0, 1.0].is_orthogonal([-1.0, 1.5]));
        // exact, not approximate
        assert!(!vector![1.0, 1.0].is_orthogonal([-1.0, Float::next_up(1.0)]));
    }

    #[test]
    fn test_within() {
        assert!(vector![1.0, 2.0].within([1.0, 2.0]));
        assert!(!vector![1.0, 2.0].within([1.0, 3.0]));
        assert!(vector![Float::NEG_INFINITY, 2.0].within([Float::NEG_INFINITY, 2.0]));
        assert!(!vector![Float::NEG_INFINITY, 2.0].within([1.0, 2.0]));
        assert!(vector![1.0, 2.0].within([1.0, Float::next_up(2.0)]));
    }

    #[test]
    fn test_within_is_per_axis() {
        // The difference is negligible compared to the magnitude of the
        // whole vector, but not compared to the axis it is on.
        let v = vector![1e10, 1e-10];
        let u = vector![1e10, 2e-10];
        assert!(!v.within(&u));
        assert!((&v - &u).mag2() < 1e-19);
    }

    #[test]
    fn test_within_epsilon() {
        let e = Epsilon::absolute(0.5);
        assert!(vector![1.0, 2.0].within_epsilon([1.4, 1.6], e));
        assert!(!vector![1.0, 2.0].within_epsilon([1.5, 2.0], e));
    }

    #[test]
    fn test_accessors() {
        let v = vector![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!([v.x(), v.y(), v.z(), v.w()], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.get(4), 5.0);
        assert_eq!(v[X], 1.0);
        assert_eq!(Vector::basis(3, Y), vector![0.0, 1.0, 0.0]);
        assert_eq!(Vector::zero(2), vector![0.0, 0.0]);
        assert_eq!(Vector::from([1.0, 2.0]), Vector::new(&[1.0, 2.0]));
        assert_eq!(Vector::from(vec![1.0, 2.0]), [1.0, 2.0].to_vector());
        assert_eq!((0..3).map(Float::from).collect::<Vector>(), vector![0.0, 1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "cannot access 3-dimensional data in a 2-dimensional vector")]
    fn test_get_out_of_range() {
        vector![1.0, 2.0].z();
    }

    #[test]
    #[should_panic(expected = "cannot access 3-dimensional data in a 2-dimensional vector")]
    fn test_index_out_of_range() {
        let mut v = vector![1.0, 2.0];
        v[2] = 1.0;
    }

    #[test]
    fn test_display() {
        assert_eq!(vector![1.0, -2.5, 3.0].to_string(), "(1, -2.5, 3)");
        assert_eq!(Vector::EMPTY.to_string(), "()");
    }

    #[test]
    fn test_abs_diff_eq_checks_ndim() {
        assert!(!vector![1.0].abs_diff_eq(&vector![1.0, 0.0], DEFAULT_EPSILON));
        assert!(vector![1.0].abs_diff_eq(&vector![1.0], DEFAULT_EPSILON));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_add_mismatch() {
        let _ = vector![1.0, 2.0] + vector![1.0];
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_sub_mismatch() {
        let _ = vector![1.0, 2.0] - [1.0, 2.0, 3.0];
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_dot_mismatch() {
        vector![1.0, 2.0].dot([1.0]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_within_mismatch() {
        vector![1.0, 2.0].within([1.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let v = vector![1.0, 2.5];
        let json = serde_json::to_string(&v).expect("serialize");
        assert_eq!(json, "[1.0,2.5]");
        assert_eq!(serde_json::from_str::<Vector>(&json).expect("deserialize"), v);
    }

    fn vector_pair(max_ndim: usize) -> impl Strategy<Value = (Vector, Vector)> {
        (0..=max_ndim).prop_flat_map(|ndim| {
            let component = -1e10..1e10_f64;
            (
                prop::collection::vec(component.clone(), ndim),
                prop::collection::vec(component, ndim),
            )
                .prop_map(|(v, u)| (Vector::from(v), Vector::from(u)))
        })
    }

    fn signed_mantissa() -> impl Strategy<Value = Float> {
        (prop::bool::ANY, 1.0..2.0_f64).prop_map(|(neg, m)| if neg { -m } else { m })
    }

    /// Pairs of vectors whose components share a power-of-two scale.
    fn similar_vector_pair(max_ndim: usize) -> impl Strategy<Value = (Vector, Vector)> {
        (0..=max_ndim, -20..=20_i32).prop_flat_map(|(ndim, exp)| {
            let scale = Float::powi(2.0, exp);
            (
                prop::collection::vec(signed_mantissa(), ndim),
                prop::collection::vec(signed_mantissa(), ndim),
            )
                .prop_map(move |(v, u)| (Vector::from(v) * scale, Vector::from(u) * scale))
        })
    }

    proptest! {
        #[test]
        fn proptest_add_commutes((v, u) in vector_pair(8)) {
            prop_assert_eq!(&v + &u, &u + &v);
        }

        #[test]
        fn proptest_sub_inverts_add((v, u) in vector_pair(8)) {
            let roundtrip = (&v + &u) - &u;
            prop_assert!(roundtrip.within_epsilon(&v, Epsilon::absolute(1e-5)));
        }

        // `Normal` tolerance scales with `|v| + |u|`, so the round trip only
        // holds under the default epsilon when both operands have similar
        // magnitudes. Cancellation against a much larger `u` loses the low
        // bits of `v` entirely.
        #[test]
        fn proptest_sub_inverts_add_default_epsilon((v, u) in similar_vector_pair(8)) {
            let roundtrip = (&v + &u) - &u;
            prop_assert!(roundtrip.within(&v), "{roundtrip} != {v}");
        }

        #[test]
        fn proptest_buffered_matches_allocating((v, u) in vector_pair(8), c in -100.0..100.0_f64) {
            let mut buf = vec![0.0; v.ndim()];
            let mut m = VectorMut::new(&mut buf);
            m.copy_from(&v);
            m.add(&u);
            m.scale(c);
            prop_assert_eq!(Vector::from(buf), (&v + &u) * c);
        }
    }
}
