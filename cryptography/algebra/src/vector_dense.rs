use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::distributions::Distribution;
use rand::Rng;

use crate::duplex::{Duplex, Squeeze};
use crate::matrix_dense::MatrixDense;
use crate::ring::{EuclideanNorm, InfinityNorm, RandomSample, Ring, SampleWith};

/// A dense vector of ring elements.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VectorDense<E> {
    pub elements: Vec<E>,
}

impl<E: Ring> VectorDense<E> {
    pub fn new(elements: Vec<E>) -> Self {
        Self { elements }
    }

    pub fn fill(size: usize, fill: E) -> Self {
        Self {
            elements: vec![fill; size],
        }
    }

    pub fn zero(size: usize) -> Self {
        Self::fill(size, E::zero())
    }

    /// The all-ones vector.
    pub fn identity(size: usize) -> Self {
        Self::fill(size, E::one())
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn dot(&self, other: &Self) -> E {
        let mut sigma = E::zero();
        for (a, b) in self.elements.iter().zip(&other.elements) {
            sigma += *a * *b;
        }
        sigma
    }

    /// The outer product `self ⊗ other`.
    pub fn tensor(&self, other: &Self) -> MatrixDense<E> {
        let m = self.size();
        let n = other.size();
        let mut r = MatrixDense::fill(m, n, E::zero());
        for i in 0..m {
            for j in 0..n {
                r[(i, j)] = self.elements[i] * other.elements[j];
            }
        }
        r
    }

    /// Horizontal concatenation.
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.size() + other.size());
        elements.extend_from_slice(&self.elements);
        elements.extend_from_slice(&other.elements);
        Self { elements }
    }

    /// Lifts every element into an extension ring.
    pub fn homomorph<S: crate::ring::ExtensionOf<E>>(&self) -> VectorDense<S> {
        VectorDense {
            elements: self.elements.iter().map(|e| S::lift(*e)).collect(),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self
    where
        E: RandomSample,
    {
        Self {
            elements: (0..size).map(|_| E::random(rng)).collect(),
        }
    }

    pub fn random_with<R: Rng + ?Sized, D: Distribution<i64>>(
        rng: &mut R,
        dst: &D,
        size: usize,
    ) -> Self
    where
        E: SampleWith,
    {
        Self {
            elements: (0..size).map(|_| E::random_with(rng, dst)).collect(),
        }
    }

    pub fn squeeze<S: Duplex>(sponge: &mut S, size: usize) -> Self
    where
        E: Squeeze,
    {
        Self {
            elements: (0..size).map(|_| E::squeeze(sponge)).collect(),
        }
    }
}

impl<E: InfinityNorm> InfinityNorm for VectorDense<E> {
    fn check_infinity_norm(&self, bound: i64) -> bool {
        self.elements.iter().all(|e| e.check_infinity_norm(bound))
    }
}

impl<E: EuclideanNorm> EuclideanNorm for VectorDense<E> {
    fn euclidean_norm(&self) -> f64 {
        let mut r = 0.0;
        for e in &self.elements {
            let norm = e.euclidean_norm();
            r += norm * norm;
        }
        r.sqrt()
    }
}

impl<E> Index<usize> for VectorDense<E> {
    type Output = E;

    fn index(&self, i: usize) -> &E {
        &self.elements[i]
    }
}

impl<E> IndexMut<usize> for VectorDense<E> {
    fn index_mut(&mut self, i: usize) -> &mut E {
        &mut self.elements[i]
    }
}

impl<E: Ring> Add for &VectorDense<E> {
    type Output = VectorDense<E>;

    fn add(self, other: Self) -> VectorDense<E> {
        VectorDense {
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| *a + *b)
                .collect(),
        }
    }
}

impl<E: Ring> AddAssign<&Self> for VectorDense<E> {
    fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.elements.iter_mut().zip(&other.elements) {
            *a += *b;
        }
    }
}

impl<E: Ring> Sub for &VectorDense<E> {
    type Output = VectorDense<E>;

    fn sub(self, other: Self) -> VectorDense<E> {
        VectorDense {
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| *a - *b)
                .collect(),
        }
    }
}

impl<E: Ring> SubAssign<&Self> for VectorDense<E> {
    fn sub_assign(&mut self, other: &Self) {
        for (a, b) in self.elements.iter_mut().zip(&other.elements) {
            *a -= *b;
        }
    }
}

/// Element-wise (Hadamard) product.
impl<E: Ring> Mul for &VectorDense<E> {
    type Output = VectorDense<E>;

    fn mul(self, other: Self) -> VectorDense<E> {
        VectorDense {
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| *a * *b)
                .collect(),
        }
    }
}

impl<E: Ring> MulAssign<&Self> for VectorDense<E> {
    fn mul_assign(&mut self, other: &Self) {
        for (a, b) in self.elements.iter_mut().zip(&other.elements) {
            *a *= *b;
        }
    }
}

/// Scalar multiplication.
impl<E: Ring> Mul<E> for &VectorDense<E> {
    type Output = VectorDense<E>;

    fn mul(self, other: E) -> VectorDense<E> {
        VectorDense {
            elements: self.elements.iter().map(|a| *a * other).collect(),
        }
    }
}

impl<E: Ring> Neg for &VectorDense<E> {
    type Output = VectorDense<E>;

    fn neg(self) -> VectorDense<E> {
        VectorDense {
            elements: self.elements.iter().map(|a| -*a).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solinas62::Solinas62Ring as Z;

    fn vector(values: &[i64]) -> VectorDense<Z> {
        VectorDense::new(values.iter().map(|n| Z::from_int(*n)).collect())
    }

    #[test]
    fn arithmetic() {
        let a = vector(&[1, 2, 3]);
        let b = vector(&[4, 5, 6]);
        assert_eq!(&a + &b, vector(&[5, 7, 9]));
        assert_eq!(&b - &a, vector(&[3, 3, 3]));
        assert_eq!(&a * &b, vector(&[4, 10, 18]));
        assert_eq!(&a * Z::from_int(2), vector(&[2, 4, 6]));
        assert_eq!(-&a, vector(&[-1, -2, -3]));
        assert_eq!(a.dot(&b), Z::from_int(32));
    }

    #[test]
    fn concatenation() {
        let a = vector(&[1, 2]);
        let b = vector(&[3]);
        assert_eq!(a.concat(&b), vector(&[1, 2, 3]));
    }

    #[test]
    fn tensor_product() {
        let a = vector(&[1, 2]);
        let b = vector(&[3, 4, 5]);
        let t = a.tensor(&b);
        assert_eq!(t.rows, 2);
        assert_eq!(t.columns, 3);
        assert_eq!(t[(1, 2)], Z::from_int(10));
    }

    #[test]
    fn norms() {
        let a = vector(&[3, -4]);
        assert!(a.check_infinity_norm(5));
        assert!(!a.check_infinity_norm(4));
        assert!((a.euclidean_norm() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn identity_is_all_ones() {
        assert_eq!(VectorDense::<Z>::identity(3), vector(&[1, 1, 1]));
    }
}
