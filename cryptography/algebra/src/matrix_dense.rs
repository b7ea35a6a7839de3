use core::ops::{Add, Index, IndexMut, Mul};

use rand::distributions::Distribution;
use rand::Rng;

use crate::duplex::{Duplex, Squeeze};
use crate::ring::{InfinityNorm, RandomSample, Ring, SampleWith};
use crate::vector_dense::VectorDense;
use crate::vector_sparse::VectorSparse;

/// A dense row-major matrix of ring elements.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MatrixDense<E> {
    pub rows: usize,
    pub columns: usize,
    pub elements: Vec<E>,
}

impl<E: Ring> MatrixDense<E> {
    pub fn new(rows: usize, columns: usize, elements: Vec<E>) -> Self {
        assert_eq!(rows * columns, elements.len());
        Self {
            rows,
            columns,
            elements,
        }
    }

    pub fn fill(rows: usize, columns: usize, fill: E) -> Self {
        Self {
            rows,
            columns,
            elements: vec![fill; rows * columns],
        }
    }

    pub fn from_ints(rows: usize, columns: usize, values: &[i64]) -> Self {
        Self::new(rows, columns, values.iter().map(|n| E::from_int(*n)).collect())
    }

    /// Matrix–vector product against a vector over this ring or over an
    /// extension of it.
    pub fn mul_vector<S>(&self, other: &VectorDense<S>) -> VectorDense<S>
    where
        S: Ring + Mul<E, Output = S>,
    {
        let mut r = VectorDense::zero(self.rows);
        for i in 0..self.rows {
            for j in 0..self.columns {
                r[i] += other[j] * self[(i, j)];
            }
        }
        r
    }

    /// Matrix–vector product against a sparse vector.
    pub fn mul_vector_sparse(&self, other: &VectorSparse<E>) -> VectorDense<E> {
        let mut r = VectorDense::zero(self.rows);
        for i in 0..self.rows {
            for (j, element) in other.e_index.iter().zip(&other.elements) {
                r[i] += self[(i, *j)] * *element;
            }
        }
        r
    }

    /// Horizontal concatenation.
    pub fn concat(&self, other: &Self) -> Self {
        assert_eq!(self.rows, other.rows);
        let mut r = Self::fill(self.rows, self.columns + other.columns, E::zero());
        for i in 0..self.rows {
            for j in 0..self.columns {
                r[(i, j)] = self[(i, j)];
            }
            for j in 0..other.columns {
                r[(i, j + self.columns)] = other[(i, j)];
            }
        }
        r
    }

    pub fn trace(&self) -> E {
        let mut sigma = E::zero();
        for i in 0..self.rows {
            sigma += self[(i, i)];
        }
        sigma
    }

    pub fn transpose(&self) -> Self {
        let mut r = Self::fill(self.columns, self.rows, E::zero());
        for i in 0..self.rows {
            for j in 0..self.columns {
                r[(j, i)] = self[(i, j)];
            }
        }
        r
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, rows: usize, columns: usize) -> Self
    where
        E: RandomSample,
    {
        Self {
            rows,
            columns,
            elements: (0..rows * columns).map(|_| E::random(rng)).collect(),
        }
    }

    pub fn random_with<R: Rng + ?Sized, D: Distribution<i64>>(
        rng: &mut R,
        dst: &D,
        rows: usize,
        columns: usize,
    ) -> Self
    where
        E: SampleWith,
    {
        Self {
            rows,
            columns,
            elements: (0..rows * columns)
                .map(|_| E::random_with(rng, dst))
                .collect(),
        }
    }

    pub fn squeeze<S: Duplex>(sponge: &mut S, rows: usize, columns: usize) -> Self
    where
        E: Squeeze,
    {
        Self {
            rows,
            columns,
            elements: (0..rows * columns).map(|_| E::squeeze(sponge)).collect(),
        }
    }
}

impl<E: InfinityNorm> InfinityNorm for MatrixDense<E> {
    fn check_infinity_norm(&self, bound: i64) -> bool {
        self.elements.iter().all(|e| e.check_infinity_norm(bound))
    }
}

impl<E> Index<(usize, usize)> for MatrixDense<E> {
    type Output = E;

    fn index(&self, (i, j): (usize, usize)) -> &E {
        &self.elements[i * self.columns + j]
    }
}

impl<E> IndexMut<(usize, usize)> for MatrixDense<E> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut E {
        &mut self.elements[i * self.columns + j]
    }
}

impl<E: Ring> Add for &MatrixDense<E> {
    type Output = MatrixDense<E>;

    fn add(self, other: Self) -> MatrixDense<E> {
        assert_eq!((self.rows, self.columns), (other.rows, other.columns));
        MatrixDense {
            rows: self.rows,
            columns: self.columns,
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| *a + *b)
                .collect(),
        }
    }
}

/// Iterative matrix–matrix product.
impl<E: Ring> Mul for &MatrixDense<E> {
    type Output = MatrixDense<E>;

    fn mul(self, other: Self) -> MatrixDense<E> {
        assert_eq!(self.columns, other.rows);
        let mut r = MatrixDense::fill(self.rows, other.columns, E::zero());
        for i in 0..self.rows {
            for j in 0..other.columns {
                for k in 0..self.columns {
                    r[(i, j)] += self[(i, k)] * other[(k, j)];
                }
            }
        }
        r
    }
}
