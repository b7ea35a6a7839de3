use crate::ring::{EuclideanNorm, InfinityNorm, Ring};
use crate::vector_dense::VectorDense;

/// A sparse vector holding only its non-zero entries.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VectorSparse<E> {
    pub size: usize,
    pub e_index: Vec<usize>,
    pub elements: Vec<E>,
}

impl<E: Ring> VectorSparse<E> {
    pub fn new(size: usize, e_index: Vec<usize>, elements: Vec<E>) -> Self {
        Self {
            size,
            e_index,
            elements,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dense(&self) -> VectorDense<E> {
        let mut r = VectorDense::zero(self.size);
        for (i, element) in self.e_index.iter().zip(&self.elements) {
            r[*i] = *element;
        }
        r
    }
}

impl<E: Ring> From<&VectorDense<E>> for VectorSparse<E> {
    fn from(dense: &VectorDense<E>) -> Self {
        let mut e_index = Vec::new();
        let mut elements = Vec::new();
        for (i, element) in dense.elements.iter().enumerate() {
            if !element.is_zero() {
                e_index.push(i);
                elements.push(*element);
            }
        }
        Self {
            size: dense.size(),
            e_index,
            elements,
        }
    }
}

impl<E: InfinityNorm> InfinityNorm for VectorSparse<E> {
    fn check_infinity_norm(&self, bound: i64) -> bool {
        self.elements.iter().all(|e| e.check_infinity_norm(bound))
    }
}

impl<E: EuclideanNorm> EuclideanNorm for VectorSparse<E> {
    fn euclidean_norm(&self) -> f64 {
        let mut r = 0.0;
        for e in &self.elements {
            let norm = e.euclidean_norm();
            r += norm * norm;
        }
        r.sqrt()
    }
}
