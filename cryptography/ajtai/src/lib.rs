//! The Ajtai commitment `commit(m) = A·m`: a linear hash whose binding
//! reduces to the Short Integer Solution problem. Openings are accepted
//! only below a norm bound, chosen at compile time between the infinity
//! and the Euclidean norm.

use core::marker::PhantomData;

use algebra::duplex::{Duplex, Squeeze};
use algebra::matrix_dense::MatrixDense;
use algebra::ring::{EuclideanNorm, InfinityNorm, Ring};
use algebra::vector_dense::VectorDense;
use algebra::vector_sparse::VectorSparse;

/// The compile-time norm choice of a commitment scheme.
pub trait NormBound<R> {
    type Bound: Copy + core::fmt::Debug;

    fn check_dense(witness: &VectorDense<R>, bound: &Self::Bound) -> bool;

    fn check_sparse(witness: &VectorSparse<R>, bound: &Self::Bound) -> bool;
}

/// `‖m‖_∞ < β`.
#[derive(Clone, Copy, Debug)]
pub struct Infinity;

impl<R: InfinityNorm> NormBound<R> for Infinity {
    type Bound = i64;

    fn check_dense(witness: &VectorDense<R>, bound: &i64) -> bool {
        witness.check_infinity_norm(*bound)
    }

    fn check_sparse(witness: &VectorSparse<R>, bound: &i64) -> bool {
        witness.check_infinity_norm(*bound)
    }
}

/// `‖m‖₂ < β`.
#[derive(Clone, Copy, Debug)]
pub struct Euclidean;

impl<R: EuclideanNorm> NormBound<R> for Euclidean {
    type Bound = f64;

    fn check_dense(witness: &VectorDense<R>, bound: &f64) -> bool {
        witness.euclidean_norm() < *bound
    }

    fn check_sparse(witness: &VectorSparse<R>, bound: &f64) -> bool {
        witness.euclidean_norm() < *bound
    }
}

pub struct AjtaiCommitment<R, N: NormBound<R>> {
    matrix: MatrixDense<R>,
    bound: N::Bound,
    _norm: PhantomData<N>,
}

impl<R: Ring, N: NormBound<R>> AjtaiCommitment<R, N> {
    pub fn new(matrix: MatrixDense<R>, bound: N::Bound) -> Self {
        Self {
            matrix,
            bound,
            _norm: PhantomData,
        }
    }

    /// Draws the commitment matrix from a duplex sponge, so that both
    /// sides of a protocol derive the same scheme.
    pub fn setup<S: Duplex>(sponge: &mut S, rows: usize, columns: usize) -> MatrixDense<R>
    where
        R: Squeeze,
    {
        MatrixDense::squeeze(sponge, rows, columns)
    }

    pub fn commit(&self, witness: &VectorDense<R>) -> VectorDense<R> {
        self.matrix.mul_vector(witness)
    }

    pub fn commit_sparse(&self, witness: &VectorSparse<R>) -> VectorDense<R> {
        self.matrix.mul_vector_sparse(witness)
    }

    pub fn open(&self, commitment: &VectorDense<R>, witness: &VectorDense<R>) -> bool {
        N::check_dense(witness, &self.bound) && self.commit(witness) == *commitment
    }

    pub fn open_sparse(&self, commitment: &VectorDense<R>, witness: &VectorSparse<R>) -> bool {
        N::check_sparse(witness, &self.bound) && self.commit_sparse(witness) == *commitment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::duplex::DigestDuplex;
    use algebra::ring::Ring as _;
    use algebra::solinas62::Solinas62Ring as Z;
    use polynomial::extension::Solinas62RingDegree64Ntt as R;

    type Ro = DigestDuplex<sha3::Sha3_256>;

    #[test]
    fn scalar_ring_commitments() {
        type Cs = AjtaiCommitment<Z, Infinity>;
        let mut sponge = Ro::with_seed([1; 32]);
        let cs = Cs::new(Cs::setup(&mut sponge, 2, 2), 8);
        let m1 = VectorDense::new(vec![Z::from_int(1), Z::from_int(2)]);
        let m2 = VectorDense::new(vec![Z::from_int(3), Z::from_int(4)]);
        let swapped = VectorDense::new(vec![Z::from_int(2), Z::from_int(1)]);
        let c1 = cs.commit(&m1);
        let c2 = cs.commit(&m2);
        assert!(cs.open(&c1, &m1), "opening");
        assert!(!cs.open(&c2, &m1), "binding");
        assert!(!cs.open(&c1, &swapped), "positional binding");
        assert!(cs.open(&(&c1 + &c2), &(&m1 + &m2)), "homomorphism");
    }

    #[test]
    fn polynomial_ring_commitments() {
        type Cs = AjtaiCommitment<R, Infinity>;
        let mut sponge = Ro::with_seed([5; 32]);
        let cs = Cs::new(Cs::setup(&mut sponge, 2, 2), 16);
        let m1 = VectorDense::new(vec![R::from_ints(&[1, 2]), R::from_ints(&[3, 4])]);
        let m2 = VectorDense::new(vec![R::from_ints(&[5, 6]), R::from_ints(&[7, 8])]);
        let c1 = cs.commit(&m1);
        let c2 = cs.commit(&m2);
        assert!(cs.open(&c1, &m1), "opening");
        assert!(!cs.open(&c2, &m1), "binding");
        assert!(cs.open(&(&c1 + &c2), &(&m1 + &m2)), "homomorphism");
    }

    #[test]
    fn norm_bound_rejects_large_openings() {
        type Cs = AjtaiCommitment<Z, Infinity>;
        let mut sponge = Ro::with_seed([2; 32]);
        let cs = Cs::new(Cs::setup(&mut sponge, 2, 2), 8);
        let too_large = VectorDense::new(vec![Z::from_int(8), Z::from_int(0)]);
        let c = cs.commit(&too_large);
        assert!(!cs.open(&c, &too_large));
    }

    #[test]
    fn euclidean_norm_bound() {
        type Cs = AjtaiCommitment<Z, Euclidean>;
        let mut sponge = Ro::with_seed([3; 32]);
        let cs = Cs::new(Cs::setup(&mut sponge, 2, 2), 5.0);
        let small = VectorDense::new(vec![Z::from_int(3), Z::from_int(-3)]);
        let large = VectorDense::new(vec![Z::from_int(3), Z::from_int(-4)]);
        assert!(cs.open(&cs.commit(&small), &small));
        assert!(!cs.open(&cs.commit(&large), &large));
    }

    #[test]
    fn sparse_witnesses_agree_with_dense() {
        type Cs = AjtaiCommitment<Z, Infinity>;
        let mut sponge = Ro::with_seed([4; 32]);
        let cs = Cs::new(Cs::setup(&mut sponge, 2, 4), 8);
        let dense = VectorDense::new(
            [0, 3, 0, -2].iter().map(|n| Z::from_int(*n)).collect(),
        );
        let sparse = VectorSparse::from(&dense);
        let c = cs.commit(&dense);
        assert_eq!(cs.commit_sparse(&sparse), c);
        assert!(cs.open_sparse(&c, &sparse));
    }
}
