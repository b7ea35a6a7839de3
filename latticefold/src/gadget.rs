// https://eprint.iacr.org/2018/946

use algebra::matrix_dense::MatrixDense;
use algebra::ring::{IntegerRing, Ring};
use algebra::vector_dense::VectorDense;
use algebra::zq::{MontgomeryRing, MontgomeryRingParams};
use polynomial::ring::{PolynomialRing, PolynomialRingParams};

/// Rings whose elements decompose into base-`radix` digits of their
/// canonical representatives.
pub trait RadixDecompose: Ring {
    fn decompose_into(&self, radix: i64, digits: usize, pieces: &mut [Self]);
}

impl<P: MontgomeryRingParams> RadixDecompose for MontgomeryRing<P> {
    fn decompose_into(&self, radix: i64, digits: usize, pieces: &mut [Self]) {
        let mut representative = self.canonical();
        for piece in pieces.iter_mut().take(digits) {
            *piece = Self::from_int(representative % radix);
            representative /= radix;
        }
    }
}

impl<Z, P, const N: usize> RadixDecompose for PolynomialRing<Z, P, N>
where
    Z: Ring + RadixDecompose,
    P: PolynomialRingParams<Z, N>,
{
    fn decompose_into(&self, radix: i64, digits: usize, pieces: &mut [Self]) {
        let mut buffer = vec![Z::zero(); digits];
        for i in 0..N {
            self.coefficients[i].decompose_into(radix, digits, &mut buffer);
            for (piece, digit) in pieces.iter_mut().zip(&buffer) {
                piece.coefficients[i] = *digit;
            }
        }
    }
}

/// The digit vector `(r, r·B, r·B², …)`.
pub fn gadget_vector<R: Ring>(radix: i64, digits: usize, r: &R) -> VectorDense<R> {
    let mut pieces = Vec::with_capacity(digits);
    pieces.push(*r);
    let mut t = R::BaseRing::from_int(radix);
    for _ in 1..digits {
        pieces.push(r.scale(&t));
        t *= R::BaseRing::from_int(radix);
    }
    VectorDense::new(pieces)
}

/// The gadget matrix `Iₘ ⊗ (1, B, B², …, B^(n-1))`.
pub fn gadget_matrix<R: Ring>(radix: i64, m: usize, n: usize) -> MatrixDense<R> {
    let mut powers = Vec::with_capacity(n);
    powers.push(R::one());
    for i in 1..n {
        powers.push(powers[i - 1].scale(&R::BaseRing::from_int(radix)));
    }
    VectorDense::identity(m).tensor(&VectorDense::new(powers))
}

/// Base-`radix` decomposition of every element of `f`, `digits` digits
/// each; the inverse of multiplication by the gadget matrix.
pub fn decompose<R: RadixDecompose>(radix: i64, digits: usize, f: &VectorDense<R>) -> VectorDense<R> {
    let mut pieces = VectorDense::zero(f.size() * digits);
    for (i, element) in f.iter().enumerate() {
        element.decompose_into(radix, digits, &mut pieces.elements[i * digits..(i + 1) * digits]);
    }
    pieces
}
