use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::distributions::Distribution;
use rand::Rng;

use algebra::duplex::{Absorb, Duplex, Squeeze};
use algebra::ring::{
    DivisionRing, EuclideanNorm, ExtensionOf, InfinityNorm, RandomSample, Ring, SampleWith,
};

/// The compile-time shape of a quotient ring `Z[x]/f(x)` in coefficient
/// form: how products are reduced and, for division rings, how inverses
/// are computed.
pub trait PolynomialRingParams<Z: Ring, const N: usize>: 'static + Copy + Eq + fmt::Debug {
    fn convolute(r: &mut [Z; N], a: &[Z; N], b: &[Z; N]);

    /// Feng / Itoh–Tsujii exponent `q·(q^(N-1) - 1)/(q - 1)` in
    /// little-endian 64-bit limbs; present only for division rings.
    const INVERSION_R1: Option<&'static [u64]> = None;

    /// The index of the cyclotomic polynomial `f`, when `f` is cyclotomic.
    const CYCLOTOMIC_INDEX: usize = 0;
}

/// An element of `Z[x]/f(x)` as a fixed-length coefficient vector.
pub struct PolynomialRing<Z, P, const N: usize> {
    pub coefficients: [Z; N],
    _params: PhantomData<P>,
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> PolynomialRing<Z, P, N> {
    pub fn new(coefficients: [Z; N]) -> Self {
        Self {
            coefficients,
            _params: PhantomData,
        }
    }

    /// Builds an element from leading coefficients, padding with zeros.
    pub fn from_coefficients(init: &[Z]) -> Self {
        let mut coefficients = [Z::zero(); N];
        coefficients[..init.len()].copy_from_slice(init);
        Self::new(coefficients)
    }

    pub fn from_ints(init: &[i64]) -> Self {
        let mut coefficients = [Z::zero(); N];
        for (c, n) in coefficients.iter_mut().zip(init) {
            *c = Z::from_int(*n);
        }
        Self::new(coefficients)
    }

    pub const fn dimension() -> usize {
        N
    }

    /// The Galois conjugate `f(x^{-1})` for 2-power cyclotomics.
    pub fn conjugate(&self) -> Self {
        assert!(
            P::CYCLOTOMIC_INDEX.is_power_of_two() && P::CYCLOTOMIC_INDEX > N,
            "conjugation needs a 2-power cyclotomic"
        );
        let mut t = [Z::zero(); N];
        t[0] = self.coefficients[0];
        for i in 1..N {
            t[i] = -self.coefficients[N - i];
        }
        Self::new(t)
    }

    fn pow_limbs(&self, limbs: &[u64]) -> Self {
        let mut r = Self::one();
        for limb in limbs.iter().rev() {
            for i in (0..64).rev() {
                r = r.square();
                if (limb >> i) & 1 == 1 {
                    r *= *self;
                }
            }
        }
        r
    }

    /// Rejection-samples until exactly `hamming` coefficients are
    /// non-zero; the remaining coefficients stay zero.
    pub fn random_hamming<R: Rng + ?Sized, D: Distribution<i64>>(
        rng: &mut R,
        dst: &D,
        mut hamming: usize,
    ) -> Self {
        let mut t = [Z::zero(); N];
        while hamming > 0 {
            let i = rng.gen_range(0..N);
            if t[i].is_zero() {
                t[i] = Z::from_int(dst.sample(rng));
                if !t[i].is_zero() {
                    hamming -= 1;
                }
            }
        }
        Self::new(t)
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> Ring for PolynomialRing<Z, P, N> {
    type BaseRing = Z;

    fn zero() -> Self {
        Self::new([Z::zero(); N])
    }

    fn one() -> Self {
        let mut t = [Z::zero(); N];
        t[0] = Z::one();
        Self::new(t)
    }

    fn from_int(n: i64) -> Self {
        let mut t = [Z::zero(); N];
        t[0] = Z::from_int(n);
        Self::new(t)
    }

    fn double(&self) -> Self {
        let mut t = self.coefficients;
        for c in &mut t {
            *c = c.double();
        }
        Self::new(t)
    }

    fn scale(&self, scalar: &Z) -> Self {
        let mut t = self.coefficients;
        for c in &mut t {
            *c *= *scalar;
        }
        Self::new(t)
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> ExtensionOf<Z>
    for PolynomialRing<Z, P, N>
{
    fn lift(z: Z) -> Self {
        let mut t = [Z::zero(); N];
        t[0] = z;
        Self::new(t)
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> ExtensionOf<Self>
    for PolynomialRing<Z, P, N>
{
    fn lift(z: Self) -> Self {
        z
    }
}

impl<Z: Ring + DivisionRing, P: PolynomialRingParams<Z, N>, const N: usize> DivisionRing
    for PolynomialRing<Z, P, N>
{
    fn invert(&self) -> Option<Self> {
        let r1_exponent = P::INVERSION_R1
            .unwrap_or_else(|| unimplemented!("inversion in a non-division polynomial ring"));
        if self.is_zero() {
            return None;
        }
        // Feng and Itoh-Tsujii algorithm
        let r1 = self.pow_limbs(r1_exponent);
        let r0 = (r1 * *self).coefficients[0];
        let z1 = r0.invert()?;
        Some(r1.scale(&z1))
    }
}

impl<Z: Ring + InfinityNorm, P: PolynomialRingParams<Z, N>, const N: usize> InfinityNorm
    for PolynomialRing<Z, P, N>
{
    fn check_infinity_norm(&self, bound: i64) -> bool {
        self.coefficients.iter().all(|c| c.check_infinity_norm(bound))
    }
}

impl<Z: Ring + EuclideanNorm, P: PolynomialRingParams<Z, N>, const N: usize> EuclideanNorm
    for PolynomialRing<Z, P, N>
{
    fn euclidean_norm(&self) -> f64 {
        let mut r = 0.0;
        for c in &self.coefficients {
            let norm = c.euclidean_norm();
            r += norm * norm;
        }
        r.sqrt()
    }
}

impl<Z: Ring + RandomSample, P: PolynomialRingParams<Z, N>, const N: usize> RandomSample
    for PolynomialRing<Z, P, N>
{
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut t = [Z::zero(); N];
        for c in &mut t {
            *c = Z::random(rng);
        }
        Self::new(t)
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> SampleWith
    for PolynomialRing<Z, P, N>
{
    fn random_with<R: Rng + ?Sized, D: Distribution<i64>>(rng: &mut R, dst: &D) -> Self {
        let mut t = [Z::zero(); N];
        for c in &mut t {
            *c = Z::from_int(dst.sample(rng));
        }
        Self::new(t)
    }
}

impl<Z: Ring + Absorb, P: PolynomialRingParams<Z, N>, const N: usize> Absorb
    for PolynomialRing<Z, P, N>
{
    fn absorb<S: Duplex>(&self, sponge: &mut S) {
        for c in &self.coefficients {
            c.absorb(sponge);
        }
    }
}

impl<Z: Ring + Squeeze, P: PolynomialRingParams<Z, N>, const N: usize> Squeeze
    for PolynomialRing<Z, P, N>
{
    fn squeeze<S: Duplex>(sponge: &mut S) -> Self {
        let mut t = [Z::zero(); N];
        for c in &mut t {
            *c = Z::squeeze(sponge);
        }
        Self::new(t)
    }
}

impl<Z: Ring, P, const N: usize> Clone for PolynomialRing<Z, P, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Z: Ring, P, const N: usize> Copy for PolynomialRing<Z, P, N> {}

impl<Z: Ring, P, const N: usize> PartialEq for PolynomialRing<Z, P, N> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl<Z: Ring, P, const N: usize> Eq for PolynomialRing<Z, P, N> {}

impl<Z: Ring, P, const N: usize> fmt::Debug for PolynomialRing<Z, P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coefficients[..].fmt(f)
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> Add for PolynomialRing<Z, P, N> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> AddAssign for PolynomialRing<Z, P, N> {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *a += *b;
        }
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> Sub for PolynomialRing<Z, P, N> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> SubAssign for PolynomialRing<Z, P, N> {
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *a -= *b;
        }
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> Mul for PolynomialRing<Z, P, N> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut t = [Z::zero(); N];
        P::convolute(&mut t, &self.coefficients, &other.coefficients);
        Self::new(t)
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> MulAssign for PolynomialRing<Z, P, N> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

/// Scalar multiplication by a coefficient.
impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> Mul<Z> for PolynomialRing<Z, P, N> {
    type Output = Self;

    fn mul(self, other: Z) -> Self {
        self.scale(&other)
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> MulAssign<Z>
    for PolynomialRing<Z, P, N>
{
    fn mul_assign(&mut self, other: Z) {
        *self = self.scale(&other);
    }
}

impl<Z: Ring, P: PolynomialRingParams<Z, N>, const N: usize> Neg for PolynomialRing<Z, P, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut t = self.coefficients;
        for c in &mut t {
            *c = -*c;
        }
        Self::new(t)
    }
}
