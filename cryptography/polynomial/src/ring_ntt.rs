use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::distributions::Distribution;
use rand::Rng;

use algebra::duplex::{Absorb, Duplex, Squeeze};
use algebra::ring::{
    EuclideanNorm, ExtensionOf, InfinityNorm, NttRing, RandomSample, Ring, SampleWith,
};

use crate::ntt;
use crate::ring::{PolynomialRing, PolynomialRingParams};

/// The compile-time shape of a quotient ring held in NTT (evaluation)
/// form. `Iso` is the coefficient-form ring on the other side of the
/// isomorphism.
pub trait NttRingParams<Z: Ring + NttRing, const N: usize>: 'static + Copy + Eq + fmt::Debug {
    type Iso: PolynomialRingParams<Z, N>;

    const CYCLOTOMIC_INDEX: usize = 0;
}

/// An element of `Z[x]/f(x)` as its spectrum under the number-theoretic
/// transform. The form is part of the type; converting to coefficient
/// form goes through [`PolynomialRingNtt::isomorph`].
pub struct PolynomialRingNtt<Z, P, const N: usize> {
    pub spectrum: [Z; N],
    _params: PhantomData<P>,
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> PolynomialRingNtt<Z, P, N> {
    pub fn new(spectrum: [Z; N]) -> Self {
        Self {
            spectrum,
            _params: PhantomData,
        }
    }

    pub const fn dimension() -> usize {
        N
    }

    fn inertia() -> usize {
        ntt::transform_inertia::<Z, N>()
    }

    /// Builds the spectrum of the polynomial with the given leading
    /// coefficients.
    pub fn from_ints(init: &[i64]) -> Self {
        Self::from(PolynomialRing::<Z, P::Iso, N>::from_ints(init))
    }

    /// The inverse transform back into coefficient form.
    pub fn isomorph(&self) -> PolynomialRing<Z, P::Iso, N> {
        let mut coefficients = self.spectrum;
        ntt::gentleman_sande(&mut coefficients);
        PolynomialRing::new(coefficients)
    }

    /// The Galois conjugate; a spectrum reversal when the transform
    /// splits completely.
    pub fn conjugate(&self) -> Self {
        assert!(
            P::CYCLOTOMIC_INDEX.is_power_of_two() && P::CYCLOTOMIC_INDEX > N,
            "conjugation needs a 2-power cyclotomic"
        );
        if Self::inertia() == 1 {
            let mut t = self.spectrum;
            t.reverse();
            Self::new(t)
        } else {
            Self::from_isomorph_conjugate(self)
        }
    }

    fn from_isomorph_conjugate(value: &Self) -> Self {
        let f = value.isomorph();
        let mut t = [Z::zero(); N];
        t[0] = f.coefficients[0];
        for i in 1..N {
            t[i] = -f.coefficients[N - i];
        }
        let mut spectrum = t;
        ntt::cooley_tukey(&mut spectrum);
        Self::new(spectrum)
    }

    pub fn random_with<R: Rng + ?Sized, D: Distribution<i64>>(rng: &mut R, dst: &D) -> Self {
        Self::from(PolynomialRing::<Z, P::Iso, N>::random_with(rng, dst))
    }

    pub fn random_hamming<R: Rng + ?Sized, D: Distribution<i64>>(
        rng: &mut R,
        dst: &D,
        hamming: usize,
    ) -> Self {
        Self::from(PolynomialRing::<Z, P::Iso, N>::random_hamming(
            rng, dst, hamming,
        ))
    }
}

/// The forward transform out of coefficient form.
impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize>
    From<PolynomialRing<Z, P::Iso, N>> for PolynomialRingNtt<Z, P, N>
{
    fn from(f: PolynomialRing<Z, P::Iso, N>) -> Self {
        let mut spectrum = f.coefficients;
        ntt::cooley_tukey(&mut spectrum);
        Self::new(spectrum)
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> Ring
    for PolynomialRingNtt<Z, P, N>
{
    type BaseRing = Z;

    fn zero() -> Self {
        Self::new([Z::zero(); N])
    }

    fn one() -> Self {
        <Self as ExtensionOf<Z>>::lift(Z::one())
    }

    fn from_int(n: i64) -> Self {
        <Self as ExtensionOf<Z>>::lift(Z::from_int(n))
    }

    fn double(&self) -> Self {
        let mut t = self.spectrum;
        for c in &mut t {
            *c = c.double();
        }
        Self::new(t)
    }

    fn square(&self) -> Self {
        if Self::inertia() == 1 {
            let mut t = self.spectrum;
            for c in &mut t {
                *c = c.square();
            }
            Self::new(t)
        } else {
            *self * *self
        }
    }

    fn scale(&self, scalar: &Z) -> Self {
        let mut t = self.spectrum;
        for c in &mut t {
            *c *= *scalar;
        }
        Self::new(t)
    }
}

/// A constant embeds as its value in every frequency bin; residual
/// positions within a bin stay zero.
impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> ExtensionOf<Z>
    for PolynomialRingNtt<Z, P, N>
{
    fn lift(z: Z) -> Self {
        let inertia = Self::inertia();
        let mut t = [Z::zero(); N];
        for (i, c) in t.iter_mut().enumerate() {
            if i % inertia == 0 {
                *c = z;
            }
        }
        Self::new(t)
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> ExtensionOf<Self>
    for PolynomialRingNtt<Z, P, N>
{
    fn lift(z: Self) -> Self {
        z
    }
}

impl<Z: Ring + NttRing + InfinityNorm, P: NttRingParams<Z, N>, const N: usize> InfinityNorm
    for PolynomialRingNtt<Z, P, N>
{
    fn check_infinity_norm(&self, bound: i64) -> bool {
        self.isomorph().check_infinity_norm(bound)
    }
}

impl<Z: Ring + NttRing + EuclideanNorm, P: NttRingParams<Z, N>, const N: usize> EuclideanNorm
    for PolynomialRingNtt<Z, P, N>
{
    fn euclidean_norm(&self) -> f64 {
        self.isomorph().euclidean_norm()
    }
}

impl<Z: Ring + NttRing + RandomSample, P: NttRingParams<Z, N>, const N: usize> RandomSample
    for PolynomialRingNtt<Z, P, N>
{
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // The uniform distribution is invariant under the transform.
        let mut t = [Z::zero(); N];
        for c in &mut t {
            *c = Z::random(rng);
        }
        Self::new(t)
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> SampleWith
    for PolynomialRingNtt<Z, P, N>
{
    fn random_with<R: Rng + ?Sized, D: Distribution<i64>>(rng: &mut R, dst: &D) -> Self {
        Self::random_with(rng, dst)
    }
}

impl<Z: Ring + NttRing + Absorb, P: NttRingParams<Z, N>, const N: usize> Absorb
    for PolynomialRingNtt<Z, P, N>
{
    fn absorb<S: Duplex>(&self, sponge: &mut S) {
        for c in &self.spectrum {
            c.absorb(sponge);
        }
    }
}

impl<Z: Ring + NttRing + Squeeze, P: NttRingParams<Z, N>, const N: usize> Squeeze
    for PolynomialRingNtt<Z, P, N>
{
    fn squeeze<S: Duplex>(sponge: &mut S) -> Self {
        let mut t = [Z::zero(); N];
        for c in &mut t {
            *c = Z::squeeze(sponge);
        }
        Self::new(t)
    }
}

impl<Z: Ring, P, const N: usize> Clone for PolynomialRingNtt<Z, P, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Z: Ring, P, const N: usize> Copy for PolynomialRingNtt<Z, P, N> {}

impl<Z: Ring, P, const N: usize> PartialEq for PolynomialRingNtt<Z, P, N> {
    fn eq(&self, other: &Self) -> bool {
        self.spectrum == other.spectrum
    }
}

impl<Z: Ring, P, const N: usize> Eq for PolynomialRingNtt<Z, P, N> {}

impl<Z: Ring, P, const N: usize> fmt::Debug for PolynomialRingNtt<Z, P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.spectrum[..].fmt(f)
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> Add for PolynomialRingNtt<Z, P, N> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> AddAssign
    for PolynomialRingNtt<Z, P, N>
{
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.spectrum.iter_mut().zip(&other.spectrum) {
            *a += *b;
        }
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> Sub for PolynomialRingNtt<Z, P, N> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> SubAssign
    for PolynomialRingNtt<Z, P, N>
{
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.spectrum.iter_mut().zip(&other.spectrum) {
            *a -= *b;
        }
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> Mul for PolynomialRingNtt<Z, P, N> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut t = [Z::zero(); N];
        ntt::convolute(&mut t, &self.spectrum, &other.spectrum);
        Self::new(t)
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> MulAssign
    for PolynomialRingNtt<Z, P, N>
{
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

/// Scalar multiplication by a coefficient.
impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> Mul<Z>
    for PolynomialRingNtt<Z, P, N>
{
    type Output = Self;

    fn mul(self, other: Z) -> Self {
        self.scale(&other)
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> MulAssign<Z>
    for PolynomialRingNtt<Z, P, N>
{
    fn mul_assign(&mut self, other: Z) {
        *self = self.scale(&other);
    }
}

impl<Z: Ring + NttRing, P: NttRingParams<Z, N>, const N: usize> Neg for PolynomialRingNtt<Z, P, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut t = self.spectrum;
        for c in &mut t {
            *c = -*c;
        }
        Self::new(t)
    }
}
