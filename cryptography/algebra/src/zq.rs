use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::distributions::Distribution;
use rand::Rng;

use crate::duplex::{Absorb, Duplex, Squeeze};
use crate::ring::{
    DivisionRing, EuclideanNorm, InfinityNorm, IntegerRing, NttRing, RandomSample, Ring,
    SampleWith,
};

/// Per-modulus constants of a signed Montgomery ring over `i64` with
/// `R = 2^64`.
pub trait MontgomeryRingParams: 'static + Copy + Eq + fmt::Debug {
    /// The modulus.
    const M: i64;
    /// Bits of the modulus.
    const BITS: u32;
    /// `R^2 mod M`, used to enter Montgomery form.
    const R2: i64;
    /// `M^{-1} mod R` as a signed 64-bit word.
    const RN: i64;
    /// Whether `M` is prime, enabling inversion by Euler's theorem.
    const IS_DIVISION_RING: bool;
    /// `2^{-1}` in Montgomery form, enabling the binary-GCD inversion.
    const TWO_INVERTED: Option<i64>;

    /// Cheap partial reduction applied after additive operations; keeps the
    /// representative within roughly `(-M, M)`.
    fn reduce(x: i64) -> i64;
}

/// Additional constants for rings that support the number-theoretic
/// transform.
pub trait NttParams: MontgomeryRingParams {
    /// Montgomery-form roots of unity in bit-reversed order; index 0 is one.
    fn twiddles() -> &'static [i64];

    /// Montgomery form of `twiddles().len()^{-1}`.
    fn inverse_twiddles() -> i64;
}

/// An integer ring modulo a compile-time prime, held in signed Montgomery
/// form. The stored representative is only partially reduced; equality and
/// the representative accessors go through a freeze.
pub struct MontgomeryRing<P: MontgomeryRingParams> {
    n: i64,
    _params: PhantomData<P>,
}

impl<P: MontgomeryRingParams> MontgomeryRing<P> {
    /// Wraps a raw Montgomery representative.
    pub(crate) const fn from_raw(n: i64) -> Self {
        Self {
            n,
            _params: PhantomData,
        }
    }

    pub(crate) const fn raw(&self) -> i64 {
        self.n
    }

    fn reduce_wide(x: i128) -> i64 {
        // Partial Montgomery reduction.
        let t = (x as i64).wrapping_mul(P::RN);
        ((x - i128::from(t) * i128::from(P::M)) >> 64) as i64
    }

    fn to_form(n: i64) -> i64 {
        Self::reduce_wide(i128::from(n) * i128::from(P::R2))
    }

    fn from_form(n: i64) -> i64 {
        Self::reduce_wide(i128::from(n))
    }

    fn freeze(x: i64) -> i64 {
        if x >= P::M {
            x - P::M
        } else if x < 0 {
            x + P::M
        } else {
            x
        }
    }

    pub(crate) fn pow_u64(&self, exponent: u64) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let bits = 64 - exponent.leading_zeros();
        let mut r = Self::one();
        for i in (0..bits).rev() {
            r = r.square();
            if (exponent >> i) & 1 == 1 {
                r *= *self;
            }
        }
        r
    }

}

impl<P: MontgomeryRingParams> Ring for MontgomeryRing<P> {
    type BaseRing = Self;

    fn zero() -> Self {
        Self::from_raw(0)
    }

    fn one() -> Self {
        Self::from_int(1)
    }

    fn from_int(n: i64) -> Self {
        Self::from_raw(Self::to_form(n))
    }

    fn double(&self) -> Self {
        Self::from_raw(P::reduce(self.n << 1))
    }

    fn square(&self) -> Self {
        Self::from_raw(Self::reduce_wide(i128::from(self.n) * i128::from(self.n)))
    }

    fn scale(&self, scalar: &Self) -> Self {
        *self * *scalar
    }
}

impl<P: MontgomeryRingParams> crate::ring::ExtensionOf<Self> for MontgomeryRing<P> {
    fn lift(z: Self) -> Self {
        z
    }
}

impl<P: MontgomeryRingParams> IntegerRing for MontgomeryRing<P> {
    fn modulus() -> i64 {
        P::M
    }

    fn canonical(&self) -> i64 {
        Self::freeze(self.balanced())
    }

    fn balanced(&self) -> i64 {
        Self::from_form(self.n)
    }
}

impl<P: MontgomeryRingParams> DivisionRing for MontgomeryRing<P> {
    fn invert(&self) -> Option<Self> {
        if P::IS_DIVISION_RING {
            if self.is_zero() {
                return None;
            }
            // Euler's theorem
            Some(self.pow_u64((P::M - 2) as u64))
        } else if let Some(two_inverted) = P::TWO_INVERTED {
            // Extended Binary GCD (classic algorithm)
            // https://eprint.iacr.org/2020/972
            let two_inverted = Self::from_raw(two_inverted);
            let mut a = self.canonical() as u64;
            let mut b = P::M as u64;
            let mut c = Self::one();
            let mut d = Self::zero();
            while a != 0 {
                if a & 1 == 0 {
                    a >>= 1;
                    c *= two_inverted;
                } else {
                    if a < b {
                        core::mem::swap(&mut a, &mut b);
                        core::mem::swap(&mut c, &mut d);
                    }
                    a -= b;
                    a >>= 1;
                    c -= d;
                    c *= two_inverted;
                }
            }
            if b != 1 {
                return None;
            }
            Some(d)
        } else {
            unreachable!("no inversion strategy for this parameter set")
        }
    }
}

impl<P: NttParams> NttRing for MontgomeryRing<P> {
    fn twiddle(index: usize) -> Self {
        Self::from_raw(P::twiddles()[index])
    }

    fn twiddle_count() -> usize {
        P::twiddles().len()
    }

    fn inverse_twiddles() -> Self {
        Self::from_raw(P::inverse_twiddles())
    }
}

impl<P: MontgomeryRingParams> InfinityNorm for MontgomeryRing<P> {
    fn check_infinity_norm(&self, bound: i64) -> bool {
        self.absolute() < bound
    }
}

impl<P: MontgomeryRingParams> EuclideanNorm for MontgomeryRing<P> {
    fn euclidean_norm(&self) -> f64 {
        self.absolute() as f64
    }
}

impl<P: MontgomeryRingParams> RandomSample for MontgomeryRing<P> {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let half = (P::M - 1) / 2;
        Self::from_int(rng.gen_range(-half..=half))
    }
}

impl<P: MontgomeryRingParams> SampleWith for MontgomeryRing<P> {
    fn random_with<R: Rng + ?Sized, D: Distribution<i64>>(rng: &mut R, dst: &D) -> Self {
        Self::from_int(dst.sample(rng))
    }
}

impl<P: MontgomeryRingParams> Absorb for MontgomeryRing<P> {
    fn absorb<S: Duplex>(&self, sponge: &mut S) {
        sponge.absorb_bytes(&(self.canonical() as u64).to_le_bytes());
    }
}

impl<P: MontgomeryRingParams> Squeeze for MontgomeryRing<P> {
    fn squeeze<S: Duplex>(sponge: &mut S) -> Self {
        let mask = u64::MAX >> (64 - P::BITS);
        loop {
            let mut bytes = [0; 8];
            sponge.squeeze_bytes(&mut bytes);
            let candidate = u64::from_le_bytes(bytes) & mask;
            if candidate < P::M as u64 {
                return Self::from_int(candidate as i64);
            }
        }
    }
}

impl<P: MontgomeryRingParams> Clone for MontgomeryRing<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: MontgomeryRingParams> Copy for MontgomeryRing<P> {}

impl<P: MontgomeryRingParams> PartialEq for MontgomeryRing<P> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl<P: MontgomeryRingParams> Eq for MontgomeryRing<P> {}

impl<P: MontgomeryRingParams> fmt::Debug for MontgomeryRing<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.balanced())
    }
}

impl<P: MontgomeryRingParams> Add for MontgomeryRing<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_raw(P::reduce(self.n + other.n))
    }
}

impl<P: MontgomeryRingParams> AddAssign for MontgomeryRing<P> {
    fn add_assign(&mut self, other: Self) {
        self.n = P::reduce(self.n + other.n);
    }
}

impl<P: MontgomeryRingParams> Sub for MontgomeryRing<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_raw(P::reduce(self.n - other.n))
    }
}

impl<P: MontgomeryRingParams> SubAssign for MontgomeryRing<P> {
    fn sub_assign(&mut self, other: Self) {
        self.n = P::reduce(self.n - other.n);
    }
}

impl<P: MontgomeryRingParams> Mul for MontgomeryRing<P> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::from_raw(Self::reduce_wide(i128::from(self.n) * i128::from(other.n)))
    }
}

impl<P: MontgomeryRingParams> MulAssign for MontgomeryRing<P> {
    fn mul_assign(&mut self, other: Self) {
        self.n = Self::reduce_wide(i128::from(self.n) * i128::from(other.n));
    }
}

impl<P: MontgomeryRingParams> Neg for MontgomeryRing<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}

/// Builds a bit-reversed twiddle table from a primitive root of unity of
/// order `2 * count`. Used by the parameter sets that do not carry a
/// generated constant table.
pub(crate) fn generate_twiddles<P: MontgomeryRingParams>(prou: i64, count: usize) -> Vec<i64> {
    assert!(count.is_power_of_two());
    let log = count.trailing_zeros();
    let psi = MontgomeryRing::<P>::from_int(prou);
    (0..count)
        .map(|j| psi.pow_u64(bit_reverse(j as u64, log)).raw())
        .collect()
}

fn bit_reverse(mut n: u64, bits: u32) -> u64 {
    let mut r = 0;
    for _ in 0..bits {
        r = (r << 1) | (n & 1);
        n >>= 1;
    }
    r
}
