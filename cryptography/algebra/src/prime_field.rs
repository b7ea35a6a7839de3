use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use crate::bigint::UInt256;
use crate::duplex::{Absorb, Duplex, Squeeze};
use crate::ring::{DivisionRing, RandomSample, Ring};

/// Per-modulus constants of a prime field over four 64-bit limbs with
/// Montgomery reduction.
pub trait PrimeFieldParams: 'static + Copy + Eq + fmt::Debug {
    const BITS: u32;
    const M: UInt256;
    /// `R^2 mod M` with `R = 2^256`.
    const R2: UInt256;
    /// `-M^{-1} mod 2^64`.
    const RN: u64;
    /// `2^{-1}` as a plain representative.
    const TWO_INVERTED: UInt256;
    /// `(M - 1) / 2`, the Legendre-symbol exponent.
    const P_MINUS_1_HALVED: UInt256;
    /// The odd part of `M - 1`.
    const Q: UInt256;
    /// The 2-adicity of `M - 1`.
    const S: u32;
    /// `(Q + 1) / 2`, the Tonelli–Shanks seed exponent.
    const Q_PLUS_1_HALVED: UInt256;
    /// Selects Euler inversion (sparse) or extended binary GCD (dense).
    const HAS_SPARSE_MODULUS: bool;
}

/// A prime-field element in Montgomery form, always held in `[0, M)`.
pub struct PrimeField<P: PrimeFieldParams> {
    n: UInt256,
    _params: PhantomData<P>,
}

impl<P: PrimeFieldParams> PrimeField<P> {
    const fn from_raw(n: UInt256) -> Self {
        Self {
            n,
            _params: PhantomData,
        }
    }

    pub fn new(n: UInt256) -> Self {
        Self::from_raw(Self::to_form(&n))
    }

    /// Parses a big-endian hex literal of the plain representative.
    pub fn from_hex(hex: &str) -> Self {
        Self::new(UInt256::from_hex(hex))
    }

    fn reduce(lo: &UInt256, hi: &UInt256) -> UInt256 {
        // Montgomery reduction, word by word.
        let mut tt = [0u64; 8];
        tt[..4].copy_from_slice(&lo.limbs);
        tt[4..].copy_from_slice(&hi.limbs);
        let mut c: u128 = 0;
        for i in 0..4 {
            let mut ll: u128 = 0;
            let l = tt[i].wrapping_mul(P::RN);
            for j in 0..4 {
                ll += u128::from(l) * u128::from(P::M.limbs[j]) + u128::from(tt[i + j]);
                tt[i + j] = ll as u64;
                ll >>= 64;
            }
            c += u128::from(tt[i + 4]) + ll;
            tt[i + 4] = c as u64;
            c >>= 64;
        }
        let mut t = UInt256::new([tt[4], tt[5], tt[6], tt[7]]);
        if t >= P::M {
            t = t.subtracting(&P::M);
        }
        t
    }

    fn to_form(n: &UInt256) -> UInt256 {
        let (lo, hi) = n.widening_mul(&P::R2);
        Self::reduce(&lo, &hi)
    }

    fn from_form(n: &UInt256) -> UInt256 {
        Self::reduce(n, &UInt256::zero())
    }

    pub fn canonical(&self) -> UInt256 {
        Self::from_form(&self.n)
    }

    /// Raises to a plain big-integer exponent of at most `bits` bits.
    fn pow(&self, exponent: &UInt256, bits: u32) -> Self {
        let mut r = Self::one();
        for i in (0..bits as usize).rev() {
            r = r.square();
            if exponent.bit(i) {
                r *= *self;
            }
        }
        r
    }

    /// The Legendre symbol as a field element: one for residues, zero for
    /// zero, minus one for non-residues.
    fn is_quadratic_residue(&self) -> Self {
        self.pow(&P::P_MINUS_1_HALVED, P::BITS)
    }

    /// Tonelli–Shanks square root; `None` for quadratic non-residues.
    pub fn sqrt(&self) -> Option<Self> {
        let iqr = self.is_quadratic_residue();
        if iqr == Self::zero() {
            return Some(Self::zero());
        }
        if iqr != Self::one() {
            return None;
        }
        let mut z = Self::from_int(2);
        while z.is_quadratic_residue() == Self::one() {
            z += Self::one();
        }
        let mut m = P::S;
        let mut c = z.pow(&P::Q, P::BITS);
        let mut t = self.pow(&P::Q, P::BITS);
        let mut r = self.pow(&P::Q_PLUS_1_HALVED, P::BITS);
        loop {
            if t == Self::zero() {
                return Some(Self::zero());
            }
            if t == Self::one() {
                return Some(r);
            }
            let mut i = 1;
            let mut t2i = t.square();
            while t2i != Self::one() {
                t2i = t2i.square();
                i += 1;
            }
            let mut b = c;
            for _ in 0..m - i - 1 {
                b = b.square();
            }
            m = i;
            c = b.square();
            t *= c;
            r *= b;
        }
    }

    /// Bits of the canonical representative in little-endian order.
    pub fn bits_iter(&self) -> impl Iterator<Item = bool> {
        let canonical = self.canonical();
        (0..P::BITS as usize).map(move |i| canonical.bit(i))
    }
}

impl<P: PrimeFieldParams> Ring for PrimeField<P> {
    type BaseRing = Self;

    fn zero() -> Self {
        Self::from_raw(UInt256::zero())
    }

    fn one() -> Self {
        Self::new(UInt256::from_u64(1))
    }

    fn from_int(n: i64) -> Self {
        if n >= 0 {
            Self::new(UInt256::from_u64(n as u64))
        } else {
            Self::new(P::M.subtracting(&UInt256::from_u64(n.unsigned_abs())))
        }
    }

    fn double(&self) -> Self {
        let mut t = self.n.double();
        if t >= P::M {
            t = t.subtracting(&P::M);
        }
        Self::from_raw(t)
    }

    fn square(&self) -> Self {
        let (lo, hi) = self.n.square_wide();
        Self::from_raw(Self::reduce(&lo, &hi))
    }

    fn scale(&self, scalar: &Self) -> Self {
        *self * *scalar
    }
}

impl<P: PrimeFieldParams> crate::ring::ExtensionOf<Self> for PrimeField<P> {
    fn lift(z: Self) -> Self {
        z
    }
}

impl<P: PrimeFieldParams> DivisionRing for PrimeField<P> {
    fn invert(&self) -> Option<Self> {
        if P::HAS_SPARSE_MODULUS {
            if *self == Self::zero() {
                return None;
            }
            // Euler's theorem
            let phi_minus_1 = P::M.subtracting(&UInt256::from_u64(2));
            Some(self.pow(&phi_minus_1, P::BITS))
        } else {
            // Extended Binary GCD (classic algorithm)
            // https://eprint.iacr.org/2020/972
            let two_inverted = Self::new(P::TWO_INVERTED);
            let mut a = self.canonical();
            let mut b = P::M;
            let mut c = Self::one();
            let mut d = Self::zero();
            while !a.is_zero() {
                if a.is_even() {
                    a = a.halve();
                    c *= two_inverted;
                } else {
                    if a < b {
                        core::mem::swap(&mut a, &mut b);
                        core::mem::swap(&mut c, &mut d);
                    }
                    a = a.subtracting(&b);
                    a = a.halve();
                    c -= d;
                    c *= two_inverted;
                }
            }
            if b != UInt256::from_u64(1) {
                return None;
            }
            Some(d)
        }
    }
}

impl<P: PrimeFieldParams> RandomSample for PrimeField<P> {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut t = UInt256::random(rng);
        while t >= P::M {
            t = UInt256::random(rng);
        }
        Self::from_raw(Self::to_form(&t))
    }
}

impl<P: PrimeFieldParams> Absorb for PrimeField<P> {
    fn absorb<S: Duplex>(&self, sponge: &mut S) {
        for limb in self.canonical().limbs {
            sponge.absorb_bytes(&limb.to_le_bytes());
        }
    }
}

impl<P: PrimeFieldParams> Squeeze for PrimeField<P> {
    fn squeeze<S: Duplex>(sponge: &mut S) -> Self {
        loop {
            let mut bytes = [0; 32];
            sponge.squeeze_bytes(&mut bytes);
            let mut limbs = [0; 4];
            for (i, limb) in limbs.iter_mut().enumerate() {
                *limb = u64::from_le_bytes(bytes[i * 8..(i + 1) * 8].try_into().expect("8 bytes"));
            }
            // Trim to the modulus width before the rejection test.
            limbs[3] &= u64::MAX >> (256 - P::BITS).min(63);
            let candidate = UInt256::new(limbs);
            if candidate < P::M {
                return Self::from_raw(Self::to_form(&candidate));
            }
        }
    }
}

impl<P: PrimeFieldParams> Clone for PrimeField<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PrimeFieldParams> Copy for PrimeField<P> {}

impl<P: PrimeFieldParams> PartialEq for PrimeField<P> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
    }
}

impl<P: PrimeFieldParams> Eq for PrimeField<P> {}

impl<P: PrimeFieldParams> fmt::Debug for PrimeField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.canonical())
    }
}

impl<P: PrimeFieldParams> Add for PrimeField<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut t = self.n.adding(&other.n);
        if t >= P::M {
            t = t.subtracting(&P::M);
        }
        Self::from_raw(t)
    }
}

impl<P: PrimeFieldParams> AddAssign for PrimeField<P> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<P: PrimeFieldParams> Sub for PrimeField<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut t = self.n.subtracting(&other.n);
        if t >= P::M {
            // The subtraction wrapped below zero.
            t = t.adding(&P::M);
        }
        Self::from_raw(t)
    }
}

impl<P: PrimeFieldParams> SubAssign for PrimeField<P> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<P: PrimeFieldParams> Mul for PrimeField<P> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let (lo, hi) = self.n.widening_mul(&other.n);
        Self::from_raw(Self::reduce(&lo, &hi))
    }
}

impl<P: PrimeFieldParams> MulAssign for PrimeField<P> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<P: PrimeFieldParams> Neg for PrimeField<P> {
    type Output = Self;

    fn neg(self) -> Self {
        if self == Self::zero() {
            self
        } else {
            Self::from_raw(P::M.subtracting(&self.n))
        }
    }
}
