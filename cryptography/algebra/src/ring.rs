use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::distributions::Distribution;
use rand::Rng;

/// The capability shared by every algebraic structure in this workspace:
/// a commutative ring with identity elements, doubling and squaring
/// shortcuts, and scalar multiplication by its base ring.
///
/// Scalar rings are modules over themselves (`BaseRing = Self`); polynomial
/// and extension rings are modules over their coefficient ring.
pub trait Ring:
    Sized
    + Copy
    + Eq
    + Debug
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Neg<Output = Self>
{
    type BaseRing: Ring;

    fn zero() -> Self;
    fn one() -> Self;

    /// Embeds a small signed integer.
    fn from_int(n: i64) -> Self;

    fn double(&self) -> Self;

    fn square(&self) -> Self {
        *self * *self
    }

    /// Multiplication by a base-ring scalar.
    fn scale(&self, scalar: &Self::BaseRing) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Rings that contain `Z` as a subring, by the constant-coefficient
/// embedding. Every ring is an extension of itself.
pub trait ExtensionOf<Z: Ring>: Ring {
    fn lift(z: Z) -> Self;
}

/// Rings where every non-zero element has a multiplicative inverse, or at
/// least where an inversion procedure exists that reports non-units.
pub trait DivisionRing: Ring {
    /// Returns `None` for zero and for non-units.
    fn invert(&self) -> Option<Self>;
}

/// Scalar rings of integers modulo `M` with a signed representative system.
pub trait IntegerRing: Ring {
    fn modulus() -> i64;

    /// Representative in `[0, M)`.
    fn canonical(&self) -> i64;

    /// Centered representative.
    fn balanced(&self) -> i64;

    /// Magnitude of the centered representative.
    fn absolute(&self) -> i64 {
        self.balanced().abs()
    }
}

/// Scalar rings carrying a table of roots of unity for the number-theoretic
/// transform. The table is in bit-reversed order; index 0 holds one.
pub trait NttRing: Ring {
    fn twiddle(index: usize) -> Self;

    fn twiddle_count() -> usize;

    /// The scaling factor undone at the end of the inverse transform,
    /// `twiddle_count()^{-1}`.
    fn inverse_twiddles() -> Self;
}

/// The infinity norm over the centered representatives.
pub trait InfinityNorm {
    /// True iff every coordinate magnitude is strictly below `bound`.
    fn check_infinity_norm(&self, bound: i64) -> bool;
}

/// The Euclidean norm over the centered representatives.
pub trait EuclideanNorm {
    fn euclidean_norm(&self) -> f64;
}

/// Uniform sampling over the whole structure.
pub trait RandomSample: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// Sampling with a caller-supplied coefficient distribution, e.g. ternary
/// or discrete Gaussian.
pub trait SampleWith: Sized {
    fn random_with<R: Rng + ?Sized, D: Distribution<i64>>(rng: &mut R, dst: &D) -> Self;
}
