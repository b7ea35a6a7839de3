//! A LatticeFold-style folding engine: Ajtai-committed witness chunks,
//! the combined evaluation/norm sum-check polynomials, and the
//! Fiat–Shamir transcripts driving them.

pub mod fold;
pub mod gadget;
pub mod polynomials;
pub mod transcript;

use core::fmt;
use core::marker::PhantomData;

use algebra::ring::{NttRing, Ring};
use algebra::solinas62::Solinas62Ring;
use polynomial::convolution;
use polynomial::ring::{PolynomialRing, PolynomialRingParams};
use polynomial::ring_ntt::{NttRingParams, PolynomialRingNtt};

pub use fold::{FoldingProof, LatticeFold};
pub use gadget::RadixDecompose;
pub use polynomials::{GEval, GFold, GNorm, G1, G2};
pub use transcript::FiatShamir;

/// The norm base of the engine: witnesses are bounded to `|f|∞ ≤ 1`.
pub const B_SMALL: i64 = 2;

/// Parallel witness chunks per folding side.
pub const K: usize = 16;

/// Frequency bins of the witness ring's transform.
pub const T: usize = 16;

/// The gadget radix.
pub const B_RADIX: i64 = 65536;

/// Degree of the witness ring.
pub const D: usize = 64;

/// Rows of the Ajtai commitment matrix.
pub const KAPPA: usize = 16;

/// The negacyclic witness ring `Zq[x]/(x⁶⁴ + 1)` in coefficient form.
pub struct WitnessRingParams<Z>(PhantomData<Z>);

impl<Z> Clone for WitnessRingParams<Z> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<Z> Copy for WitnessRingParams<Z> {}

impl<Z> PartialEq for WitnessRingParams<Z> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<Z> Eq for WitnessRingParams<Z> {}

impl<Z> fmt::Debug for WitnessRingParams<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WitnessRingParams")
    }
}

impl<Z: Ring + 'static> PolynomialRingParams<Z, D> for WitnessRingParams<Z> {
    fn convolute(r: &mut [Z; D], a: &[Z; D], b: &[Z; D]) {
        convolution::negacyclic(r, a, b);
    }

    const CYCLOTOMIC_INDEX: usize = 2 * D;
}

pub type WitnessRing<Z> = PolynomialRing<Z, WitnessRingParams<Z>, D>;

/// The same ring in NTT form, used by the binding commitment.
pub struct WitnessRingNttParams<Z>(PhantomData<Z>);

impl<Z> Clone for WitnessRingNttParams<Z> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<Z> Copy for WitnessRingNttParams<Z> {}

impl<Z> PartialEq for WitnessRingNttParams<Z> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<Z> Eq for WitnessRingNttParams<Z> {}

impl<Z> fmt::Debug for WitnessRingNttParams<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WitnessRingNttParams")
    }
}

impl<Z: Ring + NttRing + 'static> NttRingParams<Z, D> for WitnessRingNttParams<Z> {
    type Iso = WitnessRingParams<Z>;

    const CYCLOTOMIC_INDEX: usize = 2 * D;
}

pub type WitnessRingNtt<Z> = PolynomialRingNtt<Z, WitnessRingNttParams<Z>, D>;

/// The engine's canonical scalar instantiation.
pub type Zq = Solinas62Ring;
pub type Rq = WitnessRing<Zq>;
pub type RqNtt = WitnessRingNtt<Zq>;
/// The extension ring the sum-check challenges live in.
pub type Fq = polynomial::extension::Solinas62RingDegree2;
