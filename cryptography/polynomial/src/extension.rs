// Moduli and inversion exponents generated with rings.sage

use algebra::dilithium::DilithiumRing;
use algebra::fermat::FermatRing;
use algebra::pervushin::PervushinRing;
use algebra::ring::Ring;
use algebra::solinas62::Solinas62Ring;

use crate::convolution;
use crate::ring::{PolynomialRing, PolynomialRingParams};
use crate::ring_ntt::{NttRingParams, PolynomialRingNtt};

/// The constant term of the Solinas62 binomial moduli `x^d - ζ`.
const SOLINAS62_ZETA: i64 = -0x3f01_7d53_9af5_221c;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Solinas62Degree2Params;

impl PolynomialRingParams<Solinas62Ring, 2> for Solinas62Degree2Params {
    fn convolute(r: &mut [Solinas62Ring; 2], a: &[Solinas62Ring; 2], b: &[Solinas62Ring; 2]) {
        convolution::binomial(r, a, b, Solinas62Ring::from_int(SOLINAS62_ZETA));
    }

    const INVERSION_R1: Option<&'static [u64]> = Some(&[0x3fff_ffff_ffff_fee1]);
}

pub type Solinas62RingDegree2 = PolynomialRing<Solinas62Ring, Solinas62Degree2Params, 2>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Solinas62Degree3Params;

impl PolynomialRingParams<Solinas62Ring, 3> for Solinas62Degree3Params {
    fn convolute(r: &mut [Solinas62Ring; 3], a: &[Solinas62Ring; 3], b: &[Solinas62Ring; 3]) {
        let m = [
            Solinas62Ring::from_int(2),
            Solinas62Ring::zero(),
            Solinas62Ring::one(),
            Solinas62Ring::one(),
        ];
        convolution::quotient(r, a, b, &m);
    }

    const INVERSION_R1: Option<&'static [u64]> =
        Some(&[0xc000_0000_0001_40a2, 0x0fff_ffff_ffff_ff70]);
}

pub type Solinas62RingDegree3 = PolynomialRing<Solinas62Ring, Solinas62Degree3Params, 3>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Solinas62Degree4Params;

impl PolynomialRingParams<Solinas62Ring, 4> for Solinas62Degree4Params {
    fn convolute(r: &mut [Solinas62Ring; 4], a: &[Solinas62Ring; 4], b: &[Solinas62Ring; 4]) {
        let m = [
            Solinas62Ring::from_int(-SOLINAS62_ZETA),
            Solinas62Ring::zero(),
            Solinas62Ring::zero(),
            Solinas62Ring::zero(),
            Solinas62Ring::one(),
        ];
        convolution::quotient(r, a, b, &m);
    }

    const INVERSION_R1: Option<&'static [u64]> = Some(&[
        0x7fff_ffff_fe98_8943,
        0x4000_0000_0000_f0c1,
        0x03ff_ffff_ffff_ffca,
    ]);
}

pub type Solinas62RingDegree4 = PolynomialRing<Solinas62Ring, Solinas62Degree4Params, 4>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PervushinDegree2Params;

impl PolynomialRingParams<PervushinRing, 2> for PervushinDegree2Params {
    fn convolute(r: &mut [PervushinRing; 2], a: &[PervushinRing; 2], b: &[PervushinRing; 2]) {
        convolution::negacyclic(r, a, b);
    }

    const INVERSION_R1: Option<&'static [u64]> = Some(&[0x1fff_ffff_ffff_ffff]);
    const CYCLOTOMIC_INDEX: usize = 4;
}

pub type PervushinRingDegree2 = PolynomialRing<PervushinRing, PervushinDegree2Params, 2>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PervushinDegree3Params;

impl PolynomialRingParams<PervushinRing, 3> for PervushinDegree3Params {
    fn convolute(r: &mut [PervushinRing; 3], a: &[PervushinRing; 3], b: &[PervushinRing; 3]) {
        let m = [
            PervushinRing::from_int(2),
            PervushinRing::zero(),
            PervushinRing::one(),
            PervushinRing::one(),
        ];
        convolution::quotient(r, a, b, &m);
    }

    const INVERSION_R1: Option<&'static [u64]> =
        Some(&[0xe000_0000_0000_0000, 0x03ff_ffff_ffff_ffff]);
}

pub type PervushinRingDegree3 = PolynomialRing<PervushinRing, PervushinDegree3Params, 3>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PervushinDegree4Params;

impl PolynomialRingParams<PervushinRing, 4> for PervushinDegree4Params {
    fn convolute(r: &mut [PervushinRing; 4], a: &[PervushinRing; 4], b: &[PervushinRing; 4]) {
        let m = [
            PervushinRing::one(),
            PervushinRing::zero(),
            PervushinRing::zero(),
            PervushinRing::one(),
            PervushinRing::one(),
        ];
        convolution::quotient(r, a, b, &m);
    }

    const INVERSION_R1: Option<&'static [u64]> = Some(&[
        0x3fff_ffff_ffff_ffff,
        0xf800_0000_0000_0000,
        0x007f_ffff_ffff_ffff,
    ]);
}

pub type PervushinRingDegree4 = PolynomialRing<PervushinRing, PervushinDegree4Params, 4>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Solinas62Degree64Params;

impl PolynomialRingParams<Solinas62Ring, 64> for Solinas62Degree64Params {
    fn convolute(r: &mut [Solinas62Ring; 64], a: &[Solinas62Ring; 64], b: &[Solinas62Ring; 64]) {
        convolution::negacyclic(r, a, b);
    }

    const CYCLOTOMIC_INDEX: usize = 128;
}

pub type Solinas62RingDegree64 = PolynomialRing<Solinas62Ring, Solinas62Degree64Params, 64>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Solinas62Degree64NttParams;

impl NttRingParams<Solinas62Ring, 64> for Solinas62Degree64NttParams {
    type Iso = Solinas62Degree64Params;

    const CYCLOTOMIC_INDEX: usize = 128;
}

pub type Solinas62RingDegree64Ntt =
    PolynomialRingNtt<Solinas62Ring, Solinas62Degree64NttParams, 64>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FermatDegree1024Params;

impl PolynomialRingParams<FermatRing, 1024> for FermatDegree1024Params {
    fn convolute(r: &mut [FermatRing; 1024], a: &[FermatRing; 1024], b: &[FermatRing; 1024]) {
        convolution::negacyclic(r, a, b);
    }

    const CYCLOTOMIC_INDEX: usize = 2048;
}

pub type FermatRingDegree1024 = PolynomialRing<FermatRing, FermatDegree1024Params, 1024>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FermatDegree1024NttParams;

impl NttRingParams<FermatRing, 1024> for FermatDegree1024NttParams {
    type Iso = FermatDegree1024Params;

    const CYCLOTOMIC_INDEX: usize = 2048;
}

pub type FermatRingDegree1024Ntt = PolynomialRingNtt<FermatRing, FermatDegree1024NttParams, 1024>;

/*
 * CRYSTALS-Dilithium (Version 3.1)
 * https://pq-crystals.org/dilithium/data/dilithium-specification-round3-20210208.pdf
 */

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DilithiumDegree256Params;

impl PolynomialRingParams<DilithiumRing, 256> for DilithiumDegree256Params {
    fn convolute(r: &mut [DilithiumRing; 256], a: &[DilithiumRing; 256], b: &[DilithiumRing; 256]) {
        convolution::negacyclic(r, a, b);
    }

    const CYCLOTOMIC_INDEX: usize = 512;
}

pub type DilithiumRingDegree256 = PolynomialRing<DilithiumRing, DilithiumDegree256Params, 256>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DilithiumCyclotomicParams;

impl NttRingParams<DilithiumRing, 256> for DilithiumCyclotomicParams {
    type Iso = DilithiumDegree256Params;

    const CYCLOTOMIC_INDEX: usize = 512;
}

/// The CRYSTALS-Dilithium cyclotomic ring in NTT form.
pub type DilithiumRq = PolynomialRingNtt<DilithiumRing, DilithiumCyclotomicParams, 256>;
