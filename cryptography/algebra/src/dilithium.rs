// Constants generated with rings.sage

use std::sync::OnceLock;

use crate::zq::{generate_twiddles, MontgomeryRing, MontgomeryRingParams, NttParams};

/// 2²³ - 2¹³ + 1, the CRYSTALS-Dilithium modulus.
pub type DilithiumRing = MontgomeryRing<DilithiumParams>;

/// Primitive 512-th root of unity.
const PROU: i64 = 1753;
const PROU_DEGREE: usize = 256;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DilithiumParams;

impl MontgomeryRingParams for DilithiumParams {
    const M: i64 = 8380417;
    const BITS: u32 = 23;
    const R2: i64 = 7838417;
    const RN: i64 = 1732267787797143553;
    const IS_DIVISION_RING: bool = true;
    const TWO_INVERTED: Option<i64> = None;

    fn reduce(x: i64) -> i64 {
        let t = (x + (1 << 22)) >> 23;
        x - t * Self::M
    }
}

impl NttParams for DilithiumParams {
    fn twiddles() -> &'static [i64] {
        static TABLE: OnceLock<Vec<i64>> = OnceLock::new();
        TABLE.get_or_init(|| generate_twiddles::<DilithiumParams>(PROU, PROU_DEGREE))
    }

    fn inverse_twiddles() -> i64 {
        static INVERSE: OnceLock<i64> = OnceLock::new();
        *INVERSE.get_or_init(|| {
            use crate::ring::{DivisionRing, Ring};
            DilithiumRing::from_int(PROU_DEGREE as i64)
                .invert()
                .expect("the transform length is a unit")
                .raw()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{NttRing, Ring};

    #[test]
    fn twiddle_table() {
        assert_eq!(DilithiumRing::twiddle_count(), 256);
        assert_eq!(DilithiumRing::twiddle(0), DilithiumRing::one());
        let i = DilithiumRing::twiddle(1);
        assert_eq!(i.square(), -DilithiumRing::one());
    }
}
