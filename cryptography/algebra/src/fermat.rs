// Constants generated with rings.sage

use std::sync::OnceLock;

use crate::zq::{generate_twiddles, MontgomeryRing, MontgomeryRingParams, NttParams};

/// 2¹⁶ + 1
pub type FermatRing = MontgomeryRing<FermatParams>;

/// Primitive 2048-th root of unity, 3³² mod M.
const PROU: i64 = 61869;
const PROU_DEGREE: usize = 1024;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FermatParams;

impl MontgomeryRingParams for FermatParams {
    const M: i64 = 65537;
    const BITS: u32 = 17;
    const R2: i64 = 1;
    const RN: i64 = -281470681808895;
    const IS_DIVISION_RING: bool = true;
    const TWO_INVERTED: Option<i64> = None;

    fn reduce(x: i64) -> i64 {
        (x & 0xFFFF) - (x >> 16)
    }
}

impl NttParams for FermatParams {
    fn twiddles() -> &'static [i64] {
        static TABLE: OnceLock<Vec<i64>> = OnceLock::new();
        TABLE.get_or_init(|| generate_twiddles::<FermatParams>(PROU, PROU_DEGREE))
    }

    fn inverse_twiddles() -> i64 {
        static INVERSE: OnceLock<i64> = OnceLock::new();
        *INVERSE.get_or_init(|| {
            use crate::ring::{DivisionRing, Ring};
            FermatRing::from_int(PROU_DEGREE as i64)
                .invert()
                .expect("the transform length is a unit")
                .raw()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{IntegerRing, NttRing, Ring};

    #[test]
    fn wraparound() {
        assert_eq!(FermatRing::from_int(65537).canonical(), 0);
        assert_eq!(FermatRing::from_int(65538), FermatRing::one());
        assert_eq!(FermatRing::from_int(-1).canonical(), 65536);
    }

    #[test]
    fn twiddle_table() {
        assert_eq!(FermatRing::twiddle_count(), 1024);
        assert_eq!(FermatRing::twiddle(0), FermatRing::one());
        // The first stage twiddle squares to -1: the root has order 2048.
        let i = FermatRing::twiddle(1);
        assert_eq!(i.square(), -FermatRing::one());
        assert_eq!(
            FermatRing::inverse_twiddles() * FermatRing::from_int(1024),
            FermatRing::one()
        );
    }
}
