// Constants generated with rings.sage

use crate::zq::{MontgomeryRing, MontgomeryRingParams};

/// 2⁶¹ - 1
pub type PervushinRing = MontgomeryRing<PervushinParams>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PervushinParams;

impl MontgomeryRingParams for PervushinParams {
    const M: i64 = 2305843009213693951;
    const BITS: u32 = 61;
    const R2: i64 = 64;
    const RN: i64 = -2305843009213693953;
    const IS_DIVISION_RING: bool = true;
    const TWO_INVERTED: Option<i64> = Some(4);

    fn reduce(x: i64) -> i64 {
        (x & Self::M) + (x >> 61)
    }
}
