// Constants generated with rings.sage

use crate::bigint::UInt256;
use crate::prime_field::{PrimeField, PrimeFieldParams};

/// The field of 2²⁵⁵ - 19 elements.
pub type Field25519 = PrimeField<Field25519Params>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Field25519Params;

impl PrimeFieldParams for Field25519Params {
    const BITS: u32 = 255;
    const M: UInt256 = UInt256::new([
        0xFFFFFFFFFFFFFFED,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x7FFFFFFFFFFFFFFF,
    ]);
    const R2: UInt256 = UInt256::new([0x00000000000005A4, 0, 0, 0]);
    const RN: u64 = 0x86BCA1AF286BCA1B;
    const TWO_INVERTED: UInt256 = UInt256::new([
        0xFFFFFFFFFFFFFFF7,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFFFF,
    ]);
    const P_MINUS_1_HALVED: UInt256 = UInt256::new([
        0xFFFFFFFFFFFFFFF6,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFFFF,
    ]);
    const Q: UInt256 = UInt256::new([
        0xFFFFFFFFFFFFFFFB,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x1FFFFFFFFFFFFFFF,
    ]);
    const S: u32 = 2;
    const Q_PLUS_1_HALVED: UInt256 = UInt256::new([
        0xFFFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x0FFFFFFFFFFFFFFF,
    ]);
    const HAS_SPARSE_MODULUS: bool = false;
}
