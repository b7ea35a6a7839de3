// Constants generated with rings.sage

use crate::zq::{MontgomeryRing, MontgomeryRingParams, NttParams};

/// 2⁶¹ + 2⁵⁹ + 2⁵⁴ + 2⁵ + 1
pub type Lm62Ring = MontgomeryRing<Lm62Params>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lm62Params;

impl MontgomeryRingParams for Lm62Params {
    const M: i64 = 2900318160026599457;
    const BITS: u32 = 62;
    const R2: i64 = 1882224917555981558;
    const RN: i64 = -629412166104022047;
    const IS_DIVISION_RING: bool = true;
    const TWO_INVERTED: Option<i64> = None;

    fn reduce(x: i64) -> i64 {
        let t = (x + (1 << 61)) >> 62;
        x - t * Self::M
    }
}

const TWIDDLES: [i64; 16] = [
    1044835113549954874,
    569218631026025462,
    -784935944205243435,
    572552586692549161,
    -361369180022199466,
    178484251486083901,
    -114684091461287305,
    -1101467716902666349,
    747721600660698373,
    -505064029198444890,
    -1050328543640198522,
    -69461906194906578,
    102519286186593439,
    -1172228903700312769,
    1182002436770437611,
    1070319519127119695,
];

impl NttParams for Lm62Params {
    fn twiddles() -> &'static [i64] {
        &TWIDDLES
    }

    fn inverse_twiddles() -> i64 {
        1152921504606846976
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{DivisionRing, RandomSample, Ring};

    #[test]
    fn ring_laws() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let a = Lm62Ring::random(&mut rng);
            let b = Lm62Ring::random(&mut rng);
            assert_eq!(a * b, b * a);
            assert_eq!((a + b) - b, a);
            assert_eq!(a.double(), a + a);
        }
    }

    #[test]
    fn inversion() {
        let a = Lm62Ring::from_int(98765);
        let inverted = a.invert().expect("nonzero element of a prime field");
        assert_eq!(a * inverted, Lm62Ring::one());
    }
}
