// Constants generated with rings.sage

use crate::zq::{MontgomeryRing, MontgomeryRingParams, NttParams};

/// 2⁶² - 2⁸ - 2⁵ + 1
pub type Solinas62Ring = MontgomeryRing<Solinas62Params>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Solinas62Params;

impl MontgomeryRingParams for Solinas62Params {
    const M: i64 = 4611686018427387617;
    const BITS: u32 = 62;
    const R2: i64 = 1317904;
    const RN: i64 = -3454747365720865503;
    const IS_DIVISION_RING: bool = true;
    const TWO_INVERTED: Option<i64> = Some(574);

    fn reduce(x: i64) -> i64 {
        let t = (x + (1 << 61)) >> 62;
        x - t * Self::M
    }
}

const TWIDDLES: [i64; 16] = [
    1148,
    1909850507366759230,
    1925695278238998043,
    -1196916019830996660,
    -990812595794006616,
    -750689347914722583,
    25775166106861705,
    147213721977915467,
    -769555794185807974,
    -500579210516158037,
    -1816761452615928001,
    1463977254396149782,
    -1276567290860230089,
    -802780904022862126,
    500001058544660596,
    -1174682222540695415,
];

impl NttParams for Solinas62Params {
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
    use crate::ring::{DivisionRing, InfinityNorm, IntegerRing, NttRing, RandomSample, Ring};

    #[test]
    fn identities() {
        let a = Solinas62Ring::from_int(17);
        assert_eq!(a + Solinas62Ring::zero(), a);
        assert_eq!(a * Solinas62Ring::one(), a);
        assert_eq!(a - a, Solinas62Ring::zero());
        assert_eq!(a + (-a), Solinas62Ring::zero());
    }

    #[test]
    fn ring_laws() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let a = Solinas62Ring::random(&mut rng);
            let b = Solinas62Ring::random(&mut rng);
            let c = Solinas62Ring::random(&mut rng);
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!((a + b) + c, a + (b + c));
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a.double(), a + a);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn representatives() {
        assert_eq!(Solinas62Ring::from_int(-1).balanced(), -1);
        assert_eq!(
            Solinas62Ring::from_int(-1).canonical(),
            Solinas62Params::M - 1
        );
        assert_eq!(Solinas62Ring::from_int(-1).absolute(), 1);
        assert_eq!(
            Solinas62Ring::from_int(-1),
            Solinas62Ring::from_int(Solinas62Params::M - 1)
        );
    }

    #[test]
    fn inversion() {
        let mut rng = rand::thread_rng();
        assert_eq!(Solinas62Ring::zero().invert(), None);
        for _ in 0..16 {
            let a = Solinas62Ring::random(&mut rng);
            if let Some(inverted) = a.invert() {
                assert_eq!(a * inverted, Solinas62Ring::one());
            }
        }
    }

    #[test]
    fn infinity_norm() {
        assert!(Solinas62Ring::from_int(7).check_infinity_norm(8));
        assert!(!Solinas62Ring::from_int(8).check_infinity_norm(8));
        assert!(Solinas62Ring::from_int(-7).check_infinity_norm(8));
        assert!(!Solinas62Ring::from_int(-8).check_infinity_norm(8));
    }

    proptest::proptest! {
        #[test]
        fn embedding_respects_the_ring_operations(a in -1_000_000_000_i64..1_000_000_000, b in -1_000_000_000_i64..1_000_000_000) {
            let x = Solinas62Ring::from_int(a);
            let y = Solinas62Ring::from_int(b);
            proptest::prop_assert_eq!(x + y, Solinas62Ring::from_int(a + b));
            proptest::prop_assert_eq!(x - y, Solinas62Ring::from_int(a - b));
            proptest::prop_assert_eq!(x * y, Solinas62Ring::from_int(a * b));
        }

        #[test]
        fn balanced_representatives_round_trip(a in proptest::prelude::any::<i64>()) {
            let x = Solinas62Ring::from_int(a);
            proptest::prop_assert_eq!(Solinas62Ring::from_int(x.balanced()), x);
            proptest::prop_assert_eq!(Solinas62Ring::from_int(x.canonical()), x);
            proptest::prop_assert!(x.canonical() >= 0 && x.canonical() < Solinas62Params::M);
        }
    }

    #[test]
    fn twiddles_start_at_one() {
        assert_eq!(Solinas62Ring::twiddle(0), Solinas62Ring::one());
        assert_eq!(Solinas62Ring::twiddle_count(), 16);
        // The first stage twiddle is a primitive fourth root of unity.
        let i = Solinas62Ring::twiddle(1);
        assert_eq!(i.square(), -Solinas62Ring::one());
    }
}
