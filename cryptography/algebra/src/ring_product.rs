//! Component-wise ring structure on heterogeneous products, for CRT-style
//! residue systems.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use crate::ring::{RandomSample, Ring};

macro_rules! ring_product {
    ($Product:ident, $(($A:ident, $a:ident)),+) => {
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $Product<$($A),+> {
            $(pub $a: $A),+
        }

        impl<$($A),+> $Product<$($A),+> {
            pub const fn new($($a: $A),+) -> Self {
                Self { $($a),+ }
            }
        }

        impl<$($A: Ring<BaseRing = $A>),+> Ring for $Product<$($A),+> {
            type BaseRing = Self;

            fn zero() -> Self {
                Self::new($($A::zero()),+)
            }

            fn one() -> Self {
                Self::new($($A::one()),+)
            }

            fn from_int(n: i64) -> Self {
                Self::new($($A::from_int(n)),+)
            }

            fn double(&self) -> Self {
                Self::new($(self.$a.double()),+)
            }

            fn square(&self) -> Self {
                Self::new($(self.$a.square()),+)
            }

            fn scale(&self, scalar: &Self) -> Self {
                Self::new($(self.$a.scale(&scalar.$a)),+)
            }
        }

        impl<$($A: Ring),+> Add for $Product<$($A),+> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self::new($(self.$a + other.$a),+)
            }
        }

        impl<$($A: Ring),+> AddAssign for $Product<$($A),+> {
            fn add_assign(&mut self, other: Self) {
                $(self.$a += other.$a;)+
            }
        }

        impl<$($A: Ring),+> Sub for $Product<$($A),+> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self::new($(self.$a - other.$a),+)
            }
        }

        impl<$($A: Ring),+> SubAssign for $Product<$($A),+> {
            fn sub_assign(&mut self, other: Self) {
                $(self.$a -= other.$a;)+
            }
        }

        impl<$($A: Ring),+> Mul for $Product<$($A),+> {
            type Output = Self;

            fn mul(self, other: Self) -> Self {
                Self::new($(self.$a * other.$a),+)
            }
        }

        impl<$($A: Ring),+> MulAssign for $Product<$($A),+> {
            fn mul_assign(&mut self, other: Self) {
                $(self.$a *= other.$a;)+
            }
        }

        impl<$($A: Ring),+> Neg for $Product<$($A),+> {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new($(-self.$a),+)
            }
        }

        impl<$($A: Ring<BaseRing = $A>),+> crate::ring::ExtensionOf<Self> for $Product<$($A),+> {
            fn lift(z: Self) -> Self {
                z
            }
        }

        impl<$($A: Ring + RandomSample),+> RandomSample for $Product<$($A),+> {
            fn random<RG: Rng + ?Sized>(rng: &mut RG) -> Self {
                Self::new($($A::random(rng)),+)
            }
        }
    };
}

ring_product!(RingProduct2, (A, first), (B, second));
ring_product!(RingProduct3, (A, first), (B, second), (C, third));
ring_product!(RingProduct4, (A, first), (B, second), (C, third), (D, fourth));
