//! Closed-form Lagrange interpolation from balanced samples at the
//! integer abscissae `-2, -1, 0, 1, 2, 3`.

use algebra::ring::{DivisionRing, Ring};

use crate::univariate::UnivariatePolynomial;

fn inverse<E: Ring>(n: i64) -> E::BaseRing
where
    E::BaseRing: DivisionRing,
{
    E::BaseRing::from_int(n)
        .invert()
        .expect("small integers are units")
}

pub fn balanced_linear<E: Ring>(z0: E, p1: E) -> UnivariatePolynomial<E> {
    UnivariatePolynomial::new(vec![z0, p1 - z0])
}

pub fn balanced_quadratic<E: Ring>(n1: E, z0: E, p1: E) -> UnivariatePolynomial<E>
where
    E::BaseRing: DivisionRing,
{
    let inv2 = inverse::<E>(2);

    let a = p1.scale(&inv2) + n1.scale(&inv2) - z0;
    let b = p1.scale(&inv2) - n1.scale(&inv2);
    let c = z0;
    UnivariatePolynomial::new(vec![c, b, a])
}

pub fn balanced_cubic<E: Ring>(n1: E, z0: E, p1: E, p2: E) -> UnivariatePolynomial<E>
where
    E::BaseRing: DivisionRing,
{
    let inv2 = inverse::<E>(2);
    let inv3 = inverse::<E>(3);
    let inv6 = inverse::<E>(6);

    let a = z0.scale(&inv2) - p1.scale(&inv2) + p2.scale(&inv6) - n1.scale(&inv6);
    let b = -z0 + p1.scale(&inv2) + n1.scale(&inv2);
    let c = -z0.scale(&inv2) + p1 - p2.scale(&inv6) - n1.scale(&inv3);
    let d = z0;
    UnivariatePolynomial::new(vec![d, c, b, a])
}

pub fn balanced_quartic<E: Ring>(n2: E, n1: E, z0: E, p1: E, p2: E) -> UnivariatePolynomial<E>
where
    E::BaseRing: DivisionRing,
{
    let mul_2_div_3 = E::BaseRing::from_int(2) * inverse::<E>(3);
    let mul_5_div_4 = E::BaseRing::from_int(5) * inverse::<E>(4);
    let inv4 = inverse::<E>(4);
    let inv6 = inverse::<E>(6);
    let inv12 = inverse::<E>(12);
    let inv24 = inverse::<E>(24);

    let a = z0.scale(&inv4) - p1.scale(&inv6) + p2.scale(&inv24) - n1.scale(&inv6)
        + n2.scale(&inv24);
    let b = -p1.scale(&inv6) + p2.scale(&inv12) + n1.scale(&inv6) - n2.scale(&inv12);
    let c = -z0.scale(&mul_5_div_4) + p1.scale(&mul_2_div_3) - p2.scale(&inv24)
        + n1.scale(&mul_2_div_3)
        - n2.scale(&inv24);
    let d = p1.scale(&mul_2_div_3) - p2.scale(&inv12) - n1.scale(&mul_2_div_3) + n2.scale(&inv12);
    let e = z0;
    UnivariatePolynomial::new(vec![e, d, c, b, a])
}

pub fn balanced_quintic<E: Ring>(
    n2: E,
    n1: E,
    z0: E,
    p1: E,
    p2: E,
    p3: E,
) -> UnivariatePolynomial<E>
where
    E::BaseRing: DivisionRing,
{
    let mul_2_div_3 = E::BaseRing::from_int(2) * inverse::<E>(3);
    let mul_5_div_4 = E::BaseRing::from_int(5) * inverse::<E>(4);
    let mul_5_div_12 = E::BaseRing::from_int(5) * inverse::<E>(12);
    let mul_7_div_12 = E::BaseRing::from_int(7) * inverse::<E>(12);
    let mul_7_div_24 = E::BaseRing::from_int(7) * inverse::<E>(24);
    let inv2 = inverse::<E>(2);
    let inv3 = inverse::<E>(3);
    let inv4 = inverse::<E>(4);
    let inv6 = inverse::<E>(6);
    let inv12 = inverse::<E>(12);
    let inv20 = inverse::<E>(20);
    let inv24 = inverse::<E>(24);
    let inv30 = inverse::<E>(30);
    let inv120 = inverse::<E>(120);

    let a = -z0.scale(&inv12) + p1.scale(&inv12) - p2.scale(&inv24) + p3.scale(&inv120)
        + n1.scale(&inv24)
        - n2.scale(&inv120);
    let b = z0.scale(&inv4) - p1.scale(&inv6) + p2.scale(&inv24) - n1.scale(&inv6)
        + n2.scale(&inv24);
    let c = z0.scale(&mul_5_div_12) - p1.scale(&mul_7_div_12) + p2.scale(&mul_7_div_24)
        - p3.scale(&inv24)
        - n1.scale(&inv24)
        - n2.scale(&inv24);
    let d = -z0.scale(&mul_5_div_4) + p1.scale(&mul_2_div_3) - p2.scale(&inv24)
        + n1.scale(&mul_2_div_3)
        - n2.scale(&inv24);
    let e = -z0.scale(&inv3) + p1 - p2.scale(&inv4) + p3.scale(&inv30) - n1.scale(&inv2)
        + n2.scale(&inv20);
    let f = z0;
    UnivariatePolynomial::new(vec![f, e, d, c, b, a])
}
