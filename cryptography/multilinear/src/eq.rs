use core::ops::{Mul, MulAssign};

use algebra::ring::{ExtensionOf, Ring};

use crate::fuse::Fuse;
use crate::multivariate::{Homomorph, MultivariatePolynomial};

/// The equality extension `Eq(r, x) = ∏ᵢ (2·rᵢ·xᵢ - rᵢ - xᵢ + 1)`,
/// carried with a running scalar factor `z`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EqExtension<E: Ring> {
    pub coefficients: Vec<E>,
    pub z: E,
}

impl<E: Ring> EqExtension<E> {
    pub fn new(coefficients: Vec<E>) -> Self {
        Self {
            coefficients,
            z: E::one(),
        }
    }

    pub fn with_scale(coefficients: Vec<E>, z: E) -> Self {
        Self { coefficients, z }
    }

    /// The table of `Eq(r, b)·z` over all vertices `b` of the hypercube
    /// spanned by `coefficients[offset..]`.
    pub(crate) fn table(coefficients: &[E], z: E, offset: usize) -> Vec<E> {
        let mut r = vec![E::zero(); 1 << (coefficients.len() - offset)];
        r[0] = z;
        let mut j = 1;
        for i in (offset..coefficients.len()).rev() {
            for k in 0..j {
                r[k + j] = r[k] * coefficients[i];
                let high = r[k + j];
                r[k] -= high;
            }
            j <<= 1;
        }
        r
    }

    /// All hypercube evaluations, in composed-index order.
    pub fn hypercube_evaluations(&self) -> Vec<E> {
        Self::table(&self.coefficients, self.z, 0)
    }
}

impl<E: Ring> MultivariatePolynomial<E> for EqExtension<E> {
    fn degree(&self) -> usize {
        1
    }

    fn variables(&self) -> usize {
        self.coefficients.len()
    }

    fn evaluate(&self, point: &[E]) -> E {
        let mut pi = self.z;
        for (c, x) in self.coefficients.iter().zip(point) {
            pi *= (*c * *x).double() - *c - *x + E::one();
        }
        pi
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let c0 = self.coefficients[0];
        let ze = self.z
            * match e {
                -2 => E::from_int(3) - c0 - c0.double().double(),
                -1 => E::from_int(2) - c0 - c0.double(),
                0 => E::one() - c0,
                1 => c0,
                2 => c0.double() + c0 - E::one(),
                3 => c0.double().double() + c0 - E::from_int(2),
                4 => c0.double().double().double() - c0 - E::from_int(3),
                _ => unreachable!("symbolic bind at {e}"),
            };
        fuse.apply_slice(hypercube, Self::table(&self.coefficients, ze, 1));
    }

    fn bind(&mut self, e: &E) {
        let c0 = self.coefficients[0];
        self.z *= (c0 * *e).double() - c0 - *e + E::one();
        self.coefficients.remove(0);
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for EqExtension<E> {
    type Output = EqExtension<S>;

    fn homomorph(&self) -> EqExtension<S> {
        EqExtension {
            coefficients: self.coefficients.iter().map(|c| S::lift(*c)).collect(),
            z: S::lift(self.z),
        }
    }
}

/// Scalar multiplication folds into the carried factor.
impl<E: Ring> Mul<E> for EqExtension<E> {
    type Output = Self;

    fn mul(self, other: E) -> Self {
        Self {
            z: self.z * other,
            coefficients: self.coefficients,
        }
    }
}

impl<E: Ring> MulAssign<E> for EqExtension<E> {
    fn mul_assign(&mut self, other: E) {
        self.z *= other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypercube::Hypercube;
    use algebra::solinas62::Solinas62Ring as Z;

    fn z(n: i64) -> Z {
        Z::from_int(n)
    }

    fn zs(values: &[i64]) -> Vec<Z> {
        values.iter().map(|n| z(*n)).collect()
    }

    #[test]
    fn meta() {
        let eq = EqExtension::new(zs(&[1, 0, 0]));
        assert_eq!(eq.degree(), 1);
        assert_eq!(eq.variables(), 3);
    }

    #[test]
    fn indicator_on_the_hypercube() {
        let point = zs(&[1, 0, 0]);
        let eq = EqExtension::new(point.clone());
        let hypercube = Hypercube::new(3);
        for vertex in hypercube.decomposed::<Z>() {
            if vertex == point {
                assert_eq!(eq.evaluate(&vertex), Z::one());
            } else {
                assert_eq!(eq.evaluate(&vertex), Z::zero());
            }
        }
    }

    #[test]
    fn hypercube_evaluations_match_pointwise() {
        let eq = EqExtension::new(zs(&[45, 46, 47]));
        let pis = eq.hypercube_evaluations();
        let hypercube = Hypercube::new(3);
        for (index, vertex) in hypercube.composed().zip(hypercube.decomposed::<Z>()) {
            assert_eq!(eq.evaluate(&vertex), pis[index]);
        }
    }

    #[test]
    fn scalar_multiplication() {
        let eq = EqExtension::new(zs(&[2, 3, 5, 7]));
        let b = z(11);
        let r = zs(&[13, 17, 23, 27]);
        assert_eq!(eq.evaluate(&r) * b, (eq * b).evaluate(&r));
    }

    #[test]
    fn concrete_bind_specializes_a_variable() {
        let eq1 = EqExtension::new(zs(&[2, 3, 4]));
        let r1 = zs(&[5, 6, 7]);
        let mut eq2 = eq1.clone();
        eq2.bind(&z(5));
        let r2 = zs(&[6, 7]);
        let mut eq3 = eq2.clone();
        eq3.bind(&z(6));
        let r3 = zs(&[7]);
        assert_eq!(eq1.evaluate(&r1), eq2.evaluate(&r2));
        assert_eq!(eq1.evaluate(&r1), eq3.evaluate(&r3));
    }

    #[test]
    fn symbolic_bind_agrees_with_concrete_bind() {
        let eq = EqExtension::new(zs(&[2, 3, 4]));
        let mut evaluations = vec![Z::zero(); 4];
        for e in -2..=4 {
            let mut bound = eq.clone();
            bound.bind(&z(e.into()));
            eq.bind_symbolic(e, Fuse::Assign, &mut evaluations);
            assert_eq!(bound.hypercube_evaluations(), evaluations);
        }
    }
}
