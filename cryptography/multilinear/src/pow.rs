use core::ops::{Mul, MulAssign};

use algebra::ring::{ExtensionOf, Ring};

use crate::eq::EqExtension;
use crate::fuse::Fuse;
use crate::multivariate::{Homomorph, MultivariatePolynomial};

/// The power extension: an equality extension whose coefficients are the
/// repeated squares `τ, τ², τ⁴, …`, so that its hypercube evaluations are
/// the consecutive powers of `τ`. Used as a Fiat–Shamir challenge
/// amplifier.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PowExtension<E: Ring> {
    eq: EqExtension<E>,
}

impl<E: Ring> PowExtension<E> {
    pub fn new(tau: E, variables: usize) -> Self {
        Self {
            eq: EqExtension::new(Self::powers(tau, variables)),
        }
    }

    pub fn from_eq(eq: EqExtension<E>) -> Self {
        Self { eq }
    }

    /// `τ, τ², τ⁴, …, τ^(2^(variables-1))`.
    pub fn powers(tau: E, variables: usize) -> Vec<E> {
        let mut coefficients = Vec::with_capacity(variables);
        coefficients.push(tau);
        for i in 1..variables {
            let previous = coefficients[i - 1];
            coefficients.push(previous.square());
        }
        coefficients
    }

    pub fn hypercube_evaluations(&self) -> Vec<E> {
        self.eq.hypercube_evaluations()
    }
}

impl<E: Ring> MultivariatePolynomial<E> for PowExtension<E> {
    fn degree(&self) -> usize {
        self.eq.degree()
    }

    fn variables(&self) -> usize {
        self.eq.variables()
    }

    fn evaluate(&self, point: &[E]) -> E {
        self.eq.evaluate(point)
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        self.eq.bind_symbolic(e, fuse, hypercube);
    }

    fn bind(&mut self, e: &E) {
        self.eq.bind(e);
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for PowExtension<E> {
    type Output = PowExtension<S>;

    fn homomorph(&self) -> PowExtension<S> {
        PowExtension {
            eq: self.eq.homomorph(),
        }
    }
}

impl<E: Ring> Mul<E> for PowExtension<E> {
    type Output = Self;

    fn mul(self, other: E) -> Self {
        Self {
            eq: self.eq * other,
        }
    }
}

impl<E: Ring> MulAssign<E> for PowExtension<E> {
    fn mul_assign(&mut self, other: E) {
        self.eq *= other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::solinas62::Solinas62Ring as Z;

    #[test]
    fn powers_are_repeated_squares() {
        let tau = Z::from_int(3);
        let powers = PowExtension::powers(tau, 4);
        assert_eq!(
            powers,
            vec![
                Z::from_int(3),
                Z::from_int(9),
                Z::from_int(81),
                Z::from_int(6561)
            ]
        );
    }

    #[test]
    fn sums_to_one_over_the_hypercube() {
        // Σ_b ∏ᵢ (cᵢ or 1-cᵢ) telescopes to 1 whatever the coefficients.
        use crate::hypercube::Hypercube;
        let pow = PowExtension::new(Z::from_int(2), 4);
        assert_eq!(Hypercube::sum(&pow), Z::one());
    }

    #[test]
    fn agrees_with_the_underlying_equality_extension() {
        let tau = Z::from_int(5);
        let eq = EqExtension::new(PowExtension::powers(tau, 3));
        let pow = PowExtension::new(tau, 3);
        let point = [Z::from_int(7), Z::from_int(11), Z::from_int(13)];
        assert_eq!(pow.evaluate(&point), eq.evaluate(&point));
    }
}
