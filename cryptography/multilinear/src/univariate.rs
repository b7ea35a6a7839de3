use algebra::duplex::{Absorb, Duplex};
use algebra::ring::{ExtensionOf, Ring};

use crate::multivariate::Homomorph;

/// A univariate polynomial as a dense coefficient vector, lowest degree
/// first.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct UnivariatePolynomial<E> {
    pub coefficients: Vec<E>,
}

impl<E: Ring> UnivariatePolynomial<E> {
    pub fn new(coefficients: Vec<E>) -> Self {
        Self { coefficients }
    }

    pub fn from_ints(values: &[i64]) -> Self {
        Self::new(values.iter().map(|n| E::from_int(*n)).collect())
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn evaluate(&self, point: &E) -> E {
        let mut sigma = self.coefficients[0];
        let mut pi = *point;
        for i in 1..self.coefficients.len().saturating_sub(1) {
            sigma += pi * self.coefficients[i];
            pi *= *point;
        }
        if self.coefficients.len() > 1 {
            sigma += pi * *self.coefficients.last().expect("non-empty");
        }
        sigma
    }
}

impl<E: Ring + Absorb> UnivariatePolynomial<E> {
    pub fn absorb<S: Duplex>(&self, sponge: &mut S) {
        for c in &self.coefficients {
            c.absorb(sponge);
        }
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for UnivariatePolynomial<E> {
    type Output = UnivariatePolynomial<S>;

    fn homomorph(&self) -> UnivariatePolynomial<S> {
        UnivariatePolynomial {
            coefficients: self.coefficients.iter().map(|c| S::lift(*c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::solinas62::Solinas62Ring as Z;

    #[test]
    fn evaluation() {
        // 2 + 3x + 5x²
        let p = UnivariatePolynomial::<Z>::from_ints(&[2, 3, 5]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.evaluate(&Z::zero()), Z::from_int(2));
        assert_eq!(p.evaluate(&Z::one()), Z::from_int(10));
        assert_eq!(p.evaluate(&Z::from_int(-1)), Z::from_int(4));
        assert_eq!(p.evaluate(&Z::from_int(10)), Z::from_int(532));
    }

    #[test]
    fn constant_polynomial() {
        let p = UnivariatePolynomial::<Z>::from_ints(&[7]);
        assert_eq!(p.degree(), 0);
        assert_eq!(p.evaluate(&Z::from_int(100)), Z::from_int(7));
    }
}
