use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use algebra::matrix_dense::MatrixDense;
use algebra::ring::{ExtensionOf, Ring};
use algebra::vector_dense::VectorDense;

use crate::eq::EqExtension;
use crate::fuse::Fuse;
use crate::multivariate::{Homomorph, MultivariatePolynomial};

/// The multilinear extension of a function given by its `2ⁿ` values over
/// the Boolean hypercube.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MultilinearExtension<E: Ring> {
    pub coefficients: Vec<E>,
}

impl<E: Ring> MultilinearExtension<E> {
    pub fn new(coefficients: Vec<E>) -> Self {
        debug_assert!(coefficients.len().is_power_of_two());
        Self { coefficients }
    }

    pub fn from_ints(values: &[i64]) -> Self {
        Self::new(values.iter().map(|n| E::from_int(*n)).collect())
    }
}

impl<E: Ring> From<VectorDense<E>> for MultilinearExtension<E> {
    fn from(vector: VectorDense<E>) -> Self {
        Self::new(vector.elements)
    }
}

impl<E: Ring> From<MatrixDense<E>> for MultilinearExtension<E> {
    fn from(matrix: MatrixDense<E>) -> Self {
        Self::new(matrix.elements)
    }
}

impl<E: Ring> MultivariatePolynomial<E> for MultilinearExtension<E> {
    fn degree(&self) -> usize {
        1
    }

    fn variables(&self) -> usize {
        self.coefficients.len().trailing_zeros() as usize
    }

    fn evaluate(&self, point: &[E]) -> E {
        let pis = EqExtension::table(point, E::one(), 0);
        let mut sigma = E::zero();
        for (pi, c) in pis.iter().zip(&self.coefficients) {
            sigma += *pi * *c;
        }
        sigma
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let half = hypercube.len();
        let c = &self.coefficients;
        for i in 0..half {
            let j = half + i;
            let value = match e {
                -2 => c[i] + c[i].double() - c[j].double(),
                -1 => c[i].double() - c[j],
                0 => c[i],
                1 => c[j],
                2 => c[j].double() - c[i],
                3 => c[j] + c[j].double() - c[i].double(),
                4 => c[j].double().double() - c[i].double() - c[i],
                _ => unreachable!("symbolic bind at {e}"),
            };
            fuse.apply(&mut hypercube[i], value);
        }
    }

    fn bind(&mut self, e: &E) {
        let half = self.coefficients.len() >> 1;
        for i in 0..half {
            let j = half + i;
            let low = self.coefficients[i];
            self.coefficients[i] = low + (self.coefficients[j] - low) * *e;
        }
        self.coefficients.truncate(half);
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for MultilinearExtension<E> {
    type Output = MultilinearExtension<S>;

    fn homomorph(&self) -> MultilinearExtension<S> {
        MultilinearExtension {
            coefficients: self.coefficients.iter().map(|c| S::lift(*c)).collect(),
        }
    }
}

impl<E: Ring> Add for &MultilinearExtension<E> {
    type Output = MultilinearExtension<E>;

    fn add(self, other: Self) -> MultilinearExtension<E> {
        MultilinearExtension {
            coefficients: self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .map(|(a, b)| *a + *b)
                .collect(),
        }
    }
}

impl<E: Ring> AddAssign<&Self> for MultilinearExtension<E> {
    fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *a += *b;
        }
    }
}

/// Scalar multiplication.
impl<E: Ring> Mul<E> for &MultilinearExtension<E> {
    type Output = MultilinearExtension<E>;

    fn mul(self, other: E) -> MultilinearExtension<E> {
        MultilinearExtension {
            coefficients: self.coefficients.iter().map(|a| *a * other).collect(),
        }
    }
}

impl<E: Ring> MulAssign<E> for MultilinearExtension<E> {
    fn mul_assign(&mut self, other: E) {
        for a in &mut self.coefficients {
            *a *= other;
        }
    }
}

/// Scalar subtraction from every coefficient.
impl<E: Ring> Sub<E> for &MultilinearExtension<E> {
    type Output = MultilinearExtension<E>;

    fn sub(self, other: E) -> MultilinearExtension<E> {
        MultilinearExtension {
            coefficients: self.coefficients.iter().map(|a| *a - other).collect(),
        }
    }
}

impl<E: Ring> SubAssign<E> for MultilinearExtension<E> {
    fn sub_assign(&mut self, other: E) {
        for a in &mut self.coefficients {
            *a -= other;
        }
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

    #[test]
    fn agrees_with_its_table_on_the_hypercube() {
        let mle = MultilinearExtension::<Z>::from_ints(&[3, 1, 4, 1, 5, 9, 2, 6]);
        let hypercube = Hypercube::new(3);
        for (index, vertex) in hypercube.composed().zip(hypercube.decomposed::<Z>()) {
            assert_eq!(mle.evaluate(&vertex), mle.coefficients[index]);
        }
    }

    #[test]
    fn concrete_bind_specializes_the_first_variable() {
        let mle = MultilinearExtension::<Z>::from_ints(&[3, 1, 4, 1, 5, 9, 2, 6]);
        let e = z(7);
        let mut bound = mle.clone();
        bound.bind(&e);
        assert_eq!(bound.variables(), 2);
        let point = [z(11), z(13)];
        let full_point = [e, z(11), z(13)];
        assert_eq!(bound.evaluate(&point), mle.evaluate(&full_point));
    }

    #[test]
    fn symbolic_bind_agrees_with_concrete_bind() {
        let mle = MultilinearExtension::<Z>::from_ints(&[3, 1, 4, 1, 5, 9, 2, 6]);
        let mut evaluations = vec![Z::zero(); 4];
        for e in -2..=4 {
            let mut bound = mle.clone();
            bound.bind(&z(e.into()));
            mle.bind_symbolic(e, Fuse::Assign, &mut evaluations);
            assert_eq!(bound.coefficients, evaluations);
        }
    }

    #[test]
    fn fuse_policies_accumulate() {
        let mle = MultilinearExtension::<Z>::from_ints(&[1, 2, 3, 4]);
        let mut accumulator = vec![z(10), z(20)];
        mle.bind_symbolic(0, Fuse::Add, &mut accumulator);
        assert_eq!(accumulator, vec![z(11), z(22)]);
        mle.bind_symbolic(1, Fuse::Mul, &mut accumulator);
        assert_eq!(accumulator, vec![z(33), z(88)]);
        mle.bind_symbolic(0, Fuse::Sub, &mut accumulator);
        assert_eq!(accumulator, vec![z(32), z(86)]);
    }

    #[test]
    fn arithmetic() {
        let a = MultilinearExtension::<Z>::from_ints(&[1, 2]);
        let b = MultilinearExtension::<Z>::from_ints(&[3, 4]);
        assert_eq!(&a + &b, MultilinearExtension::from_ints(&[4, 6]));
        assert_eq!(&a * z(3), MultilinearExtension::from_ints(&[3, 6]));
        assert_eq!(&a - z(1), MultilinearExtension::from_ints(&[0, 1]));
    }
}
