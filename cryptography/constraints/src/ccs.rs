use algebra::matrix_sparse::MatrixSparse;
use algebra::ring::{ExtensionOf, Ring};
use algebra::vector_dense::VectorDense;

use multilinear::fuse::Fuse;
use multilinear::mle::MultilinearExtension;
use multilinear::multivariate::{Homomorph, MultivariatePolynomial};

/// A customizable constraint system: matrices `M₀…M_{k-1}`, selector sets
/// `sᵢ` and coefficients `cᵢ` with residue
/// `σ(z) = Σᵢ cᵢ · ⊙_{j∈sᵢ} Mⱼ·z`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CustomizableConstraintSystem<E> {
    rows: usize,
    columns: usize,
    m: Vec<MatrixSparse<E>>,
    s: Vec<Vec<usize>>,
    c: Vec<E>,
}

impl<E: Ring> CustomizableConstraintSystem<E> {
    pub fn new(
        rows: usize,
        columns: usize,
        m: Vec<MatrixSparse<E>>,
        s: Vec<Vec<usize>>,
        c: Vec<E>,
    ) -> Self {
        debug_assert_eq!(s.len(), c.len());
        debug_assert!(m.iter().all(|m| m.rows() == rows && m.columns == columns));
        Self {
            rows,
            columns,
            m,
            s,
            c,
        }
    }

    pub fn constraints(&self) -> usize {
        self.rows
    }

    pub fn variables(&self) -> usize {
        self.columns
    }

    pub fn is_satisfied(&self, z: &VectorDense<E>) -> bool {
        let mut sigma = VectorDense::zero(self.rows);
        for (selectors, coefficient) in self.s.iter().zip(&self.c) {
            let mut circle = VectorDense::fill(self.rows, *coefficient);
            for j in selectors {
                circle *= &self.m[*j].mul_vector(z);
            }
            sigma += &circle;
        }
        sigma == VectorDense::zero(self.rows)
    }

    /// The sum-check-ready polynomial
    /// `p(x) = Σᵢ cᵢ · ∏_{j∈sᵢ} MLE(Mⱼ·z)(x)`, which sums to zero over
    /// the hypercube iff `z` satisfies the system.
    pub fn polynomial(&self, z: &VectorDense<E>) -> CcsPolynomial<E> {
        let mz: Vec<MultilinearExtension<E>> = self
            .m
            .iter()
            .map(|m| MultilinearExtension::from(m.mul_vector(z)))
            .collect();
        let degree = self.s.iter().map(Vec::len).max().expect("non-empty selectors");
        let variables = mz[0].variables();
        CcsPolynomial {
            degree,
            variables,
            mz,
            s: self.s.clone(),
            c: self.c.clone(),
        }
    }
}

/// The multivariate polynomial shape of a CCS residue.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CcsPolynomial<E: Ring> {
    degree: usize,
    variables: usize,
    mz: Vec<MultilinearExtension<E>>,
    s: Vec<Vec<usize>>,
    c: Vec<E>,
}

impl<E: Ring> CcsPolynomial<E> {
    pub fn new(
        degree: usize,
        variables: usize,
        mz: Vec<MultilinearExtension<E>>,
        s: Vec<Vec<usize>>,
        c: Vec<E>,
    ) -> Self {
        Self {
            degree,
            variables,
            mz,
            s,
            c,
        }
    }
}

impl<E: Ring> MultivariatePolynomial<E> for CcsPolynomial<E> {
    fn degree(&self) -> usize {
        self.degree
    }

    fn variables(&self) -> usize {
        self.variables
    }

    fn evaluate(&self, point: &[E]) -> E {
        let mut sigma = E::zero();
        for (selectors, coefficient) in self.s.iter().zip(&self.c) {
            let mut circle = *coefficient;
            for j in selectors {
                circle *= self.mz[*j].evaluate(point);
            }
            sigma += circle;
        }
        sigma
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let mut sigma = vec![E::zero(); hypercube.len()];
        for (selectors, coefficient) in self.s.iter().zip(&self.c) {
            let mut circle = vec![*coefficient; hypercube.len()];
            for j in selectors {
                self.mz[*j].bind_symbolic(e, Fuse::Mul, &mut circle);
            }
            for (s, t) in sigma.iter_mut().zip(circle) {
                *s += t;
            }
        }
        fuse.apply_slice(hypercube, sigma);
    }

    fn bind(&mut self, e: &E) {
        self.variables -= 1;
        for mle in &mut self.mz {
            mle.bind(e);
        }
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for CcsPolynomial<E> {
    type Output = CcsPolynomial<S>;

    fn homomorph(&self) -> CcsPolynomial<S> {
        CcsPolynomial {
            degree: self.degree,
            variables: self.variables,
            mz: self.mz.iter().map(Homomorph::homomorph).collect(),
            s: self.s.clone(),
            c: self.c.iter().map(|c| S::lift(*c)).collect(),
        }
    }
}
