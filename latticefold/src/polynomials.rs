//! The folding-protocol polynomials: `G1 = Eq·MLE`, `G2 = μ(MLE³ - MLE)`,
//! their chunk sums `GEval` and `GNorm`, and the combined `GFold`.

use algebra::ring::{ExtensionOf, Ring};
use algebra::vector_dense::VectorDense;

use multilinear::eq::EqExtension;
use multilinear::fuse::Fuse;
use multilinear::mle::MultilinearExtension;
use multilinear::multivariate::{Homomorph, MultivariatePolynomial};
use multilinear::pow::PowExtension;

use polynomial::ring::{PolynomialRing, PolynomialRingParams};

/// Flattens a vector of ring elements into the coefficient table of a
/// multilinear extension, lifting each coefficient into `E`.
pub fn witness_extension<E, Z, P, const N: usize>(
    f: &VectorDense<PolynomialRing<Z, P, N>>,
) -> MultilinearExtension<E>
where
    Z: Ring,
    P: PolynomialRingParams<Z, N>,
    E: ExtensionOf<Z>,
{
    let mut coefficients = Vec::with_capacity(f.size() * N);
    for element in f.iter() {
        for c in &element.coefficients {
            coefficients.push(E::lift(*c));
        }
    }
    MultilinearExtension::new(coefficients)
}

/// `G1(x) = Eq(r, x) · MLE(f)(x)`, optionally scaled by `α`.
#[derive(Clone, Debug)]
pub struct G1<E: Ring> {
    eq: EqExtension<E>,
    mle: MultilinearExtension<E>,
}

impl<E: Ring> G1<E> {
    pub fn new<Z, P, const N: usize>(r: Vec<E>, f: &VectorDense<PolynomialRing<Z, P, N>>) -> Self
    where
        Z: Ring,
        P: PolynomialRingParams<Z, N>,
        E: ExtensionOf<Z>,
    {
        Self {
            eq: EqExtension::new(r),
            mle: witness_extension(f),
        }
    }

    pub fn with_alpha<Z, P, const N: usize>(
        alpha: E,
        r: Vec<E>,
        f: &VectorDense<PolynomialRing<Z, P, N>>,
    ) -> Self
    where
        Z: Ring,
        P: PolynomialRingParams<Z, N>,
        E: ExtensionOf<Z>,
    {
        Self {
            eq: EqExtension::with_scale(r, alpha),
            mle: witness_extension(f),
        }
    }

    pub fn from_parts(eq: EqExtension<E>, mle: MultilinearExtension<E>) -> Self {
        Self { eq, mle }
    }
}

impl<E: Ring> MultivariatePolynomial<E> for G1<E> {
    fn degree(&self) -> usize {
        self.eq.degree() + self.mle.degree()
    }

    fn variables(&self) -> usize {
        self.eq.variables()
    }

    fn evaluate(&self, point: &[E]) -> E {
        self.eq.evaluate(point) * self.mle.evaluate(point)
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let mut t = vec![E::zero(); hypercube.len()];
        self.mle.bind_symbolic(e, Fuse::Assign, &mut t);
        self.eq.bind_symbolic(e, Fuse::Mul, &mut t);
        fuse.apply_slice(hypercube, t);
    }

    fn bind(&mut self, e: &E) {
        self.eq.bind(e);
        self.mle.bind(e);
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for G1<E> {
    type Output = G1<S>;

    fn homomorph(&self) -> G1<S> {
        G1 {
            eq: self.eq.homomorph(),
            mle: self.mle.homomorph(),
        }
    }
}

/// `G2(x) = μ · (MLE(f)³(x) - MLE(f)(x))`; under the norm base 2, the
/// claim `|f|∞ ≤ 1` reduces to `G2` summing to zero over the hypercube.
#[derive(Clone, Debug)]
pub struct G2<E: Ring> {
    mu: E,
    mle: MultilinearExtension<E>,
}

impl<E: Ring> G2<E> {
    pub fn new<Z, P, const N: usize>(f: &VectorDense<PolynomialRing<Z, P, N>>) -> Self
    where
        Z: Ring,
        P: PolynomialRingParams<Z, N>,
        E: ExtensionOf<Z>,
    {
        Self {
            mu: E::one(),
            mle: witness_extension(f),
        }
    }

    pub fn with_mu<Z, P, const N: usize>(
        mu: E,
        f: &VectorDense<PolynomialRing<Z, P, N>>,
    ) -> Self
    where
        Z: Ring,
        P: PolynomialRingParams<Z, N>,
        E: ExtensionOf<Z>,
    {
        Self {
            mu,
            mle: witness_extension(f),
        }
    }
}

impl<E: Ring> MultivariatePolynomial<E> for G2<E> {
    fn degree(&self) -> usize {
        3
    }

    fn variables(&self) -> usize {
        self.mle.variables()
    }

    fn evaluate(&self, point: &[E]) -> E {
        let t = self.mle.evaluate(point);
        self.mu * (t * t * t - t)
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let mut t = vec![E::zero(); hypercube.len()];
        self.mle.bind_symbolic(e, Fuse::Assign, &mut t);
        let mut r = t.clone();
        for (r, t) in r.iter_mut().zip(&t) {
            *r *= *t;
        }
        for (r, t) in r.iter_mut().zip(&t) {
            *r *= *t;
        }
        for (r, t) in r.iter_mut().zip(&t) {
            *r -= *t;
        }
        for r in &mut r {
            *r *= self.mu;
        }
        fuse.apply_slice(hypercube, r);
    }

    fn bind(&mut self, e: &E) {
        self.mle.bind(e);
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for G2<E> {
    type Output = G2<S>;

    fn homomorph(&self) -> G2<S> {
        G2 {
            mu: S::lift(self.mu),
            mle: self.mle.homomorph(),
        }
    }
}

/// `GEval(x) = Σᵢ G1ᵢ(x)` over the `2k` parallel witness chunks.
#[derive(Clone, Debug)]
pub struct GEval<E: Ring> {
    g1s: Vec<G1<E>>,
}

impl<E: Ring> GEval<E> {
    pub fn new<Z, P, const N: usize>(
        alpha: &[E],
        r: &[Vec<E>],
        f: &[VectorDense<PolynomialRing<Z, P, N>>],
    ) -> Self
    where
        Z: Ring,
        P: PolynomialRingParams<Z, N>,
        E: ExtensionOf<Z>,
    {
        debug_assert_eq!(alpha.len(), f.len());
        debug_assert_eq!(r.len(), f.len());
        Self {
            g1s: alpha
                .iter()
                .zip(r)
                .zip(f)
                .map(|((alpha, r), f)| G1::with_alpha(*alpha, r.clone(), f))
                .collect(),
        }
    }

    pub fn from_parts(g1s: Vec<G1<E>>) -> Self {
        Self { g1s }
    }
}

impl<E: Ring> MultivariatePolynomial<E> for GEval<E> {
    fn degree(&self) -> usize {
        2
    }

    fn variables(&self) -> usize {
        self.g1s[0].variables()
    }

    fn evaluate(&self, point: &[E]) -> E {
        let mut sigma = E::zero();
        for g1 in &self.g1s {
            sigma += g1.evaluate(point);
        }
        sigma
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let mut t = vec![E::zero(); hypercube.len()];
        for (i, g1) in self.g1s.iter().enumerate() {
            let inner = if i == 0 { Fuse::Assign } else { Fuse::Add };
            g1.bind_symbolic(e, inner, &mut t);
        }
        fuse.apply_slice(hypercube, t);
    }

    fn bind(&mut self, e: &E) {
        for g1 in &mut self.g1s {
            g1.bind(e);
        }
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for GEval<E> {
    type Output = GEval<S>;

    fn homomorph(&self) -> GEval<S> {
        GEval {
            g1s: self.g1s.iter().map(Homomorph::homomorph).collect(),
        }
    }
}

/// `GNorm(x) = Pow(β, x) · Σᵢ G2ᵢ(x)` over the `2k` chunks.
#[derive(Clone, Debug)]
pub struct GNorm<E: Ring> {
    pow: PowExtension<E>,
    g2s: Vec<G2<E>>,
}

impl<E: Ring> GNorm<E> {
    pub fn new<Z, P, const N: usize>(
        beta: E,
        mu: &[E],
        f: &[VectorDense<PolynomialRing<Z, P, N>>],
    ) -> Self
    where
        Z: Ring,
        P: PolynomialRingParams<Z, N>,
        E: ExtensionOf<Z>,
    {
        debug_assert_eq!(mu.len(), f.len());
        let variables = (f[0].size() * N).trailing_zeros() as usize;
        Self {
            pow: PowExtension::new(beta, variables),
            g2s: mu
                .iter()
                .zip(f)
                .map(|(mu, f)| G2::with_mu(*mu, f))
                .collect(),
        }
    }
}

impl<E: Ring> MultivariatePolynomial<E> for GNorm<E> {
    fn degree(&self) -> usize {
        self.pow.degree() + 3
    }

    fn variables(&self) -> usize {
        self.pow.variables()
    }

    fn evaluate(&self, point: &[E]) -> E {
        let mut sigma = E::zero();
        for g2 in &self.g2s {
            sigma += g2.evaluate(point);
        }
        sigma * self.pow.evaluate(point)
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let mut t = vec![E::zero(); hypercube.len()];
        for (i, g2) in self.g2s.iter().enumerate() {
            let inner = if i == 0 { Fuse::Assign } else { Fuse::Add };
            g2.bind_symbolic(e, inner, &mut t);
        }
        self.pow.bind_symbolic(e, Fuse::Mul, &mut t);
        fuse.apply_slice(hypercube, t);
    }

    fn bind(&mut self, e: &E) {
        self.pow.bind(e);
        for g2 in &mut self.g2s {
            g2.bind(e);
        }
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for GNorm<E> {
    type Output = GNorm<S>;

    fn homomorph(&self) -> GNorm<S> {
        GNorm {
            pow: self.pow.homomorph(),
            g2s: self.g2s.iter().map(Homomorph::homomorph).collect(),
        }
    }
}

/// `GFold = GEval + GNorm`, the polynomial the folding sum-check runs on.
#[derive(Clone, Debug)]
pub struct GFold<E: Ring> {
    geval: GEval<E>,
    gnorm: GNorm<E>,
}

impl<E: Ring> GFold<E> {
    pub fn new<Z, P, const N: usize>(
        alpha: &[E],
        beta: E,
        mu: &[E],
        r: &[Vec<E>],
        f: &[VectorDense<PolynomialRing<Z, P, N>>],
    ) -> Self
    where
        Z: Ring,
        P: PolynomialRingParams<Z, N>,
        E: ExtensionOf<Z>,
    {
        Self {
            geval: GEval::new(alpha, r, f),
            gnorm: GNorm::new(beta, mu, f),
        }
    }
}

impl<E: Ring> MultivariatePolynomial<E> for GFold<E> {
    fn degree(&self) -> usize {
        self.gnorm.degree()
    }

    fn variables(&self) -> usize {
        self.gnorm.variables()
    }

    fn evaluate(&self, point: &[E]) -> E {
        self.geval.evaluate(point) + self.gnorm.evaluate(point)
    }

    fn bind_symbolic(&self, e: i8, fuse: Fuse, hypercube: &mut [E]) {
        let mut t = vec![E::zero(); hypercube.len()];
        self.geval.bind_symbolic(e, Fuse::Assign, &mut t);
        self.gnorm.bind_symbolic(e, Fuse::Add, &mut t);
        fuse.apply_slice(hypercube, t);
    }

    fn bind(&mut self, e: &E) {
        self.geval.bind(e);
        self.gnorm.bind(e);
    }
}

impl<E: Ring, S: ExtensionOf<E>> Homomorph<S> for GFold<E> {
    type Output = GFold<S>;

    fn homomorph(&self) -> GFold<S> {
        GFold {
            geval: self.geval.homomorph(),
            gnorm: self.gnorm.homomorph(),
        }
    }
}
