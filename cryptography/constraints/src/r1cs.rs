use core::ops::Mul;

use rand::Rng;

use algebra::matrix_sparse::MatrixSparse;
use algebra::ring::{RandomSample, Ring};
use algebra::vector_dense::VectorDense;

/// A rank-1 constraint system `Az ∘ Bz = Cz` over sparse matrices, with
/// Nova-style relaxed satisfaction and folding.
///
/// A relaxed witness is a pair `(z, e)` with the scalar slot `u = z[0]`;
/// satisfaction is `Az ∘ Bz - u·Cz = e`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct R1cs<E> {
    a: MatrixSparse<E>,
    b: MatrixSparse<E>,
    c: MatrixSparse<E>,
}

impl<E: Ring> R1cs<E> {
    pub fn new(a: MatrixSparse<E>, b: MatrixSparse<E>, c: MatrixSparse<E>) -> Self {
        debug_assert_eq!(a.rows(), b.rows());
        debug_assert_eq!(a.rows(), c.rows());
        debug_assert_eq!(a.columns, b.columns);
        debug_assert_eq!(a.columns, c.columns);
        Self { a, b, c }
    }

    pub fn constraints(&self) -> usize {
        self.a.rows()
    }

    pub fn variables(&self) -> usize {
        self.a.columns
    }

    pub fn is_satisfied<S>(&self, z: &VectorDense<S>) -> bool
    where
        S: Ring + Mul<E, Output = S>,
    {
        let az = self.a.mul_vector(z);
        let bz = self.b.mul_vector(z);
        let cz = self.c.mul_vector(z);
        &az * &bz == cz
    }

    pub fn is_satisfied_relaxed<S>(&self, z: &VectorDense<S>, e: &VectorDense<S>) -> bool
    where
        S: Ring + Mul<E, Output = S>,
    {
        self.error(z) == *e
    }

    /// Folds two relaxed witnesses at the challenge `r`:
    /// `z = z₁ + r·z₂` and `e = e₁ + r·t + r²·e₂` with the cross term
    /// `t = A(z₁+z₂) ∘ B(z₁+z₂) - (u₁+u₂)·C(z₁+z₂) - e₁ - e₂`.
    pub fn fold<S>(
        &self,
        r: &S,
        z1: &VectorDense<S>,
        e1: &VectorDense<S>,
        z2: &VectorDense<S>,
        e2: &VectorDense<S>,
    ) -> (VectorDense<S>, VectorDense<S>)
    where
        S: Ring + Mul<E, Output = S>,
    {
        let u1 = z1[0];
        let u2 = z2[0];
        let z12 = z1 + z2;
        let az = self.a.mul_vector(&z12);
        let bz = self.b.mul_vector(&z12);
        let cz = self.c.mul_vector(&z12);
        let t = &(&(&az * &bz) - &(&cz * (u1 + u2))) - &(e1 + e2);
        let z = z1 + &(z2 * *r);
        let e = &(e1 + &(&t * *r)) + &(e2 * r.square());
        (z, e)
    }

    /// Samples a random relaxed witness satisfying the system.
    pub fn random<S, R>(&self, rng: &mut R) -> (VectorDense<S>, VectorDense<S>)
    where
        S: Ring + Mul<E, Output = S> + RandomSample,
        R: Rng + ?Sized,
    {
        let z = VectorDense::random(rng, self.variables());
        let e = self.error(&z);
        (z, e)
    }

    fn error<S>(&self, z: &VectorDense<S>) -> VectorDense<S>
    where
        S: Ring + Mul<E, Output = S>,
    {
        let u = z[0];
        let az = self.a.mul_vector(z);
        let bz = self.b.mul_vector(z);
        let cz = self.c.mul_vector(z);
        &(&az * &bz) - &(&cz * u)
    }
}

/// Constraint systems that support Nova-style folding of relaxed
/// witnesses; the Fiat–Shamir transcript is generic over this.
pub trait Foldable {
    type Element: Ring;

    fn fold(
        &self,
        r: &Self::Element,
        z1: &VectorDense<Self::Element>,
        e1: &VectorDense<Self::Element>,
        z2: &VectorDense<Self::Element>,
        e2: &VectorDense<Self::Element>,
    ) -> (VectorDense<Self::Element>, VectorDense<Self::Element>);

    fn random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (VectorDense<Self::Element>, VectorDense<Self::Element>);
}

impl<E: Ring + RandomSample> Foldable for R1cs<E> {
    type Element = E;

    fn fold(
        &self,
        r: &E,
        z1: &VectorDense<E>,
        e1: &VectorDense<E>,
        z2: &VectorDense<E>,
        e2: &VectorDense<E>,
    ) -> (VectorDense<E>, VectorDense<E>) {
        Self::fold(self, r, z1, e1, z2, e2)
    }

    fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> (VectorDense<E>, VectorDense<E>) {
        Self::random(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::matrix_dense::MatrixDense;
    use algebra::pervushin::PervushinRing as E;
    use polynomial::extension::PervushinRingDegree2 as Ee;

    fn sixte_with_riposte() -> R1cs<E> {
        let a = MatrixDense::<E>::from_ints(
            3,
            5,
            &[
                0, 0, 1, 0, 0, //
                0, 0, 0, 1, 0, //
                0, 0, 0, 0, 1, //
            ],
        );
        let b = MatrixDense::<E>::from_ints(
            3,
            5,
            &[
                0, 0, 0, 1, 0, //
                0, 0, 0, 1, 0, //
                0, 0, 0, 0, 1, //
            ],
        );
        let c = MatrixDense::<E>::from_ints(
            3,
            5,
            &[
                4, 1, 0, 0, 0, //
                0, 0, 1, 0, 0, //
                0, 0, 0, 1, 0, //
            ],
        );
        R1cs::new(
            MatrixSparse::from(&a),
            MatrixSparse::from(&b),
            MatrixSparse::from(&c),
        )
    }

    fn witness(values: &[i64]) -> VectorDense<E> {
        VectorDense::new(values.iter().map(|n| E::from_int(*n)).collect())
    }

    #[test]
    fn satisfaction() {
        let r1cs = sixte_with_riposte();
        let mut z = witness(&[1, 60, 16, 4, 2]);
        assert!(r1cs.is_satisfied(&z));
        for i in 1..z.size() {
            z[i] += E::one();
            assert!(!r1cs.is_satisfied(&z));
            z[i] -= E::one();
        }
    }

    #[test]
    fn satisfaction_in_the_extension_ring() {
        let r1cs = sixte_with_riposte();
        let z = witness(&[1, 60, 16, 4, 2]);
        let mut z_morphed: VectorDense<Ee> = z.homomorph();
        assert!(r1cs.is_satisfied(&z_morphed));
        for i in 1..z_morphed.size() {
            z_morphed[i] += Ee::one();
            assert!(!r1cs.is_satisfied(&z_morphed));
            z_morphed[i] -= Ee::one();
        }
    }

    #[test]
    fn folding_preserves_relaxed_satisfaction() {
        let mut rng = rand::thread_rng();
        let r1cs = sixte_with_riposte();
        let z = witness(&[1, 60, 16, 4, 2]);
        let z_morphed: VectorDense<Ee> = z.homomorph();
        let e_init = VectorDense::<Ee>::zero(r1cs.constraints());
        assert!(r1cs.is_satisfied_relaxed(&z_morphed, &e_init));

        let r1 = Ee::from_coefficients(&[E::from_int(11), E::from_int(31)]);
        let (mut z_folded, mut e_folded) =
            r1cs.fold(&r1, &z_morphed, &e_init, &z_morphed, &e_init);
        assert!(r1cs.is_satisfied_relaxed(&z_folded, &e_folded));

        let z_other: VectorDense<Ee> = witness(&[1, 725, 81, 9, 3]).homomorph();
        assert!(r1cs.is_satisfied(&z_other));
        (z_folded, e_folded) = r1cs.fold(&r1, &z_folded, &e_folded, &z_other, &e_init);
        assert!(r1cs.is_satisfied_relaxed(&z_folded, &e_folded));
        assert!(e_init != e_folded);

        let r2 = Ee::from_coefficients(&[E::from_int(-13), E::from_int(-3)]);
        (z_folded, e_folded) = r1cs.fold(&r2, &z_folded, &e_folded, &z_other, &e_init);
        assert!(r1cs.is_satisfied_relaxed(&z_folded, &e_folded));

        // Self-fold.
        (z_folded, e_folded) =
            r1cs.fold(&r2, &z_folded, &e_folded, &z_folded.clone(), &e_folded.clone());
        assert!(r1cs.is_satisfied_relaxed(&z_folded, &e_folded));

        // Fold with a random satisfying relaxed witness.
        let rr = Ee::random(&mut rng);
        let (zr, er) = r1cs.random::<Ee, _>(&mut rng);
        assert!(r1cs.is_satisfied_relaxed(&zr, &er));
        (z_folded, e_folded) = r1cs.fold(&rr, &z_folded, &e_folded, &zr, &er);
        assert!(r1cs.is_satisfied_relaxed(&z_folded, &e_folded));
    }
}
