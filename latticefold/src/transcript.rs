use core::marker::PhantomData;

use algebra::duplex::{Absorb, Duplex, Squeeze};
use algebra::rand::Rng;
use algebra::ring::Ring;
use algebra::vector_dense::VectorDense;

use constraints::r1cs::Foldable;

/// The Fiat–Shamir transcript for relaxed-witness folding: both relaxed
/// witnesses are absorbed into a fresh duplex, the folding challenge is
/// squeezed from it, and the constraint system folds at that challenge.
pub struct FiatShamir<'a, CS, RO> {
    cs: &'a CS,
    _oracle: PhantomData<RO>,
}

impl<'a, CS, RO, F> FiatShamir<'a, CS, RO>
where
    CS: Foldable<Element = F>,
    F: Ring + Absorb + Squeeze,
    RO: Duplex,
{
    pub fn new(cs: &'a CS) -> Self {
        Self {
            cs,
            _oracle: PhantomData,
        }
    }

    pub fn fold(
        &self,
        z1: &VectorDense<F>,
        e1: &VectorDense<F>,
        z2: &VectorDense<F>,
        e2: &VectorDense<F>,
    ) -> (VectorDense<F>, VectorDense<F>) {
        let mut duplex = RO::default();

        // Vector sizes are implied by the constraint system.
        for e in z1.iter().chain(e1.iter()).chain(z2.iter()).chain(e2.iter()) {
            e.absorb(&mut duplex);
        }

        let r = F::squeeze(&mut duplex);
        self.cs.fold(&r, z1, e1, z2, e2)
    }

    /// Re-randomizes a relaxed witness by folding it with a freshly
    /// sampled satisfying one.
    pub fn randomize<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        z1: &VectorDense<F>,
        e1: &VectorDense<F>,
    ) -> (VectorDense<F>, VectorDense<F>) {
        let (z2, e2) = self.cs.random(rng);
        self.fold(z1, e1, &z2, &e2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::duplex::DigestDuplex;
    use algebra::fast_rng::FastDrg;
    use algebra::pervushin::PervushinRing as F;
    use constraints::builder::CircuitBuilder;

    type Ro = DigestDuplex<sha3::Sha3_256>;

    fn witness(values: &[i64]) -> VectorDense<F> {
        VectorDense::new(values.iter().map(|n| F::from_int(*n)).collect())
    }

    #[test]
    fn folds_through_the_transcript() {
        let mut rng = FastDrg::from_entropy();

        let mut circuit = CircuitBuilder::<F, 2>::new();
        let a = circuit.input();
        let b = circuit.auxiliary();
        let c = circuit.auxiliary();
        let d = circuit.auxiliary();
        circuit.constrain(a + b, c * d);
        let r1cs = circuit.r1cs();
        let fs = FiatShamir::<_, Ro>::new(&r1cs);

        let e_init = VectorDense::<F>::zero(r1cs.constraints());
        let z1 = witness(&[1, 6, -2, 2, 2]);
        let z2 = witness(&[1, 20, -4, 4, 4]);
        let z3 = witness(&[1, 12, -4, 4, 4]);
        assert!(r1cs.is_satisfied(&z1));
        assert!(r1cs.is_satisfied(&z2));
        assert!(!r1cs.is_satisfied(&z3));

        let (z, e) = fs.fold(&z1, &e_init, &z2, &e_init);
        assert!(r1cs.is_satisfied_relaxed(&z, &e));

        let (z, e) = fs.randomize(&mut rng, &z, &e);
        assert!(r1cs.is_satisfied_relaxed(&z, &e));

        let (z, e) = fs.fold(&z, &e, &z3, &e_init);
        assert!(!r1cs.is_satisfied_relaxed(&z, &e));
    }
}
