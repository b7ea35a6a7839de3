use core::marker::PhantomData;

use algebra::duplex::{Absorb, Duplex, Squeeze};
use algebra::ring::{DivisionRing, ExtensionOf, Ring};

use crate::fuse::{self, Fuse};
use crate::interpolation;
use crate::multivariate::{Homomorph, MultivariatePolynomial};
use crate::univariate::UnivariatePolynomial;

/// The non-interactive sum-check protocol over a base ring `Z`, with
/// challenges drawn from the extension ring `F` through the Fiat–Shamir
/// oracle `RO`.
pub struct SumCheck<Z, F, P, RO> {
    _marker: PhantomData<(Z, F, P, RO)>,
}

/// One univariate round polynomial per bound variable.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Proof<F> {
    pub claims: Vec<UnivariatePolynomial<F>>,
}

/// The transcript of a sum-check stopped after its first round.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProofEarlyStopped<F> {
    pub state: F,
    pub claim: UnivariatePolynomial<F>,
    pub challenge: F,
}

impl<Z, F, P, RO> SumCheck<Z, F, P, RO>
where
    Z: Ring,
    Z::BaseRing: DivisionRing,
    F: ExtensionOf<Z> + Absorb + Squeeze,
    F::BaseRing: DivisionRing,
    P: MultivariatePolynomial<Z> + Homomorph<F>,
    <P as Homomorph<F>>::Output: MultivariatePolynomial<F>,
    RO: Duplex,
{
    pub fn prove(polynomial: &P, sum: &Z) -> Proof<F> {
        let mut proof = Proof {
            claims: Vec::with_capacity(polynomial.variables()),
        };
        let mut ro = RO::default();
        let mut state = polynomial.homomorph();
        let first: UnivariatePolynomial<F> = prove_round(polynomial, sum).homomorph();
        first.absorb(&mut ro);
        let mut fork = ro.clone();
        let challenge = F::squeeze(&mut fork);
        state.bind(&challenge);
        let mut hint = first.evaluate(&challenge);
        proof.claims.push(first);
        for _round in 1..polynomial.variables() {
            let claim = prove_round(&state, &hint);
            claim.absorb(&mut ro);
            let mut fork = ro.clone();
            let challenge = F::squeeze(&mut fork);
            state.bind(&challenge);
            hint = claim.evaluate(&challenge);
            proof.claims.push(claim);
        }
        proof
    }

    pub fn verify(polynomial: &P, sum: &Z, proof: &Proof<F>) -> bool {
        if proof.claims.len() != polynomial.variables() {
            return false;
        }
        let mut ro = RO::default();
        let mut r = Vec::with_capacity(polynomial.variables());
        let mut state = F::lift(*sum);
        for claim in &proof.claims {
            if claim.degree() != polynomial.degree() {
                return false;
            }
            if state != claim.evaluate(&F::zero()) + claim.evaluate(&F::one()) {
                return false;
            }
            claim.absorb(&mut ro);
            let mut fork = ro.clone();
            let challenge = F::squeeze(&mut fork);
            state = claim.evaluate(&challenge);
            r.push(challenge);
        }
        state == polynomial.homomorph().evaluate(&r)
    }
}

impl<Z, F, P, RO> SumCheck<Z, F, P, RO>
where
    Z: Ring,
    F: Ring + Absorb + Squeeze,
    F::BaseRing: DivisionRing,
    RO: Duplex,
{
    /// Emits only the first round and its challenge; the base case used
    /// inside the folding protocol.
    pub fn prove_early_stopping<Q>(polynomial: &Q, sum: &F) -> ProofEarlyStopped<F>
    where
        Q: MultivariatePolynomial<F>,
    {
        let mut ro = RO::default();

        let claim = prove_round(polynomial, sum);
        claim.absorb(&mut ro);
        let challenge = F::squeeze(&mut ro);
        ProofEarlyStopped {
            state: claim.evaluate(&challenge),
            claim,
            challenge,
        }
    }

    pub fn verify_early_stopping<Q>(polynomial: &Q, sum: &F, proof: &ProofEarlyStopped<F>) -> bool
    where
        Q: MultivariatePolynomial<F>,
    {
        let mut ro = RO::default();

        if proof.claim.degree() != polynomial.degree() {
            return false;
        }
        if *sum != proof.claim.evaluate(&F::zero()) + proof.claim.evaluate(&F::one()) {
            return false;
        }
        proof.claim.absorb(&mut ro);
        let challenge = F::squeeze(&mut ro);
        if proof.challenge != challenge {
            return false;
        }
        if proof.state != proof.claim.evaluate(&proof.challenge) {
            return false;
        }
        true
    }
}

/// Computes the round polynomial `q(X) = Σ_b state(X, b)` from
/// `degree + 1` symbolic binds, recovering `q(1)` from the sum law
/// `q(0) + q(1) = hint`.
fn prove_round<S, T>(state: &T, hint: &S) -> UnivariatePolynomial<S>
where
    S: Ring,
    S::BaseRing: DivisionRing,
    T: MultivariatePolynomial<S>,
{
    let mut evaluations = vec![S::zero(); 1 << (state.variables() - 1)];
    match state.degree() {
        5 => {
            state.bind_symbolic(-2, Fuse::Assign, &mut evaluations);
            let n2 = fuse::sum(&evaluations);
            state.bind_symbolic(-1, Fuse::Assign, &mut evaluations);
            let n1 = fuse::sum(&evaluations);
            state.bind_symbolic(1, Fuse::Assign, &mut evaluations);
            let p1 = fuse::sum(&evaluations);
            state.bind_symbolic(2, Fuse::Assign, &mut evaluations);
            let p2 = fuse::sum(&evaluations);
            state.bind_symbolic(3, Fuse::Assign, &mut evaluations);
            let p3 = fuse::sum(&evaluations);
            interpolation::balanced_quintic(n2, n1, *hint - p1, p1, p2, p3)
        }
        4 => {
            state.bind_symbolic(-2, Fuse::Assign, &mut evaluations);
            let n2 = fuse::sum(&evaluations);
            state.bind_symbolic(-1, Fuse::Assign, &mut evaluations);
            let n1 = fuse::sum(&evaluations);
            state.bind_symbolic(1, Fuse::Assign, &mut evaluations);
            let p1 = fuse::sum(&evaluations);
            state.bind_symbolic(2, Fuse::Assign, &mut evaluations);
            let p2 = fuse::sum(&evaluations);
            interpolation::balanced_quartic(n2, n1, *hint - p1, p1, p2)
        }
        3 => {
            state.bind_symbolic(-1, Fuse::Assign, &mut evaluations);
            let n1 = fuse::sum(&evaluations);
            state.bind_symbolic(1, Fuse::Assign, &mut evaluations);
            let p1 = fuse::sum(&evaluations);
            state.bind_symbolic(2, Fuse::Assign, &mut evaluations);
            let p2 = fuse::sum(&evaluations);
            interpolation::balanced_cubic(n1, *hint - p1, p1, p2)
        }
        2 => {
            state.bind_symbolic(-1, Fuse::Assign, &mut evaluations);
            let n1 = fuse::sum(&evaluations);
            state.bind_symbolic(1, Fuse::Assign, &mut evaluations);
            let p1 = fuse::sum(&evaluations);
            interpolation::balanced_quadratic(n1, *hint - p1, p1)
        }
        1 => {
            state.bind_symbolic(1, Fuse::Assign, &mut evaluations);
            let p1 = fuse::sum(&evaluations);
            interpolation::balanced_linear(*hint - p1, p1)
        }
        degree => panic!("sum-check prover not implemented for degree {degree}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eq::EqExtension;
    use crate::mle::MultilinearExtension;
    use crate::pow::PowExtension;
    use algebra::duplex::DigestDuplex;
    use algebra::ring::Ring as _;
    use algebra::solinas62::Solinas62Ring as Z;
    use polynomial::extension::Solinas62RingDegree2 as R;

    type RO = DigestDuplex<sha3::Sha3_256>;

    fn z(n: i64) -> Z {
        Z::from_int(n)
    }

    #[test]
    fn mle_sum_check() {
        type SumCheckMle = SumCheck<Z, R, MultilinearExtension<Z>, RO>;
        let p1 = MultilinearExtension::<Z>::from_ints(&[7, 7, 7, 0]);
        let p2 = MultilinearExtension::<Z>::from_ints(&[7, 7, 7, 7]);
        let p3 = MultilinearExtension::<Z>::from_ints(&[7, 7, 0, 7]);
        let s1 = z(21);
        let s2 = z(28);

        let proof = SumCheckMle::prove(&p1, &s1);
        assert!(SumCheckMle::verify(&p1, &s1, &proof));
        assert!(!SumCheckMle::verify(&p1, &s2, &proof));
        assert!(!SumCheckMle::verify(&p2, &s1, &proof));
        assert!(!SumCheckMle::verify(&p2, &s2, &proof));
        assert!(!SumCheckMle::verify(&p3, &s1, &proof));

        let mut tampered = proof.clone();
        tampered.claims[1].coefficients[1] += R::one();
        assert!(!SumCheckMle::verify(&p1, &s1, &tampered));

        let proof2 = SumCheckMle::prove(&p1, &s2);
        assert!(!SumCheckMle::verify(&p1, &s1, &proof2));
        assert!(!SumCheckMle::verify(&p1, &s2, &proof2));
    }

    #[test]
    fn eq_sum_check() {
        type SumCheckEq = SumCheck<Z, R, EqExtension<Z>, RO>;
        let p1 = EqExtension::new(vec![z(45), z(46), z(47), z(48)]);
        let p2 = EqExtension::new(vec![z(45), z(46), z(48), z(48)]);
        let s1 = z(1);
        let s2 = z(2);

        let proof = SumCheckEq::prove(&p1, &s1);
        assert!(SumCheckEq::verify(&p1, &s1, &proof));
        assert!(!SumCheckEq::verify(&p1, &s2, &proof));
        assert!(!SumCheckEq::verify(&p2, &s1, &proof));
        assert!(!SumCheckEq::verify(&p2, &s2, &proof));

        let mut tampered = proof.clone();
        tampered.claims[3].coefficients[1] += R::one();
        assert!(!SumCheckEq::verify(&p1, &s1, &tampered));
    }

    #[test]
    fn pow_early_stopping() {
        type SumCheckPow = SumCheck<R, R, PowExtension<R>, RO>;
        let p1 = PowExtension::new(R::from_int(2), 4);
        let p2 = PowExtension::new(R::from_int(4), 4);
        let s1 = R::one();
        let s2 = R::from_int(2);

        let proof = SumCheckPow::prove_early_stopping(&p1, &s1);
        assert!(SumCheckPow::verify_early_stopping(&p1, &s1, &proof));
        assert!(!SumCheckPow::verify_early_stopping(&p1, &s2, &proof));
        assert!(!SumCheckPow::verify_early_stopping(&p2, &s2, &proof));

        let mut tampered = proof.clone();
        tampered.state += R::one();
        assert!(!SumCheckPow::verify_early_stopping(&p1, &s1, &tampered));

        let mut tampered = proof.clone();
        tampered.claim.coefficients[1] += R::one();
        assert!(!SumCheckPow::verify_early_stopping(&p1, &s1, &tampered));

        let mut tampered = proof.clone();
        tampered.challenge += R::one();
        assert!(!SumCheckPow::verify_early_stopping(&p1, &s1, &tampered));

        let proof2 = SumCheckPow::prove_early_stopping(&p1, &s2);
        assert!(!SumCheckPow::verify_early_stopping(&p1, &s1, &proof2));
    }
}
