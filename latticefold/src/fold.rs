use algebra::duplex::{Absorb, Duplex, Squeeze};
use algebra::vector_dense::VectorDense;

use ajtai::{AjtaiCommitment, Infinity};
use multilinear::hypercube::Hypercube;
use multilinear::sumcheck::{Proof, SumCheck};

use crate::polynomials::GFold;
use crate::{Fq, Rq, RqNtt, D, K, KAPPA};

/// A folding proof: the Ajtai commitments to the `2k` witness chunks,
/// the claimed hypercube sum of `GFold`, and the sum-check transcript
/// reducing that claim.
#[derive(Clone, Debug)]
pub struct FoldingProof {
    pub commitments: Vec<VectorDense<RqNtt>>,
    pub sum: Fq,
    pub sumcheck: Proof<Fq>,
}

/// The folding engine over the Solinas62 witness ring: commits the
/// witness chunks, derives every challenge from one duplex, and runs the
/// sum-check over `GFold`.
pub struct LatticeFold<RO: Duplex> {
    commitment: AjtaiCommitment<RqNtt, Infinity>,
    seed: RO::Seed,
}

impl<RO: Duplex> LatticeFold<RO>
where
    RO::Seed: Clone,
{
    /// Sets up the binding commitment for chunks of `columns` ring
    /// elements; the matrix and all protocol challenges derive from the
    /// seed.
    pub fn new(seed: RO::Seed, columns: usize, bound: i64) -> Self {
        let mut sponge = RO::with_seed(seed.clone());
        let matrix = AjtaiCommitment::<RqNtt, Infinity>::setup(&mut sponge, KAPPA, columns);
        Self {
            commitment: AjtaiCommitment::new(matrix, bound),
            seed,
        }
    }

    pub fn commit(&self, chunk: &VectorDense<Rq>) -> VectorDense<RqNtt> {
        let spectrum: Vec<RqNtt> = chunk.iter().map(|f| RqNtt::from(*f)).collect();
        self.commitment.commit(&VectorDense::new(spectrum))
    }

    pub fn prove(&self, chunks: &[VectorDense<Rq>]) -> FoldingProof {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("latticefold_prove").entered();

        debug_assert_eq!(chunks.len(), 2 * K);
        let commitments: Vec<VectorDense<RqNtt>> =
            chunks.iter().map(|chunk| self.commit(chunk)).collect();

        let g = self.fold_polynomial(chunks, &commitments);
        let sum = Hypercube::sum(&g);
        let sumcheck = SumCheck::<Fq, Fq, GFold<Fq>, RO>::prove(&g, &sum);
        FoldingProof {
            commitments,
            sum,
            sumcheck,
        }
    }

    /// Checks a folding proof against the opened witness chunks: the
    /// commitments must open to the chunks and the sum-check transcript
    /// must verify for the re-derived challenges.
    pub fn verify(&self, chunks: &[VectorDense<Rq>], proof: &FoldingProof) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("latticefold_verify").entered();

        if chunks.len() != 2 * K || proof.commitments.len() != 2 * K {
            return false;
        }
        for (chunk, commitment) in chunks.iter().zip(&proof.commitments) {
            let spectrum: Vec<RqNtt> = chunk.iter().map(|f| RqNtt::from(*f)).collect();
            if !self.commitment.open(commitment, &VectorDense::new(spectrum)) {
                return false;
            }
        }
        let g = self.fold_polynomial(chunks, &proof.commitments);
        SumCheck::<Fq, Fq, GFold<Fq>, RO>::verify(&g, &proof.sum, &proof.sumcheck)
    }

    /// Builds `GFold` with α, β, μ and the evaluation points squeezed
    /// from the transcript after the commitments.
    fn fold_polynomial(
        &self,
        chunks: &[VectorDense<Rq>],
        commitments: &[VectorDense<RqNtt>],
    ) -> GFold<Fq> {
        let mut sponge = RO::with_seed(self.seed.clone());
        for commitment in commitments {
            for element in commitment.iter() {
                element.absorb(&mut sponge);
            }
        }

        let variables = (chunks[0].size() * D).trailing_zeros() as usize;
        let alpha: Vec<Fq> = (0..2 * K).map(|_| Fq::squeeze(&mut sponge)).collect();
        let beta = Fq::squeeze(&mut sponge);
        let mu: Vec<Fq> = (0..2 * K).map(|_| Fq::squeeze(&mut sponge)).collect();
        let r: Vec<Vec<Fq>> = (0..2 * K)
            .map(|_| (0..variables).map(|_| Fq::squeeze(&mut sponge)).collect())
            .collect();

        GFold::new(&alpha, beta, &mu, &r, chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::distribution::TernaryUniform;
    use algebra::duplex::DigestDuplex;
    use algebra::fast_rng::FastDrg;
    use algebra::ring::{Ring, SampleWith};

    type Ro = DigestDuplex<sha3::Sha3_256>;

    fn small_chunks(rng: &mut FastDrg) -> Vec<VectorDense<Rq>> {
        let ternary = TernaryUniform::new();
        (0..2 * K)
            .map(|_| VectorDense::new(vec![Rq::random_with(rng, &ternary)]))
            .collect()
    }

    #[test]
    fn folding_proofs_verify() {
        let mut rng = FastDrg::from_seed([42; 32]);
        let engine = LatticeFold::<Ro>::new([7; 32], 1, 2);
        let chunks = small_chunks(&mut rng);
        let proof = engine.prove(&chunks);
        assert!(engine.verify(&chunks, &proof));
    }

    #[test]
    fn tampered_proofs_are_rejected() {
        let mut rng = FastDrg::from_seed([43; 32]);
        let engine = LatticeFold::<Ro>::new([7; 32], 1, 2);
        let chunks = small_chunks(&mut rng);
        let proof = engine.prove(&chunks);

        let mut tampered = proof.clone();
        tampered.sum += Fq::one();
        assert!(!engine.verify(&chunks, &tampered));

        let mut tampered = proof.clone();
        tampered.sumcheck.claims[0].coefficients[0] += Fq::one();
        assert!(!engine.verify(&chunks, &tampered));

        let mut other_chunks = chunks.clone();
        other_chunks[0][0] += Rq::one();
        assert!(!engine.verify(&other_chunks, &proof));
    }
}
