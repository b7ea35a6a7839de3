use criterion::{criterion_group, criterion_main, Criterion};

use algebra::duplex::DigestDuplex;
use algebra::fast_rng::FastDrg;
use algebra::ring::RandomSample;
use algebra::vector_dense::VectorDense;

use multilinear::hypercube::Hypercube;
use multilinear::sumcheck::SumCheck;

use rust_latticefold::{Fq, GNorm, Rq, K};

type Ro = DigestDuplex<sha3::Sha3_256>;

fn gnorm(rng: &mut FastDrg) -> GNorm<Fq> {
    let beta = Fq::random(rng);
    let mu: Vec<Fq> = (0..2 * K).map(|_| Fq::random(rng)).collect();
    let f: Vec<VectorDense<Rq>> = (0..2 * K)
        .map(|_| VectorDense::random(rng, 1))
        .collect();
    GNorm::new(beta, &mu, &f)
}

fn bench_gnorm_sum_check(c: &mut Criterion) {
    let mut rng = FastDrg::from_seed([99; 32]);
    let g = gnorm(&mut rng);
    let sum = Hypercube::sum(&g);

    c.bench_function("gnorm_sum_check_prove", |b| {
        b.iter(|| SumCheck::<Fq, Fq, GNorm<Fq>, Ro>::prove(&g, &sum))
    });

    let proof = SumCheck::<Fq, Fq, GNorm<Fq>, Ro>::prove(&g, &sum);
    c.bench_function("gnorm_sum_check_verify", |b| {
        b.iter(|| SumCheck::<Fq, Fq, GNorm<Fq>, Ro>::verify(&g, &sum, &proof))
    });
}

fn bench_witness_ring_multiplication(c: &mut Criterion) {
    let mut rng = FastDrg::from_seed([98; 32]);
    let a = Rq::random(&mut rng);
    let b = Rq::random(&mut rng);
    c.bench_function("witness_ring_mul", |bench| bench.iter(|| a * b));
}

criterion_group!(benches, bench_gnorm_sum_check, bench_witness_ring_multiplication);
criterion_main!(benches);
