use algebra::ring::Ring;
use algebra::vector_dense::VectorDense;

use multilinear::hypercube::Hypercube;
use multilinear::multivariate::MultivariatePolynomial;

use rust_latticefold::gadget;
use rust_latticefold::{Fq, GEval, GFold, GNorm, Rq, RqNtt, B_RADIX, G1, G2, K};

fn fq(n: i64) -> Fq {
    Fq::from_int(n)
}

fn point(bits: &[i64]) -> Vec<Fq> {
    bits.iter().map(|b| fq(*b)).collect()
}

#[test]
fn gadget_composition_round_trips() {
    let a = VectorDense::new(vec![
        Rq::from_int(3),
        Rq::from_int(2),
        Rq::from_int(1),
        Rq::from_int(0),
    ]);
    let b = VectorDense::new(vec![Rq::from_int(4295098371)]);
    let g = gadget::gadget_matrix::<Rq>(B_RADIX, 1, 4);
    assert_eq!(b, g.mul_vector(&a));
    let c = gadget::decompose(B_RADIX, 4, &b);
    assert_eq!(a, c);
}

#[test]
fn g1_is_an_evaluation_indicator() {
    let r1 = point(&[0, 0, 0, 0, 0, 0]);
    let r2 = point(&[0, 0, 0, 0, 0, 1]);
    let f = VectorDense::new(vec![Rq::from_ints(&[3, 4])]);
    let g1_1 = G1::<Fq>::new(r1.clone(), &f);
    let g1_2 = G1::<Fq>::new(r2.clone(), &f);
    assert_eq!(g1_1.variables(), 6);
    assert_eq!(g1_1.degree(), 2);
    assert_eq!(g1_1.evaluate(&r1), fq(3));
    assert_eq!(g1_1.evaluate(&r2), fq(0));
    assert_eq!(g1_2.evaluate(&r2), fq(4));
    assert_eq!(g1_2.evaluate(&r1), fq(0));
}

#[test]
fn g2_vanishes_exactly_on_ternary_witnesses() {
    let f1 = VectorDense::new(vec![Rq::from_ints(&[1, -1])]);
    let f2 = VectorDense::new(vec![Rq::from_ints(&[2, -2])]);
    let f3 = VectorDense::new(vec![Rq::from_ints(&[1, 1, 0, 1])]);
    let g2_1 = G2::<Fq>::new(&f1);
    let g2_2 = G2::<Fq>::new(&f2);
    let g2_3 = G2::<Fq>::new(&f3);
    assert_eq!(g2_1.variables(), 6);
    assert_eq!(g2_1.degree(), 3);
    assert!(Hypercube::sum(&g2_1) == fq(0));
    assert!(Hypercube::sum(&g2_2) != fq(0));
    assert!(Hypercube::sum(&g2_3) == fq(0));
}

#[test]
fn geval_sums_chunk_evaluations() {
    let alpha = vec![fq(2); K * 2];
    let r = vec![point(&[0, 0, 0, 0, 1, 0]); K * 2];
    let mut f = Vec::new();
    for i in 0..K * 2 {
        let mut rq = Rq::zero();
        rq.coefficients[i] = rust_latticefold::Zq::from_int(i as i64);
        f.push(VectorDense::new(vec![rq]));
    }
    let geval = GEval::new(&alpha, &r, &f);
    assert_eq!(geval.variables(), 6);
    assert_eq!(geval.degree(), 2);
    assert_eq!(geval.evaluate(&point(&[0, 0, 0, 0, 0, 1])), fq(0));
    assert_eq!(geval.evaluate(&point(&[0, 0, 0, 0, 1, 0])), fq(4));
}

#[test]
fn gnorm_vanishes_exactly_on_ternary_chunks() {
    let beta = fq(2);
    let mu = vec![fq(1); K * 2];
    let f1 = vec![VectorDense::new(vec![Rq::from_ints(&[1, 1, 0, -1])]); K * 2];
    let f2 = vec![VectorDense::new(vec![Rq::from_ints(&[2, 0, 0, -2])]); K * 2];
    let f3 = vec![VectorDense::new(vec![Rq::from_ints(&[1, 0, 1, 1])]); K * 2];
    let gnorm_1 = GNorm::new(beta, &mu, &f1);
    let gnorm_2 = GNorm::new(beta, &mu, &f2);
    let gnorm_3 = GNorm::new(beta, &mu, &f3);
    assert_eq!(gnorm_1.variables(), 6);
    assert_eq!(gnorm_2.degree(), 4);
    assert!(Hypercube::sum(&gnorm_1) == fq(0));
    assert!(Hypercube::sum(&gnorm_2) != fq(0));
    assert!(Hypercube::sum(&gnorm_3) == fq(0));
}

#[test]
fn gfold_combines_both_parts() {
    let alpha = vec![fq(1); K * 2];
    let beta = fq(3);
    let mu = vec![fq(1); K * 2];
    let r = vec![point(&[0, 0, 0, 0, 1, 1]); K * 2];
    let f = vec![VectorDense::new(vec![Rq::from_ints(&[1, 0, 1, 1, 0, 1])]); K * 2];
    let gfold = GFold::new(&alpha, beta, &mu, &r, &f);
    assert_eq!(gfold.variables(), 6);
    assert_eq!(gfold.degree(), 4);
    assert_eq!(Hypercube::sum(&gfold), fq(32));
}

#[test]
fn witness_ring_isomorphism_round_trips() {
    let a = Rq::from_ints(&[4, 0, 0, 1, 5]);
    let b = RqNtt::from(a);
    assert_eq!(b.isomorph(), a);
}
