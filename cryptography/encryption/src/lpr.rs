// https://eprint.iacr.org/2013/293

use rand::distributions::Uniform;
use rand::Rng;

use algebra::distribution::DiscreteGaussian;
use algebra::fermat::FermatRing;
use algebra::ring::{IntegerRing, RandomSample, Ring, SampleWith};
use polynomial::extension::FermatRingDegree1024;

pub type Rq = FermatRingDegree1024;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey {
    pub a: Rq,
    pub b: Rq,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CipherText {
    pub a: Rq,
    pub b: Rq,
}

/// The LPR public-key encryption scheme over the Fermat-prime cyclotomic
/// ring of degree 1024, with binary plaintext coefficients encoded at
/// `Δ = q/2`.
pub struct Lpr {
    ternary: Uniform<i64>,
    noise: DiscreteGaussian,
}

impl Lpr {
    pub const D: usize = 1024;

    /// Hamming weight of the secret key.
    pub const H: usize = 64;

    pub const SIGMA: f64 = 0.5;

    pub const DELTA: i64 = 65537 / 2;
    pub const HALF_DELTA: i64 = 65537 / 4;

    pub fn new() -> Self {
        Self {
            ternary: Uniform::new_inclusive(-1, 1),
            noise: DiscreteGaussian::new(0.0, Self::SIGMA),
        }
    }

    /// Maps binary plaintext coefficients to `{0, Δ}`.
    pub fn upscale(pt: &Rq) -> Rq {
        let mut coefficients = [FermatRing::zero(); Self::D];
        for (q, p) in coefficients.iter_mut().zip(&pt.coefficients) {
            if !p.is_zero() {
                *q = FermatRing::from_int(Self::DELTA);
            }
        }
        Rq::new(coefficients)
    }

    pub fn generate_secret_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Rq {
        Rq::random_hamming(rng, &self.ternary, Self::H)
    }

    pub fn generate_public_key<R: Rng + ?Sized>(&self, rng: &mut R, sk: &Rq) -> PublicKey {
        let e = Rq::random_with(rng, &self.noise);
        let a = Rq::random(rng);
        PublicKey {
            a: -(a * *sk + e),
            b: a,
        }
    }

    pub fn encrypt<R: Rng + ?Sized>(&self, rng: &mut R, pk: &PublicKey, pt: &Rq) -> CipherText {
        let u = self.generate_secret_key(rng);
        let e1 = Rq::random_with(rng, &self.noise);
        let e2 = Rq::random_with(rng, &self.noise);
        CipherText {
            a: pk.a * u + e1 + Self::upscale(pt),
            b: pk.b * u + e2,
        }
    }

    pub fn decrypt(&self, sk: &Rq, ct: &CipherText) -> Rq {
        let d = ct.a + ct.b * *sk;
        let mut coefficients = [FermatRing::zero(); Self::D];
        for (p, q) in coefficients.iter_mut().zip(&d.coefficients) {
            if q.absolute() > Self::HALF_DELTA {
                *p = FermatRing::one();
            }
        }
        Rq::new(coefficients)
    }
}

impl Default for Lpr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::fast_rng::FastDrg;

    #[test]
    fn round_trips() {
        let mut rng = FastDrg::from_entropy();
        let lpr = Lpr::new();
        let sk = lpr.generate_secret_key(&mut rng);
        let pk = lpr.generate_public_key(&mut rng, &sk);
        let pt = Rq::from_ints(&[1, 0, 1, 1, 0, 1]);
        let ct = lpr.encrypt(&mut rng, &pk, &pt);
        assert_eq!(pt, lpr.decrypt(&sk, &ct));
    }

    #[test]
    fn wrong_key_garbles() {
        let mut rng = FastDrg::from_entropy();
        let lpr = Lpr::new();
        let sk = lpr.generate_secret_key(&mut rng);
        let other = lpr.generate_secret_key(&mut rng);
        let pk = lpr.generate_public_key(&mut rng, &sk);
        let mut pt = Rq::zero();
        for i in 0..32 {
            pt.coefficients[i] = FermatRing::one();
        }
        let ct = lpr.encrypt(&mut rng, &pk, &pt);
        assert!(pt != lpr.decrypt(&other, &ct));
    }
}
