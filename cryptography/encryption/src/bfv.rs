// https://eprint.iacr.org/2012/144
// https://eprint.iacr.org/2024/1587

use core::marker::PhantomData;

use rand::distributions::Uniform;
use rand::Rng;

use algebra::distribution::DiscreteGaussian;
use algebra::ring::{IntegerRing, RandomSample, Ring, SampleWith};
use polynomial::ring::{PolynomialRing, PolynomialRingParams};

/// The BFV scheme over a plaintext ring `Rt = Zt[x]/f` and a ciphertext
/// ring `Rq = Zq[x]/f` of the same degree, with Δ = q/t rescaling.
pub struct Bfv<Zt, Zq, Pt, Pq, const N: usize> {
    small: Uniform<i64>,
    noise: DiscreteGaussian,
    _rings: PhantomData<(Zt, Zq, Pt, Pq)>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey<Zq: Ring, Pq: PolynomialRingParams<Zq, N>, const N: usize> {
    pub a: PolynomialRing<Zq, Pq, N>,
    pub b: PolynomialRing<Zq, Pq, N>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CipherText<Zq: Ring, Pq: PolynomialRingParams<Zq, N>, const N: usize> {
    pub a: PolynomialRing<Zq, Pq, N>,
    pub b: PolynomialRing<Zq, Pq, N>,
}

impl<Zt, Zq, Pt, Pq, const N: usize> Bfv<Zt, Zq, Pt, Pq, N>
where
    Zt: IntegerRing,
    Zq: IntegerRing + RandomSample,
    Pt: PolynomialRingParams<Zt, N>,
    Pq: PolynomialRingParams<Zq, N>,
{
    /// Hamming weight of the secret key.
    pub const H: usize = if N < 256 { N } else { 256 };

    // 8 / √(2π), per https://eprint.iacr.org/2019/939
    const SIGMA: f64 = 3.1915382432114616;

    pub fn new() -> Self {
        Self {
            small: Uniform::new_inclusive(-1, 2),
            noise: DiscreteGaussian::new(0.0, Self::SIGMA),
            _rings: PhantomData,
        }
    }

    fn delta() -> f64 {
        Zq::modulus() as f64 / Zt::modulus() as f64
    }

    fn inv_delta() -> f64 {
        Zt::modulus() as f64 / Zq::modulus() as f64
    }

    pub fn lift(zt: &Zt) -> Zq {
        Zq::from_int(zt.balanced())
    }

    pub fn lift_ring(rt: &PolynomialRing<Zt, Pt, N>) -> PolynomialRing<Zq, Pq, N> {
        let mut coefficients = [Zq::zero(); N];
        for (q, t) in coefficients.iter_mut().zip(&rt.coefficients) {
            *q = Self::lift(t);
        }
        PolynomialRing::new(coefficients)
    }

    /// Rescales a plaintext by Δ into the ciphertext ring.
    pub fn upscale(rt: &PolynomialRing<Zt, Pt, N>) -> PolynomialRing<Zq, Pq, N> {
        let mut coefficients = [Zq::zero(); N];
        for (q, t) in coefficients.iter_mut().zip(&rt.coefficients) {
            *q = Zq::from_int((Self::delta() * t.balanced() as f64).round() as i64);
        }
        PolynomialRing::new(coefficients)
    }

    pub fn generate_secret_key<R: Rng + ?Sized>(&self, rng: &mut R) -> PolynomialRing<Zq, Pq, N> {
        PolynomialRing::random_hamming(rng, &self.small, Self::H)
    }

    pub fn generate_public_key<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sk: &PolynomialRing<Zq, Pq, N>,
    ) -> PublicKey<Zq, Pq, N> {
        let a: PolynomialRing<Zq, Pq, N> = PolynomialRing::random(rng);
        let e: PolynomialRing<Zq, Pq, N> = PolynomialRing::random_with(rng, &self.noise);
        PublicKey {
            a: -(a * *sk + e),
            b: a,
        }
    }

    /// Secret-key mode encryption.
    pub fn encrypt_with_secret_key<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sk: &PolynomialRing<Zq, Pq, N>,
        pt: &PolynomialRing<Zt, Pt, N>,
    ) -> CipherText<Zq, Pq, N> {
        let a = PolynomialRing::random(rng);
        let e = PolynomialRing::random_with(rng, &self.noise);
        CipherText {
            a: a * *sk + e + Self::upscale(pt),
            b: -a,
        }
    }

    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pk: &PublicKey<Zq, Pq, N>,
        pt: &PolynomialRing<Zt, Pt, N>,
    ) -> CipherText<Zq, Pq, N> {
        let u = self.generate_secret_key(rng);
        let e1 = PolynomialRing::random_with(rng, &self.noise);
        let e2 = PolynomialRing::random_with(rng, &self.noise);
        CipherText {
            a: pk.a * u + e1 + Self::upscale(pt),
            b: pk.b * u + e2,
        }
    }

    pub fn decrypt(
        &self,
        sk: &PolynomialRing<Zq, Pq, N>,
        ct: &CipherText<Zq, Pq, N>,
    ) -> PolynomialRing<Zt, Pt, N> {
        let d = ct.a + ct.b * *sk;
        let mut coefficients = [Zt::zero(); N];
        for (t, q) in coefficients.iter_mut().zip(&d.coefficients) {
            *t = Zt::from_int((Self::inv_delta() * q.balanced() as f64).round() as i64);
        }
        PolynomialRing::new(coefficients)
    }
}

impl<Zt, Zq, Pt, Pq, const N: usize> Default for Bfv<Zt, Zq, Pt, Pq, N>
where
    Zt: IntegerRing,
    Zq: IntegerRing + RandomSample,
    Pt: PolynomialRingParams<Zt, N>,
    Pq: PolynomialRingParams<Zq, N>,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Homomorphic evaluation over BFV ciphertexts.
pub struct Evaluator<Zq: Ring, Pq: PolynomialRingParams<Zq, N>, const N: usize> {
    pub ct: CipherText<Zq, Pq, N>,
}

impl<Zq, Pq, const N: usize> Evaluator<Zq, Pq, N>
where
    Zq: IntegerRing,
    Pq: PolynomialRingParams<Zq, N>,
{
    pub fn new(ct: CipherText<Zq, Pq, N>) -> Self {
        Self { ct }
    }

    pub fn add_plain<Zt, Pt>(&mut self, other: &PolynomialRing<Zt, Pt, N>)
    where
        Zt: IntegerRing,
        Pt: PolynomialRingParams<Zt, N>,
        Zq: RandomSample,
    {
        self.ct.a += Bfv::<Zt, Zq, Pt, Pq, N>::upscale(other);
    }

    pub fn add_cipher(&mut self, other: &CipherText<Zq, Pq, N>) {
        self.ct.a += other.a;
        self.ct.b += other.b;
    }

    pub fn mul_scalar<Zt, Pt>(&mut self, other: &Zt)
    where
        Zt: IntegerRing,
        Pt: PolynomialRingParams<Zt, N>,
        Zq: RandomSample,
    {
        let m = Bfv::<Zt, Zq, Pt, Pq, N>::lift(other);
        self.ct.a = self.ct.a.scale(&m);
        self.ct.b = self.ct.b.scale(&m);
    }

    pub fn mul_plain<Zt, Pt>(&mut self, other: &PolynomialRing<Zt, Pt, N>)
    where
        Zt: IntegerRing,
        Pt: PolynomialRingParams<Zt, N>,
        Zq: RandomSample,
    {
        let m = Bfv::<Zt, Zq, Pt, Pq, N>::lift_ring(other);
        self.ct.a *= m;
        self.ct.b *= m;
    }
}
