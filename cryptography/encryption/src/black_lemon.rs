use rand::Rng;

use algebra::fermat::FermatRing;
use algebra::ring::{IntegerRing, RandomSample, Ring};

use crate::lpr::{CipherText, Lpr, PublicKey as LprPublicKey, Rq};

/// A detectable variant of LPR: ciphertexts are shifted by a random mask
/// so that only the holder of the full secret key can even detect that a
/// ciphertext addresses them, and the first `ELL` plaintext slots are
/// reserved as an all-zero tag.
pub struct BlackLemon {
    pke: Lpr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SecretKey {
    pub a: Rq,
    pub b: Rq,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey {
    pub a: LprPublicKey,
    pub b: Rq,
}

impl BlackLemon {
    /// Reserved all-zero plaintext slots.
    pub const ELL: usize = 2;

    /// Detection noise radius.
    pub const R: i64 = 40;

    pub fn new() -> Self {
        Self { pke: Lpr::new() }
    }

    pub fn generate_secret_key<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretKey {
        SecretKey {
            a: self.pke.generate_secret_key(rng),
            b: Rq::random(rng),
        }
    }

    pub fn generate_public_key<R: Rng + ?Sized>(&self, rng: &mut R, sk: &SecretKey) -> PublicKey {
        PublicKey {
            a: self.pke.generate_public_key(rng, &sk.a),
            b: -sk.b,
        }
    }

    pub fn encrypt<R: Rng + ?Sized>(&self, rng: &mut R, pk: &PublicKey, pt: &Rq) -> CipherText {
        let mut ct = self.pke.encrypt(rng, &pk.a, pt);
        ct.a += pk.b;
        ct
    }

    pub fn decrypt(&self, sk: &SecretKey, ct: &CipherText) -> Rq {
        self.pke.decrypt(
            &sk.a,
            &CipherText {
                a: ct.a + sk.b,
                b: ct.b,
            },
        )
    }

    /// Decides whether a ciphertext is addressed to this key. Absent when
    /// any coefficient falls outside the noise radius around `{0, Δ}` or
    /// when the reserved slots are non-zero, which is also the outcome for
    /// trivial "snake-eye" ciphertexts and for foreign keys.
    pub fn detect(&self, sk: &SecretKey, ct: &CipherText) -> Option<Rq> {
        let d = ct.a + ct.b * sk.a + sk.b;
        let mut pt = Rq::zero();
        for (p, q) in pt.coefficients.iter_mut().zip(&d.coefficients) {
            if q.absolute() <= Self::R {
                *p = FermatRing::zero();
            } else if Lpr::DELTA - q.absolute() <= Self::R {
                *p = FermatRing::one();
            } else {
                return None;
            }
        }
        for i in 0..Self::ELL {
            if !pt.coefficients[i].is_zero() {
                return None;
            }
        }
        Some(pt)
    }
}

impl Default for BlackLemon {
    fn default() -> Self {
        Self::new()
    }
}
