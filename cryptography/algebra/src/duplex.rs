use digest::Digest;

/// The duplex-sponge contract every Fiat–Shamir oracle must satisfy.
///
/// A duplex alternates byte absorption and byte squeezing over one evolving
/// state. Cloning forks the state: the sum-check prover forks before each
/// squeeze so that the main transcript only ever absorbs, and the verifier
/// re-derives the same challenges by replaying the same absorptions.
pub trait Duplex: Clone + Default {
    type Seed: Default;

    fn with_seed(seed: Self::Seed) -> Self;

    fn absorb_bytes(&mut self, bytes: &[u8]);

    /// Fills `out` with fresh output, advancing the state.
    fn squeeze_bytes(&mut self, out: &mut [u8]);
}

/// Structures that can be absorbed into a duplex, one ring element at a
/// time.
pub trait Absorb {
    fn absorb<S: Duplex>(&self, sponge: &mut S);
}

/// Structures that can be squeezed out of a duplex.
pub trait Squeeze: Sized {
    fn squeeze<S: Duplex>(sponge: &mut S) -> Self;
}

/// A duplex over any `digest` hash. Absorption streams into the running
/// hasher; every squeeze finalizes a fork of it under a distinct counter,
/// so output blocks are independent and the counter advances the state.
#[derive(Clone)]
pub struct DigestDuplex<D: Digest + Clone> {
    hasher: D,
    squeezed: u64,
}

pub type Sha3Duplex = DigestDuplex<sha3::Sha3_256>;

impl<D: Digest + Clone> DigestDuplex<D> {
    pub const DEFAULT_SEED: [u8; 32] = [0; 32];

    pub fn new() -> Self {
        Self {
            hasher: D::new(),
            squeezed: 0,
        }
    }
}

impl<D: Digest + Clone> Default for DigestDuplex<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + Clone> Duplex for DigestDuplex<D> {
    type Seed = [u8; 32];

    fn with_seed(seed: Self::Seed) -> Self {
        let mut duplex = Self::new();
        duplex.absorb_bytes(&seed);
        duplex
    }

    fn absorb_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn squeeze_bytes(&mut self, out: &mut [u8]) {
        let block = <D as Digest>::output_size();
        for chunk in out.chunks_mut(block) {
            let mut fork = self.hasher.clone();
            fork.update(b"squeeze");
            fork.update(self.squeezed.to_le_bytes());
            let digest = fork.finalize();
            chunk.copy_from_slice(&digest[..chunk.len()]);
            self.squeezed += 1;
        }
    }
}
