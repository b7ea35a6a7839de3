use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A fast deterministic random generator over the ChaCha-8 keystream.
///
/// The generator emits 32-bit words from 16-word blocks; `discard`
/// fast-forwards exactly that many emitted words without generating them.
pub struct FastDrg {
    inner: ChaCha8Rng,
}

impl FastDrg {
    /// Words per keystream block.
    pub const WORD_COUNT: usize = 16;

    pub const DEFAULT_SEED: [u8; 32] = [0; 32];

    pub fn new() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }

    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha8Rng::from_seed(seed),
        }
    }

    /// A generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn seed(&mut self, seed: [u8; 32]) {
        self.inner = ChaCha8Rng::from_seed(seed);
    }

    /// Skips exactly `z` 32-bit output words.
    pub fn discard(&mut self, z: u128) {
        self.inner.set_word_pos(self.inner.get_word_pos() + z);
    }
}

impl Default for FastDrg {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for FastDrg {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
