use core::cell::Cell;

use rand::distributions::Distribution;
use rand::Rng;

/// Uniform over {-1, 0, 1} by two-bit extraction with rejection of `0b11`.
/// Extracted bits are cached across samples.
pub struct TernaryUniform {
    cache: Cell<u64>,
    have_bits: Cell<u32>,
}

impl TernaryUniform {
    pub const fn new() -> Self {
        Self {
            cache: Cell::new(0),
            have_bits: Cell::new(0),
        }
    }

    pub fn reset(&self) {
        self.have_bits.set(0);
    }
}

impl Default for TernaryUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution<i64> for TernaryUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        loop {
            if self.have_bits.get() == 0 {
                self.cache.set(rng.next_u64());
                self.have_bits.set(64);
            }
            let sample = (self.cache.get() & 3) as i64;
            self.cache.set(self.cache.get() >> 2);
            self.have_bits.set(self.have_bits.get() - 2);
            if sample != 3 {
                return sample - 1;
            }
        }
    }
}

// https://eprint.iacr.org/2007/432
// SampleZ

/// Discrete Gaussian by rejection from the uniform distribution over
/// `[μ - σ·t, μ + σ·t]` with `t = log₂ 128`.
pub struct DiscreteGaussian {
    mu: f64,
    sigma: f64,
}

impl DiscreteGaussian {
    const TAIL: f64 = 7.0;

    pub const fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    pub fn min(&self) -> i64 {
        (self.mu - self.sigma * Self::TAIL).floor() as i64
    }

    pub fn max(&self) -> i64 {
        (self.mu + self.sigma * Self::TAIL).ceil() as i64
    }
}

impl Distribution<i64> for DiscreteGaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        // https://eprint.iacr.org/2015/953
        loop {
            let x = rng.gen_range(self.min()..=self.max());
            let deviation = x as f64 - self.mu;
            let ps = (-deviation * deviation / (2.0 * self.sigma * self.sigma)).exp();
            if rng.gen::<f64>() <= ps {
                return x;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ternary_range() {
        let mut rng = rand::thread_rng();
        let dst = TernaryUniform::new();
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let sample = dst.sample(&mut rng);
            assert!((-1..=1).contains(&sample));
            seen[(sample + 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn gaussian_tail_cut() {
        let mut rng = rand::thread_rng();
        let dst = DiscreteGaussian::new(0.0, 3.2);
        for _ in 0..1000 {
            let sample = dst.sample(&mut rng);
            assert!(sample >= dst.min() && sample <= dst.max());
        }
    }

    #[test]
    fn gaussian_concentrates() {
        let mut rng = rand::thread_rng();
        let dst = DiscreteGaussian::new(0.0, 0.5);
        let mut near = 0;
        for _ in 0..1000 {
            if dst.sample(&mut rng).abs() <= 1 {
                near += 1;
            }
        }
        assert!(near > 900);
    }
}
