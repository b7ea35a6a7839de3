//! Number-theoretic transform with variable inertia.
//!
//! When the twiddle table is shorter than the transform length, the
//! transform stops early and every frequency bin holds a residual
//! polynomial of degree `inertia` that is convolved separately.
//!
//! https://arxiv.org/abs/2211.13546

use algebra::ring::{NttRing, Ring};

use crate::convolution;

/// The number of residual coefficients per frequency bin.
pub fn transform_inertia<Z: NttRing, const N: usize>() -> usize {
    N / Z::twiddle_count()
}

/// Forward transform, Cooley–Tukey butterflies.
pub fn cooley_tukey<Z: NttRing, const N: usize>(a: &mut [Z; N]) {
    let inertia = transform_inertia::<Z, N>();
    let mut j = 0;
    let mut k = N / 2;
    while k >= inertia {
        let mut l = 0;
        while l < N {
            j += 1;
            let zeta = Z::twiddle(j);
            for i in l..l + k {
                let t = a[i + k] * zeta;
                a[i + k] = a[i] - t;
                a[i] += t;
            }
            l += 2 * k;
        }
        k >>= 1;
    }
}

/// Inverse transform, Gentleman–Sande butterflies, including the final
/// rescale by the inverse of the transform length.
pub fn gentleman_sande<Z: NttRing, const N: usize>(a: &mut [Z; N]) {
    let inertia = transform_inertia::<Z, N>();
    let mut j = Z::twiddle_count();
    let mut k = inertia;
    while k <= N / 2 {
        let mut l = 0;
        while l < N {
            j -= 1;
            let zeta = -Z::twiddle(j);
            for i in l..l + k {
                let t = a[i];
                a[i] += a[i + k];
                a[i + k] = t - a[i + k];
                a[i + k] *= zeta;
            }
            l += 2 * k;
        }
        k <<= 1;
    }

    let scale = Z::inverse_twiddles();
    for x in a.iter_mut() {
        *x *= scale;
    }
}

/// Convolution of two spectra: componentwise when the transform splits
/// completely, per-block binomial ideal convolution otherwise.
pub fn convolute<Z: NttRing, const N: usize>(r: &mut [Z; N], a: &[Z; N], b: &[Z; N]) {
    let inertia = transform_inertia::<Z, N>();
    match inertia {
        1 => {
            for i in 0..N {
                r[i] = a[i] * b[i];
            }
        }
        4 => {
            let k = inertia * 2;
            let l = N / k;
            for i in 0..l {
                let zeta = Z::twiddle(l + i);
                convolution::binomial(
                    &mut r[i * k..i * k + inertia],
                    &a[i * k..i * k + inertia],
                    &b[i * k..i * k + inertia],
                    zeta,
                );
                convolution::binomial(
                    &mut r[i * k + inertia..(i + 1) * k],
                    &a[i * k + inertia..(i + 1) * k],
                    &b[i * k + inertia..(i + 1) * k],
                    -zeta,
                );
            }
        }
        inertia => unimplemented!("NTT convolution with inertia {inertia}"),
    }
}
