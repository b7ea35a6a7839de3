//! Convolution kernels realising multiplication in quotient rings of
//! polynomials.

use algebra::ring::Ring;

/// Negacyclic convolution, multiplication modulo `x^N + 1`.
pub fn negacyclic<Z: Ring, const N: usize>(r: &mut [Z; N], a: &[Z; N], b: &[Z; N]) {
    for k in 0..N {
        for i in 0..=k {
            r[k] += a[i] * b[k - i];
        }
        for i in k + 1..N {
            r[k] -= a[i] * b[k + N - i];
        }
    }
}

/// Linear (acyclic) convolution; `r` has length `a.len() + b.len() - 1`
/// and is accumulated into.
pub fn linear<Z: Ring>(r: &mut [Z], a: &[Z], b: &[Z]) {
    debug_assert_eq!(r.len(), a.len() + b.len() - 1);
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            r[i + j] += *x * *y;
        }
    }
}

/// Multiplication modulo `x^N - zeta` for `N` in {2, 4}.
pub fn binomial<Z: Ring>(r: &mut [Z], a: &[Z], b: &[Z], zeta: Z) {
    match a.len() {
        2 => {
            r[0] = a[0] * b[0] + zeta * (a[1] * b[1]);
            r[1] = a[0] * b[1] + a[1] * b[0];
        }
        4 => {
            r[0] = a[0] * b[0] + zeta * (a[1] * b[3] + a[2] * b[2] + a[3] * b[1]);
            r[1] = a[0] * b[1] + a[1] * b[0] + zeta * (a[2] * b[3] + a[3] * b[2]);
            r[2] = a[0] * b[2] + a[1] * b[1] + a[2] * b[0] + zeta * (a[3] * b[3]);
            r[3] = a[0] * b[3] + a[1] * b[2] + a[2] * b[1] + a[3] * b[0];
        }
        n => unimplemented!("binomial convolution of length {n}"),
    }
}

// r = a - b·c, with shortcuts for the common small constants.
fn fuse_into<Z: Ring>(r: &mut Z, a: Z, b: Z, c: Z) {
    if c.is_zero() {
        *r = a;
    } else if c == Z::one() {
        *r = a - b;
    } else if c == Z::from_int(2) {
        *r = a - b.double();
    } else {
        *r = a - b * c;
    }
}

// r -= a·b, with the same shortcuts.
fn fuse_sub<Z: Ring>(r: &mut Z, a: Z, b: Z) {
    if b.is_zero() {
    } else if b == Z::one() {
        *r -= a;
    } else if b == Z::from_int(2) {
        *r -= a.double();
    } else {
        *r -= a * b;
    }
}

/// Multiplication modulo an arbitrary monic polynomial of degree `N ≤ 4`,
/// given as its `N + 1` coefficients.
pub fn quotient<Z: Ring, const N: usize>(r: &mut [Z; N], a: &[Z; N], b: &[Z; N], m: &[Z]) {
    debug_assert_eq!(m.len(), N + 1);
    debug_assert_eq!(m[N], Z::one(), "quotient modulus must be monic");
    let mut t = vec![Z::zero(); 2 * N - 1];
    linear(&mut t, a, b);
    match N {
        2 => {
            fuse_into(&mut r[0], t[0], t[2], m[0]);
            fuse_into(&mut r[1], t[1], t[2], m[1]);
        }
        3 => {
            fuse_into(&mut r[1], t[1], t[4], m[0]);
            fuse_into(&mut r[2], t[2], t[4], m[1]);
            let t4 = t[4];
            fuse_sub(&mut t[3], t4, m[2]);

            fuse_into(&mut r[0], t[0], t[3], m[0]);
            fuse_sub(&mut r[1], t[3], m[1]);
            fuse_sub(&mut r[2], t[3], m[2]);
        }
        4 => {
            fuse_into(&mut r[2], t[2], t[6], m[0]);
            fuse_into(&mut r[3], t[3], t[6], m[1]);
            let t6 = t[6];
            fuse_sub(&mut t[4], t6, m[2]);
            fuse_sub(&mut t[5], t6, m[3]);

            fuse_into(&mut r[1], t[1], t[5], m[0]);
            fuse_sub(&mut r[2], t[5], m[1]);
            fuse_sub(&mut r[3], t[5], m[2]);
            let t5 = t[5];
            fuse_sub(&mut t[4], t5, m[3]);

            fuse_into(&mut r[0], t[0], t[4], m[0]);
            fuse_sub(&mut r[1], t[4], m[1]);
            fuse_sub(&mut r[2], t[4], m[2]);
            fuse_sub(&mut r[3], t[4], m[3]);
        }
        n => unimplemented!("quotient convolution of degree {n}"),
    }
}
