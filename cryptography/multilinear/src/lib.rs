pub mod eq;
pub mod fuse;
pub mod hypercube;
pub mod interpolation;
pub mod mle;
pub mod multivariate;
pub mod pow;
pub mod sumcheck;
pub mod univariate;

pub use eq::EqExtension;
pub use fuse::Fuse;
pub use hypercube::Hypercube;
pub use mle::MultilinearExtension;
pub use multivariate::{Homomorph, MultivariatePolynomial};
pub use pow::PowExtension;
pub use sumcheck::{Proof, ProofEarlyStopped, SumCheck};
pub use univariate::UnivariatePolynomial;
