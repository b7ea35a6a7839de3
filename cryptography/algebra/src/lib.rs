pub mod bigint;
pub mod dilithium;
pub mod distribution;
pub mod duplex;
pub mod fast_rng;
pub mod fermat;
pub mod field25519;
pub mod lm62;
pub mod matrix_dense;
pub mod matrix_sparse;
pub mod pervushin;
pub mod prime_field;
pub mod ring;
pub mod ring_product;
pub mod solinas62;
pub mod vector_dense;
pub mod vector_sparse;
pub mod zq;

// Re-export rand so downstream crates do not need to independently
// version it.
pub use rand;

pub use bigint::BigInt;
pub use dilithium::DilithiumRing;
pub use duplex::{Absorb, DigestDuplex, Duplex, Sha3Duplex, Squeeze};
pub use fast_rng::FastDrg;
pub use fermat::FermatRing;
pub use field25519::Field25519;
pub use lm62::Lm62Ring;
pub use matrix_dense::MatrixDense;
pub use matrix_sparse::MatrixSparse;
pub use pervushin::PervushinRing;
pub use prime_field::PrimeField;
pub use ring::{
    DivisionRing, EuclideanNorm, ExtensionOf, InfinityNorm, IntegerRing, NttRing, RandomSample,
    Ring, SampleWith,
};
pub use ring_product::{RingProduct2, RingProduct3, RingProduct4};
pub use solinas62::Solinas62Ring;
pub use vector_dense::VectorDense;
pub use vector_sparse::VectorSparse;
pub use zq::{MontgomeryRing, MontgomeryRingParams, NttParams};
