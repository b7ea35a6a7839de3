pub mod convolution;
pub mod extension;
pub mod ntt;
pub mod ring;
pub mod ring_ntt;

pub use extension::{
    DilithiumRq, FermatRingDegree1024, FermatRingDegree1024Ntt, PervushinRingDegree2,
    PervushinRingDegree3, PervushinRingDegree4, Solinas62RingDegree2, Solinas62RingDegree3,
    Solinas62RingDegree4, Solinas62RingDegree64, Solinas62RingDegree64Ntt,
};
pub use ring::{PolynomialRing, PolynomialRingParams};
pub use ring_ntt::{NttRingParams, PolynomialRingNtt};
