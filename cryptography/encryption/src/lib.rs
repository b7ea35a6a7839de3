pub mod bfv;
pub mod black_lemon;
pub mod lpr;

pub use bfv::Bfv;
pub use black_lemon::BlackLemon;
pub use lpr::Lpr;
