pub mod builder;
pub mod ccs;
pub mod r1cs;

pub use builder::{CircuitBuilder, Expression, Variable, VariableKind};
pub use ccs::{CcsPolynomial, CustomizableConstraintSystem};
pub use r1cs::{Foldable, R1cs};
