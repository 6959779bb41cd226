//! linfield: vectors and matrices over pluggable numeric fields.
//!
//! Element arithmetic is injected through the capability traits in
//! [`field`]; the generic engine in [`math`] builds on them to provide
//! vector and matrix arithmetic, structural predicates, norms and exact
//! determinants for integer, rational, real and complex element types.
//!
//! All values are immutable and every fallible operation returns
//! [`error::Result`].
pub mod config;
pub mod error;
pub mod field;
pub mod math;

pub use config::{MathContext, Rounding};
pub use error::{LinalgError, Result};
pub use field::{Field, NormedField, QuotientField};
pub use math::{DeterminantMethod, Matrix, MatrixEntry, Vector, VectorEntry};
