//! Vectors and matrices generic over a field capability.
//!
//! Both types use 1-based indices, are immutable once built and validate
//! their entries on construction.
pub mod decimal;
pub mod entry;
pub mod matrix;
pub mod permutation;
pub mod vector;

pub use entry::{MatrixEntry, VectorEntry};
pub use matrix::{DeterminantMethod, Matrix};
pub use vector::Vector;
