//! Capability traits and the concrete capabilities shipped with the crate.
//!
//! The engine in [`crate::math`] never touches element arithmetic directly;
//! it is generic over these traits and receives one capability value per
//! vector or matrix.
pub mod capability;
pub mod complex;
pub mod fraction;
pub mod gaussian;
pub mod integer;
pub mod long;
pub mod real;

pub use capability::{Field, NormedField, QuotientField};
pub use complex::ComplexField;
pub use fraction::FractionField;
pub use gaussian::GaussianField;
pub use integer::IntegerField;
pub use long::LongField;
pub use real::RealField;
