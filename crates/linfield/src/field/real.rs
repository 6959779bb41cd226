use num_rational::BigRational;

use crate::field::{Field, NormedField, QuotientField};

/// `f64` elements with IEEE semantics, including division by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RealField;

impl Field for RealField {
    type Element = f64;
    type Quotient = f64;

    fn add(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn subtract(&self, a: &f64, b: &f64) -> f64 {
        a - b
    }

    fn multiply(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn divide(&self, a: &f64, b: &f64) -> f64 {
        a / b
    }

    fn negate(&self, e: &f64) -> f64 {
        -e
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn one(&self) -> f64 {
        1.0
    }
}

impl QuotientField for RealField {
    /// `==`, except that all NaNs are equivalent to each other.
    fn equal_by_comparing(&self, a: &f64, b: &f64) -> bool {
        a == b || (a.is_nan() && b.is_nan())
    }
}

impl NormedField for RealField {
    type Norm = f64;
    type NormPow2 = f64;

    fn abs(&self, e: &f64) -> f64 {
        e.abs()
    }

    fn abs_pow2(&self, e: &f64) -> f64 {
        e * e
    }

    fn norm_zero(&self) -> f64 {
        0.0
    }

    fn add_norms(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn norm_pow2_zero(&self) -> f64 {
        0.0
    }

    fn add_norms_pow2(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn sqrt(&self, p: &f64) -> f64 {
        p.sqrt()
    }

    fn norm_pow2_to_rational(&self, p: &f64) -> Option<BigRational> {
        BigRational::from_float(*p)
    }
}
