use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::config::MathContext;
use crate::field::{Field, NormedField, QuotientField};
use crate::math::decimal;

/// Arbitrary-precision integers; quotients are exact fractions.
///
/// Euclidean norms are square roots and are materialised at the scale of
/// `context`. Division by zero panics, as it does for `BigRational`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegerField {
    pub context: MathContext,
}

impl IntegerField {
    pub fn new(context: MathContext) -> Self {
        Self { context }
    }
}

impl Field for IntegerField {
    type Element = BigInt;
    type Quotient = BigRational;

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn subtract(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a - b
    }

    fn multiply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn divide(&self, a: &BigInt, b: &BigInt) -> BigRational {
        BigRational::new(a.clone(), b.clone())
    }

    fn negate(&self, e: &BigInt) -> BigInt {
        -e
    }

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }
}

impl QuotientField for IntegerField {
    fn equal_by_comparing(&self, a: &BigInt, b: &BigInt) -> bool {
        a == b
    }
}

impl NormedField for IntegerField {
    type Norm = BigRational;
    type NormPow2 = BigInt;

    fn abs(&self, e: &BigInt) -> BigRational {
        BigRational::from_integer(e.abs())
    }

    fn abs_pow2(&self, e: &BigInt) -> BigInt {
        e * e
    }

    fn norm_zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn add_norms(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn norm_pow2_zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn add_norms_pow2(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn sqrt(&self, p: &BigInt) -> BigRational {
        // Sums of squares are never negative.
        decimal::sqrt(&BigRational::from_integer(p.clone()), &self.context)
            .unwrap_or_else(BigRational::zero)
    }

    fn norm_pow2_to_rational(&self, p: &BigInt) -> Option<BigRational> {
        Some(BigRational::from_integer(p.clone()))
    }
}
