use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::config::MathContext;
use crate::field::{Field, NormedField, QuotientField};
use crate::math::decimal;

/// Exact fractions over arbitrary-precision integers.
///
/// Value equality is used throughout, so `2/4` and `1/2` compare equal even
/// when one of them was built without normalisation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FractionField {
    pub context: MathContext,
}

impl FractionField {
    pub fn new(context: MathContext) -> Self {
        Self { context }
    }
}

impl Field for FractionField {
    type Element = BigRational;
    type Quotient = BigRational;

    fn add(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn subtract(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a - b
    }

    fn multiply(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a * b
    }

    fn divide(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a / b
    }

    fn negate(&self, e: &BigRational) -> BigRational {
        -e
    }

    fn zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn one(&self) -> BigRational {
        BigRational::one()
    }
}

impl QuotientField for FractionField {
    fn equal_by_comparing(&self, a: &BigRational, b: &BigRational) -> bool {
        a.cmp(b).is_eq()
    }
}

impl NormedField for FractionField {
    type Norm = BigRational;
    type NormPow2 = BigRational;

    fn abs(&self, e: &BigRational) -> BigRational {
        e.abs()
    }

    fn abs_pow2(&self, e: &BigRational) -> BigRational {
        e * e
    }

    fn norm_zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn add_norms(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn norm_pow2_zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn add_norms_pow2(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn sqrt(&self, p: &BigRational) -> BigRational {
        decimal::sqrt(p, &self.context).unwrap_or_else(BigRational::zero)
    }

    fn norm_pow2_to_rational(&self, p: &BigRational) -> Option<BigRational> {
        Some(p.clone())
    }
}
