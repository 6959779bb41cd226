use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::config::MathContext;
use crate::field::{Field, NormedField, QuotientField};
use crate::math::decimal;

/// Machine `i64` elements; quotients are exact fractions.
///
/// Element arithmetic is checked and panics on overflow with the name of the
/// operation, so results are never silently wrapped. Use [`super::IntegerField`]
/// when values may leave the `i64` range. Norms are widened to arbitrary
/// precision and cannot overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LongField {
    pub context: MathContext,
}

impl LongField {
    pub fn new(context: MathContext) -> Self {
        Self { context }
    }
}

fn checked(result: Option<i64>, operation: &str) -> i64 {
    match result {
        Some(value) => value,
        None => panic!("i64 overflow in {}", operation),
    }
}

impl Field for LongField {
    type Element = i64;
    type Quotient = BigRational;

    fn add(&self, a: &i64, b: &i64) -> i64 {
        checked(a.checked_add(*b), "add")
    }

    fn subtract(&self, a: &i64, b: &i64) -> i64 {
        checked(a.checked_sub(*b), "subtract")
    }

    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        checked(a.checked_mul(*b), "multiply")
    }

    fn divide(&self, a: &i64, b: &i64) -> BigRational {
        BigRational::new(BigInt::from(*a), BigInt::from(*b))
    }

    fn negate(&self, e: &i64) -> i64 {
        checked(e.checked_neg(), "negate")
    }

    fn zero(&self) -> i64 {
        0
    }

    fn one(&self) -> i64 {
        1
    }
}

impl QuotientField for LongField {
    fn equal_by_comparing(&self, a: &i64, b: &i64) -> bool {
        a == b
    }
}

impl NormedField for LongField {
    type Norm = BigRational;
    type NormPow2 = BigInt;

    fn abs(&self, e: &i64) -> BigRational {
        BigRational::from_integer(BigInt::from(*e).abs())
    }

    fn abs_pow2(&self, e: &i64) -> BigInt {
        let e = BigInt::from(*e);
        &e * &e
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
        decimal::sqrt(&BigRational::from_integer(p.clone()), &self.context)
            .unwrap_or_else(BigRational::zero)
    }

    fn norm_pow2_to_rational(&self, p: &BigInt) -> Option<BigRational> {
        Some(BigRational::from_integer(p.clone()))
    }
}
