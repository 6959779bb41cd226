//! Square roots of rationals materialised as fixed-scale decimals.

use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::config::{MathContext, Rounding};

fn ten_pow(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

/// Square root of `value` with `context.scale` fractional digits.
///
/// Returns `None` for negative input.
pub fn sqrt(value: &BigRational, context: &MathContext) -> Option<BigRational> {
    if value.is_negative() {
        return None;
    }
    if value.is_zero() {
        return Some(BigRational::zero());
    }

    // sqrt(n / d) = sqrt(n * d) / d; one guard digit for rounding.
    let guard = match context.rounding {
        Rounding::Down => 0,
        Rounding::HalfUp => 1,
    };
    let digits = context.scale + guard;
    let radicand = value.numer() * value.denom() * ten_pow(2 * digits);
    let mut unscaled = Roots::sqrt(&radicand) / value.denom();

    if guard == 1 {
        unscaled = (unscaled + BigInt::from(5u32)) / BigInt::from(10u32);
    }
    Some(BigRational::new(unscaled, ten_pow(context.scale)))
}
