use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::config::MathContext;
use crate::field::{Field, NormedField, QuotientField};
use crate::math::decimal;

/// Gaussian integers `a + bi` with arbitrary-precision parts.
///
/// Quotients leave the ring and are returned as complex fractions. Moduli
/// are square roots materialised at the scale of `context`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GaussianField {
    pub context: MathContext,
}

impl GaussianField {
    pub fn new(context: MathContext) -> Self {
        Self { context }
    }
}

impl Field for GaussianField {
    type Element = Complex<BigInt>;
    type Quotient = Complex<BigRational>;

    fn add(&self, a: &Complex<BigInt>, b: &Complex<BigInt>) -> Complex<BigInt> {
        a + b
    }

    fn subtract(&self, a: &Complex<BigInt>, b: &Complex<BigInt>) -> Complex<BigInt> {
        a - b
    }

    fn multiply(&self, a: &Complex<BigInt>, b: &Complex<BigInt>) -> Complex<BigInt> {
        a * b
    }

    /// `a * conj(b) / |b|^2`; panics when `b` is zero.
    fn divide(&self, a: &Complex<BigInt>, b: &Complex<BigInt>) -> Complex<BigRational> {
        let numerator = a * b.conj();
        let denominator = b.norm_sqr();
        Complex::new(
            BigRational::new(numerator.re, denominator.clone()),
            BigRational::new(numerator.im, denominator),
        )
    }

    fn negate(&self, e: &Complex<BigInt>) -> Complex<BigInt> {
        -e
    }

    fn zero(&self) -> Complex<BigInt> {
        Complex::new(BigInt::zero(), BigInt::zero())
    }

    fn one(&self) -> Complex<BigInt> {
        Complex::new(BigInt::one(), BigInt::zero())
    }
}

impl QuotientField for GaussianField {
    fn equal_by_comparing(&self, a: &Complex<BigInt>, b: &Complex<BigInt>) -> bool {
        a == b
    }
}

impl NormedField for GaussianField {
    type Norm = BigRational;
    type NormPow2 = BigInt;

    fn abs(&self, e: &Complex<BigInt>) -> BigRational {
        self.sqrt(&self.abs_pow2(e))
    }

    fn abs_pow2(&self, e: &Complex<BigInt>) -> BigInt {
        e.norm_sqr()
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
