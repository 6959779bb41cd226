use num_complex::Complex;
use num_rational::BigRational;

use crate::field::{Field, NormedField, QuotientField};

/// `Complex<f64>` elements; norms are taken over the moduli.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComplexField;

impl Field for ComplexField {
    type Element = Complex<f64>;
    type Quotient = Complex<f64>;

    fn add(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a + b
    }

    fn subtract(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a - b
    }

    fn multiply(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a * b
    }

    fn divide(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a / b
    }

    fn negate(&self, e: &Complex<f64>) -> Complex<f64> {
        -e
    }

    fn zero(&self) -> Complex<f64> {
        Complex::new(0.0, 0.0)
    }

    fn one(&self) -> Complex<f64> {
        Complex::new(1.0, 0.0)
    }
}

impl QuotientField for ComplexField {
    fn equal_by_comparing(&self, a: &Complex<f64>, b: &Complex<f64>) -> bool {
        let same = |x: f64, y: f64| x == y || (x.is_nan() && y.is_nan());
        same(a.re, b.re) && same(a.im, b.im)
    }
}

impl NormedField for ComplexField {
    type Norm = f64;
    type NormPow2 = f64;

    fn abs(&self, e: &Complex<f64>) -> f64 {
        e.norm()
    }

    fn abs_pow2(&self, e: &Complex<f64>) -> f64 {
        e.norm_sqr()
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
