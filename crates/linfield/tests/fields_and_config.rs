//! Integration tests for the shipped field capabilities and MathContext config.

use std::str::FromStr;

use linfield::field::{
    ComplexField, FractionField, GaussianField, IntegerField, LongField, RealField,
};
use linfield::{Field, MathContext, Matrix, NormedField, QuotientField, Rounding, Vector};
use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;

fn big(v: i64) -> BigInt {
    BigInt::from(v)
}

fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(big(n), big(d))
}

// ---------------------------------------------------------------------------
// Field capabilities
// ---------------------------------------------------------------------------

#[test]
fn integer_field_division_is_exact() {
    let field = IntegerField::default();
    assert_eq!(field.divide(&big(6), &big(4)), ratio(3, 2));
    assert_eq!(field.negate(&big(5)), big(-5));
    assert!(field.is_zero(&field.zero()));
    assert!(!field.is_zero(&field.one()));
}

#[test]
fn long_field_arithmetic_and_norms() {
    let field = LongField::default();
    assert_eq!(field.divide(&6, &4), ratio(3, 2));
    assert_eq!(field.negate(&5), -5);

    let v = Vector::from_elements(vec![3, -4], field).unwrap();
    assert_eq!(v.dot_product(&v).unwrap(), 25);
    assert_eq!(v.euclidean_norm(), ratio(5, 1));
    assert_eq!(v.max_norm(), ratio(4, 1));

    let m = Matrix::from_rows(vec![vec![2, 1], vec![7, 4]], field).unwrap();
    assert_eq!(m.determinant().unwrap(), 1);
}

#[test]
fn long_field_norms_do_not_overflow() {
    let v = Vector::from_elements(vec![i64::MAX, i64::MAX], LongField::default()).unwrap();
    let expected = big(i64::MAX) * big(i64::MAX) * big(2);
    assert_eq!(v.euclidean_norm_pow2(), expected);
}

#[test]
#[should_panic(expected = "i64 overflow in add")]
fn long_field_add_overflow_panics() {
    LongField::default().add(&i64::MAX, &1);
}

#[test]
#[should_panic(expected = "i64 overflow in negate")]
fn long_field_negate_overflow_panics() {
    LongField::default().negate(&i64::MIN);
}

#[test]
fn real_field_equality_treats_nans_alike() {
    let field = RealField;
    assert!(field.equal_by_comparing(&f64::NAN, &f64::NAN));
    assert!(field.equal_by_comparing(&0.0, &-0.0));
    assert!(!field.equal_by_comparing(&1.0, &f64::NAN));
    assert_eq!(field.divide(&1.0, &4.0), 0.25);
}

#[test]
fn fraction_field_compares_unnormalized_values() {
    let field = FractionField::default();
    let raw = BigRational::new_raw(big(3), big(9));
    assert!(field.equal_by_comparing(&raw, &ratio(1, 3)));
    assert_eq!(field.divide(&ratio(1, 2), &ratio(1, 4)), ratio(2, 1));
}

#[test]
fn complex_field_norms() {
    let field = ComplexField;
    let z = Complex::new(3.0, 4.0);
    assert_eq!(field.abs(&z), 5.0);
    assert_eq!(field.abs_pow2(&z), 25.0);
    assert_eq!(field.multiply(&z, &Complex::new(0.0, 1.0)), Complex::new(-4.0, 3.0));
}

#[test]
fn gaussian_field_division_leaves_the_ring() {
    let field = GaussianField::default();
    let a = Complex::new(big(1), big(1));
    let b = Complex::new(big(1), big(-1));
    // (1 + i) / (1 - i) = i
    assert_eq!(field.divide(&a, &b), Complex::new(ratio(0, 1), ratio(1, 1)));
    // (1 + 2i) / 2 = 1/2 + i
    let two = Complex::new(big(2), big(0));
    let c = Complex::new(big(1), big(2));
    assert_eq!(field.divide(&c, &two), Complex::new(ratio(1, 2), ratio(1, 1)));
}

#[test]
fn gaussian_vector_norms() {
    let field = GaussianField::new(MathContext::new(3, Rounding::Down));
    let v = Vector::from_elements(
        vec![Complex::new(big(3), big(4)), Complex::new(big(1), big(1))],
        field,
    )
    .unwrap();
    assert_eq!(v.euclidean_norm_pow2(), big(27));
    // |3 + 4i| + |1 + i| = 5 + 1.414
    assert_eq!(v.taxicab_norm(), ratio(6414, 1000));
    assert_eq!(v.max_norm(), ratio(5, 1));
}

#[test]
fn complex_matrix_is_orthogonal_and_invertible() {
    let i = Complex::new(0.0, 1.0);
    let one = Complex::new(1.0, 0.0);
    let m = Matrix::from_rows(vec![vec![one, i], vec![i, one]], ComplexField).unwrap();
    // 1 - i^2 = 2
    assert_eq!(m.determinant().unwrap(), Complex::new(2.0, 0.0));
    assert!(m.is_invertible());
    assert!(m.is_symmetric());

    let u = m.row_vector(1).unwrap();
    let w = Vector::from_elements(vec![Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)], ComplexField)
        .unwrap();
    assert!(u.orthogonal_to(&w).unwrap());
}

// ---------------------------------------------------------------------------
// MathContext / Rounding
// ---------------------------------------------------------------------------

#[test]
fn math_context_default_is_decimal128() {
    let ctx = MathContext::default();
    assert_eq!(ctx, MathContext::DECIMAL128);
    assert_eq!(ctx.scale, 34);
    assert_eq!(ctx.rounding, Rounding::HalfUp);
}

#[test]
fn presets_count_fractional_digits() {
    let field = IntegerField::new(MathContext::DECIMAL32);
    let v = Vector::from_elements(vec![big(10), big(10)], field).unwrap();
    // sqrt(200) = 14.1421356...; seven digits after the point, nine significant
    assert_eq!(v.euclidean_norm(), ratio(141_421_356, 10_000_000));
}

#[test]
fn rounding_from_str() {
    assert_eq!(Rounding::from_str("down").unwrap(), Rounding::Down);
    assert_eq!(Rounding::from_str("HALF_UP").unwrap(), Rounding::HalfUp);
    assert_eq!(Rounding::from_str("half-up").unwrap(), Rounding::HalfUp);
    let err = Rounding::from_str("ceiling").unwrap_err();
    assert!(err.contains("ceiling"));
}

#[test]
fn math_context_round_trips_json() {
    let ctx = MathContext::new(12, Rounding::Down);
    let json = serde_json::to_string(&ctx).unwrap();
    assert!(json.contains("\"scale\":12"));
    assert!(json.contains("\"down\""));
    let back: MathContext = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ctx);
}

#[test]
fn math_context_rounding_defaults_when_missing() {
    let ctx: MathContext = serde_json::from_str(r#"{ "scale": 5 }"#).unwrap();
    assert_eq!(ctx, MathContext::new(5, Rounding::HalfUp));
}
