//! Integration tests for the generic vector engine.

use std::collections::BTreeMap;

use linfield::field::{FractionField, IntegerField, RealField};
use linfield::{LinalgError, Vector, VectorEntry};
use num_bigint::BigInt;
use num_rational::BigRational;

fn int_vector(values: &[i64]) -> Vector<IntegerField> {
    let elements = values.iter().map(|&v| BigInt::from(v)).collect();
    Vector::from_elements(elements, IntegerField::default()).unwrap()
}

fn real_vector(values: &[f64]) -> Vector<RealField> {
    Vector::from_elements(values.to_vec(), RealField).unwrap()
}

fn big(v: i64) -> BigInt {
    BigInt::from(v)
}

fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_accepts_contiguous_indices() {
    let mut map = BTreeMap::new();
    map.insert(2, 2.0);
    map.insert(1, 1.0);
    map.insert(3, 3.0);
    let v = Vector::new(map, RealField).unwrap();
    assert_eq!(v.size(), 3);
    assert_eq!(v.indices(), &[1, 2, 3]);
    assert_eq!(v.elements(), &[1.0, 2.0, 3.0]);
}

#[test]
fn new_rejects_gap_in_indices() {
    let mut map = BTreeMap::new();
    map.insert(1, big(1));
    map.insert(3, big(3));
    let result = Vector::new(map, IntegerField::default());
    assert!(matches!(result, Err(LinalgError::MalformedEntries { .. })));
}

#[test]
fn new_rejects_empty_map() {
    let result = Vector::new(BTreeMap::<usize, f64>::new(), RealField);
    assert!(matches!(result, Err(LinalgError::MalformedEntries { .. })));
}

#[test]
fn new_rejects_indices_not_starting_at_one() {
    let mut map = BTreeMap::new();
    map.insert(2, 1.0);
    map.insert(3, 1.0);
    assert!(Vector::new(map, RealField).is_err());
}

#[test]
fn from_entries_rejects_duplicates() {
    let entries = vec![
        VectorEntry::new(1, 1.0).unwrap(),
        VectorEntry::new(1, 2.0).unwrap(),
    ];
    let result = Vector::from_entries(entries, RealField);
    assert!(matches!(result, Err(LinalgError::MalformedEntries { .. })));
}

#[test]
fn from_entries_sorts_by_index() {
    let entries = vec![
        VectorEntry::new(2, 20.0).unwrap(),
        VectorEntry::new(1, 10.0).unwrap(),
    ];
    let v = Vector::from_entries(entries, RealField).unwrap();
    let indices: Vec<usize> = v.entries().iter().map(|e| e.position()).collect();
    assert_eq!(indices, vec![1, 2]);
    assert_eq!(v.elements(), &[10.0, 20.0]);
}

#[test]
fn vector_entry_rejects_index_zero() {
    assert!(matches!(
        VectorEntry::new(0, 1.0),
        Err(LinalgError::MalformedEntries { .. })
    ));
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

#[test]
fn get_and_entry_use_one_based_indices() {
    let v = int_vector(&[4, 5, 6]);
    assert_eq!(v.get(1).unwrap(), &big(4));
    assert_eq!(v.get(3).unwrap(), &big(6));
    let entry = v.entry(2).unwrap();
    assert_eq!(entry.index(), 2);
    assert_eq!(entry.element(), &big(5));
}

#[test]
fn get_out_of_range_errors() {
    let v = int_vector(&[4, 5, 6]);
    assert_eq!(
        v.get(0),
        Err(LinalgError::IndexOutOfRange { index: 0, size: 3 })
    );
    assert_eq!(
        v.get(4),
        Err(LinalgError::IndexOutOfRange { index: 4, size: 3 })
    );
    assert!(v.entry(4).is_err());
}

#[test]
fn contains_is_structural() {
    let v = int_vector(&[1, 2]);
    assert!(v.contains(&big(2)));
    assert!(!v.contains(&big(3)));
}

#[test]
fn display_lists_elements() {
    let v = int_vector(&[1, -2, 3]);
    assert_eq!(v.to_string(), "[1, -2, 3]");
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_and_subtract() {
    let a = int_vector(&[1, 2, 3]);
    let b = int_vector(&[4, 5, 6]);
    assert_eq!(a.add(&b).unwrap(), int_vector(&[5, 7, 9]));
    assert_eq!(b.subtract(&a).unwrap(), int_vector(&[3, 3, 3]));
}

#[test]
fn add_size_mismatch_errors() {
    let a = int_vector(&[1, 2]);
    let b = int_vector(&[1, 2, 3]);
    assert!(matches!(
        a.add(&b),
        Err(LinalgError::DimensionMismatch { operation: "add", .. })
    ));
    assert!(matches!(
        a.subtract(&b),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn dot_product() {
    let a = int_vector(&[1, 2, 3]);
    let b = int_vector(&[4, -5, 6]);
    assert_eq!(a.dot_product(&b).unwrap(), big(12));
}

#[test]
fn dot_product_size_mismatch_errors() {
    let a = int_vector(&[1, 2]);
    let b = int_vector(&[1, 2, 3]);
    assert_eq!(
        a.dot_product(&b),
        Err(LinalgError::DimensionMismatch {
            operation: "dot_product",
            left: (2, 1),
            right: (3, 1),
        })
    );
}

#[test]
fn scalar_multiply_and_negate() {
    let a = int_vector(&[1, -2, 3]);
    assert_eq!(a.scalar_multiply(&big(3)).unwrap(), int_vector(&[3, -6, 9]));
    assert_eq!(a.negate().unwrap(), int_vector(&[-1, 2, -3]));
}

#[test]
fn operators_delegate_to_methods() {
    let a = int_vector(&[1, 2, 3]);
    let b = int_vector(&[4, -5, 6]);
    assert_eq!((&a + &b).unwrap(), int_vector(&[5, -3, 9]));
    assert_eq!((&a - &b).unwrap(), int_vector(&[-3, 7, -3]));
    assert_eq!((-&a).unwrap(), int_vector(&[-1, -2, -3]));
    assert_eq!((&a * &b).unwrap(), big(12));

    let short = int_vector(&[1]);
    assert!(matches!(
        &a * &short,
        Err(LinalgError::DimensionMismatch { operation: "dot_product", .. })
    ));
}

#[test]
fn orthogonality() {
    let a = int_vector(&[1, 0]);
    let b = int_vector(&[0, 7]);
    let c = int_vector(&[1, 1]);
    assert!(a.orthogonal_to(&b).unwrap());
    assert!(!a.orthogonal_to(&c).unwrap());
    assert!(a.orthogonal_to(&int_vector(&[1, 2, 3])).is_err());
}

#[test]
fn equals_by_comparing_uses_value_equality() {
    let field = FractionField::default();
    let unnormalized = BigRational::new_raw(big(2), big(4));
    let a = Vector::from_elements(vec![unnormalized, ratio(3, 1)], field).unwrap();
    let b = Vector::from_elements(vec![ratio(1, 2), ratio(6, 2)], field).unwrap();
    assert!(a.equals_by_comparing(&b).unwrap());
    assert!(!a.does_not_equal_by_comparing(&b).unwrap());
}

#[test]
fn equals_by_comparing_size_mismatch_errors() {
    let a = real_vector(&[1.0]);
    let b = real_vector(&[1.0, 2.0]);
    assert!(a.equals_by_comparing(&b).is_err());
}

// ---------------------------------------------------------------------------
// Norms and distances
// ---------------------------------------------------------------------------

#[test]
fn real_norms() {
    let v = real_vector(&[3.0, -4.0]);
    assert_eq!(v.taxicab_norm(), 7.0);
    assert_eq!(v.euclidean_norm_pow2(), 25.0);
    assert_eq!(v.euclidean_norm(), 5.0);
    assert_eq!(v.max_norm(), 4.0);
}

#[test]
fn max_norm_propagates_nan() {
    let v = real_vector(&[f64::NAN, 1.0]);
    assert!(v.taxicab_norm().is_nan());
    assert!(v.max_norm().is_nan());

    let v = real_vector(&[1.0, f64::NAN, 7.0]);
    assert!(v.max_norm().is_nan());
}

#[test]
fn integer_norms_are_exact_where_possible() {
    let v = int_vector(&[3, -4]);
    assert_eq!(v.taxicab_norm(), ratio(7, 1));
    assert_eq!(v.euclidean_norm_pow2(), big(25));
    assert_eq!(v.euclidean_norm(), ratio(5, 1));
    assert_eq!(v.max_norm(), ratio(4, 1));
}

#[test]
fn integer_euclidean_norm_respects_context() {
    use linfield::{MathContext, Rounding};

    let field = IntegerField::new(MathContext::new(3, Rounding::Down));
    let v = Vector::from_elements(vec![big(1), big(1)], field).unwrap();
    // sqrt(2) = 1.41421...
    assert_eq!(v.euclidean_norm(), ratio(1414, 1000));
}

#[test]
fn distances() {
    let a = real_vector(&[1.0, 2.0]);
    let b = real_vector(&[4.0, 6.0]);
    assert_eq!(a.taxicab_distance(&b).unwrap(), 7.0);
    assert_eq!(a.euclidean_distance(&b).unwrap(), 5.0);
    assert_eq!(a.max_distance(&b).unwrap(), 4.0);
}

#[test]
fn distances_size_mismatch_error() {
    let a = real_vector(&[1.0, 2.0]);
    let b = real_vector(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        a.taxicab_distance(&b),
        Err(LinalgError::DimensionMismatch { operation: "taxicab_distance", .. })
    ));
    assert!(a.euclidean_distance(&b).is_err());
    assert!(a.max_distance(&b).is_err());
}
