use std::collections::BTreeMap;
use std::fmt;

use num_rational::BigRational;

use crate::error::Result;
use crate::math::{Matrix, MatrixEntry, Vector};

/// The arithmetic a vector needs from its element type.
///
/// Implementations are plain values (usually unit structs) that are cloned
/// into every vector built with them. All operations must be free of side
/// effects; division by zero follows whatever the element type does.
pub trait Field: Clone + fmt::Debug {
    type Element: Clone + PartialEq + fmt::Debug;
    type Quotient;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn subtract(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Self::Quotient;

    fn negate(&self, e: &Self::Element) -> Self::Element;

    fn zero(&self) -> Self::Element;

    fn one(&self) -> Self::Element;

    /// Builds a vector from an index map; every vector operation returns
    /// through here.
    fn vector(&self, index_to_element: BTreeMap<usize, Self::Element>) -> Result<Vector<Self>> {
        Vector::new(index_to_element, self.clone())
    }
}

/// A [`Field`] that can also decide value equality and build matrices.
pub trait QuotientField: Field {
    /// Numeric equality, as opposed to representational `PartialEq`.
    ///
    /// Must be an equivalence relation and agree with [`Field::zero`].
    fn equal_by_comparing(&self, a: &Self::Element, b: &Self::Element) -> bool;

    fn is_zero(&self, e: &Self::Element) -> bool {
        self.equal_by_comparing(e, &self.zero())
    }

    /// Builds a matrix from its entries; every matrix operation returns
    /// through here.
    fn matrix(&self, entries: Vec<MatrixEntry<Self::Element>>) -> Result<Matrix<Self>> {
        Matrix::new(entries, self.clone())
    }
}

/// Absolute values and square roots backing the vector and matrix norms.
///
/// `Norm` is the type of the taxicab, maximum and euclidean norms,
/// `NormPow2` the type of squared euclidean and Frobenius norms.
pub trait NormedField: Field {
    type Norm: Clone + PartialOrd + fmt::Debug;
    type NormPow2: Clone + fmt::Debug;

    fn abs(&self, e: &Self::Element) -> Self::Norm;

    fn abs_pow2(&self, e: &Self::Element) -> Self::NormPow2;

    fn norm_zero(&self) -> Self::Norm;

    fn add_norms(&self, a: &Self::Norm, b: &Self::Norm) -> Self::Norm;

    fn norm_pow2_zero(&self) -> Self::NormPow2;

    fn add_norms_pow2(&self, a: &Self::NormPow2, b: &Self::NormPow2) -> Self::NormPow2;

    fn sqrt(&self, p: &Self::NormPow2) -> Self::Norm;

    /// Exact rational value of `p`, `None` if it is not finite.
    fn norm_pow2_to_rational(&self, p: &Self::NormPow2) -> Option<BigRational>;
}
