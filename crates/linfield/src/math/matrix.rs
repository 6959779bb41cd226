use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::BigRational;
use once_cell::sync::OnceCell;

use crate::config::MathContext;
use crate::error::{LinalgError, Result};
use crate::field::{NormedField, QuotientField};
use crate::math::decimal;
use crate::math::entry::MatrixEntry;
use crate::math::permutation::{Parity, Permutations};
use crate::math::vector::{max_norm_of, Vector};

/// Orders above this log a warning before the Leibniz expansion runs.
const LEIBNIZ_WARN_ORDER: usize = 8;

/// The determinant algorithms a [`Matrix`] can be evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminantMethod {
    /// Product of the diagonal; triangular matrices only.
    Triangular,
    /// Signed sum over all permutations; any square order.
    Leibniz,
    /// Rule of Sarrus; 3x3 only.
    Sarrus,
    /// `a11 a22 - a12 a21`; 2x2 only.
    TwoByTwo,
}

impl DeterminantMethod {
    pub fn name(&self) -> &'static str {
        match self {
            DeterminantMethod::Triangular => "triangular",
            DeterminantMethod::Leibniz => "leibniz",
            DeterminantMethod::Sarrus => "sarrus",
            DeterminantMethod::TwoByTwo => "two_by_two",
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Properties {
    upper_triangular: OnceCell<bool>,
    lower_triangular: OnceCell<bool>,
    identity: OnceCell<bool>,
    symmetric: OnceCell<bool>,
    skew_symmetric: OnceCell<bool>,
    invertible: OnceCell<bool>,
}

/// Immutable dense matrix with 1-based indices over a [`QuotientField`].
///
/// Entries are kept in row-major order and cover every cell of the
/// `row_size x column_size` rectangle exactly once. Derived properties are
/// computed on first access and cached for the lifetime of the value.
#[derive(Clone, Debug)]
pub struct Matrix<F: QuotientField> {
    entries: Vec<MatrixEntry<F::Element>>,
    row_size: usize,
    column_size: usize,
    field: F,
    properties: Properties,
    elements: OnceCell<Vec<F::Element>>,
    diagonal_entries: OnceCell<Vec<MatrixEntry<F::Element>>>,
    row_indices: OnceCell<Vec<usize>>,
    column_indices: OnceCell<Vec<usize>>,
}

impl<F: QuotientField> Matrix<F> {
    pub fn new(mut entries: Vec<MatrixEntry<F::Element>>, field: F) -> Result<Self> {
        if entries.is_empty() {
            return Err(LinalgError::malformed("matrix must have at least one entry"));
        }
        entries.sort_by_key(|e| e.position());

        let row_size = entries.iter().map(|e| e.row_index()).max().unwrap_or(0);
        let column_size = entries.iter().map(|e| e.column_index()).max().unwrap_or(0);
        let cells = row_size.checked_mul(column_size).ok_or_else(|| {
            LinalgError::malformed(format!(
                "a {}x{} matrix has more cells than can be addressed",
                row_size, column_size
            ))
        })?;
        if entries.len() != cells {
            return Err(LinalgError::malformed(format!(
                "expected {} entries for a {}x{} matrix but got {}",
                cells,
                row_size,
                column_size,
                entries.len()
            )));
        }
        for (k, entry) in entries.iter().enumerate() {
            let expected = (k / column_size + 1, k % column_size + 1);
            if entry.position() != expected {
                return Err(LinalgError::malformed(format!(
                    "expected an entry at {:?} but found {:?}",
                    expected,
                    entry.position()
                )));
            }
        }

        Ok(Self {
            entries,
            row_size,
            column_size,
            field,
            properties: Properties::default(),
            elements: OnceCell::new(),
            diagonal_entries: OnceCell::new(),
            row_indices: OnceCell::new(),
            column_indices: OnceCell::new(),
        })
    }

    /// Builds a matrix from row-major rows; all rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<F::Element>>, field: F) -> Result<Self> {
        let mut entries = Vec::new();
        for (r, row) in rows.into_iter().enumerate() {
            for (c, element) in row.into_iter().enumerate() {
                entries.push(MatrixEntry::from_valid(r + 1, c + 1, element));
            }
        }
        Self::new(entries, field)
    }

    pub fn row_size(&self) -> usize {
        self.row_size
    }

    pub fn column_size(&self) -> usize {
        self.column_size
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.row_size, self.column_size)
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn entries(&self) -> &[MatrixEntry<F::Element>] {
        &self.entries
    }

    pub fn elements(&self) -> &[F::Element] {
        self.elements
            .get_or_init(|| self.entries.iter().map(|e| e.element().clone()).collect())
    }

    pub fn diagonal_entries(&self) -> &[MatrixEntry<F::Element>] {
        self.diagonal_entries.get_or_init(|| {
            self.entries
                .iter()
                .filter(|e| e.is_diagonal())
                .cloned()
                .collect()
        })
    }

    pub fn diagonal_elements(&self) -> impl Iterator<Item = &F::Element> + '_ {
        self.diagonal_entries().iter().map(|e| e.element())
    }

    pub fn row_indices(&self) -> &[usize] {
        self.row_indices
            .get_or_init(|| (1..=self.row_size).collect())
    }

    pub fn column_indices(&self) -> &[usize] {
        self.column_indices
            .get_or_init(|| (1..=self.column_size).collect())
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.column_size + (col - 1)
    }

    // Unchecked; callers iterate within 1..=row_size and 1..=column_size.
    #[inline]
    fn at(&self, row: usize, col: usize) -> &F::Element {
        self.entries[self.offset(row, col)].element()
    }

    fn check_indices(&self, row: usize, col: usize) -> Result<()> {
        LinalgError::check_index(row, self.row_size)?;
        LinalgError::check_index(col, self.column_size)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&F::Element> {
        self.check_indices(row, col)?;
        Ok(self.at(row, col))
    }

    pub fn entry(&self, row: usize, col: usize) -> Result<MatrixEntry<F::Element>> {
        self.check_indices(row, col)?;
        Ok(self.entries[self.offset(row, col)].clone())
    }

    /// Column index to element for one row.
    pub fn row(&self, row: usize) -> Result<BTreeMap<usize, F::Element>> {
        LinalgError::check_index(row, self.row_size)?;
        Ok((1..=self.column_size)
            .map(|c| (c, self.at(row, c).clone()))
            .collect())
    }

    /// Row index to element for one column.
    pub fn column(&self, col: usize) -> Result<BTreeMap<usize, F::Element>> {
        LinalgError::check_index(col, self.column_size)?;
        Ok((1..=self.row_size)
            .map(|r| (r, self.at(r, col).clone()))
            .collect())
    }

    pub fn row_vector(&self, row: usize) -> Result<Vector<F>> {
        self.field.vector(self.row(row)?)
    }

    pub fn column_vector(&self, col: usize) -> Result<Vector<F>> {
        self.field.vector(self.column(col)?)
    }

    pub fn contains(&self, element: &F::Element) -> bool {
        self.entries.iter().any(|e| e.element() == element)
    }

    pub fn is_square(&self) -> bool {
        self.row_size == self.column_size
    }

    pub fn is_upper_triangular(&self) -> bool {
        *self.properties.upper_triangular.get_or_init(|| {
            self.entries
                .iter()
                .filter(|e| e.row_index() > e.column_index())
                .all(|e| self.field.is_zero(e.element()))
        })
    }

    pub fn is_lower_triangular(&self) -> bool {
        *self.properties.lower_triangular.get_or_init(|| {
            self.entries
                .iter()
                .filter(|e| e.row_index() < e.column_index())
                .all(|e| self.field.is_zero(e.element()))
        })
    }

    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    pub fn is_identity(&self) -> bool {
        *self.properties.identity.get_or_init(|| {
            let one = self.field.one();
            self.is_square()
                && self.is_diagonal()
                && self
                    .diagonal_elements()
                    .all(|e| self.field.equal_by_comparing(e, &one))
        })
    }

    pub fn is_symmetric(&self) -> bool {
        *self.properties.symmetric.get_or_init(|| {
            self.is_square()
                && self.entries.iter().all(|e| {
                    let mirrored = self.at(e.column_index(), e.row_index());
                    self.field.equal_by_comparing(e.element(), mirrored)
                })
        })
    }

    pub fn is_skew_symmetric(&self) -> bool {
        *self.properties.skew_symmetric.get_or_init(|| {
            self.is_square()
                && self.entries.iter().all(|e| {
                    let mirrored = self.at(e.column_index(), e.row_index());
                    self.field
                        .equal_by_comparing(e.element(), &self.field.negate(mirrored))
                })
        })
    }

    /// Square with a determinant that is not zero by comparing.
    pub fn is_invertible(&self) -> bool {
        *self.properties.invertible.get_or_init(|| match self.determinant() {
            Ok(det) => !self.field.is_zero(&det),
            Err(_) => false,
        })
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn check_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.row_size,
                columns: self.column_size,
            });
        }
        Ok(())
    }

    // Equal shapes and row-major order make the entry lists line up cell by cell.
    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(&F::Element, &F::Element) -> F::Element,
    ) -> Vec<MatrixEntry<F::Element>> {
        self.entries
            .iter()
            .zip(other.entries.iter())
            .map(|(a, b)| a.with_element(op(a.element(), b.element())))
            .collect()
    }

    pub fn add(&self, summand: &Self) -> Result<Self> {
        self.check_same_shape(summand, "add")?;
        self.field
            .matrix(self.zip_with(summand, |a, b| self.field.add(a, b)))
    }

    pub fn subtract(&self, subtrahend: &Self) -> Result<Self> {
        self.check_same_shape(subtrahend, "subtract")?;
        self.field
            .matrix(self.zip_with(subtrahend, |a, b| self.field.subtract(a, b)))
    }

    pub fn scalar_multiply(&self, scalar: &F::Element) -> Result<Self> {
        self.field.matrix(
            self.entries
                .iter()
                .map(|e| e.with_element(self.field.multiply(scalar, e.element())))
                .collect(),
        )
    }

    pub fn negate(&self) -> Result<Self> {
        let minus_one = self.field.negate(&self.field.one());
        self.scalar_multiply(&minus_one)
    }

    pub fn multiply(&self, factor: &Self) -> Result<Self> {
        if self.column_size != factor.row_size {
            return Err(LinalgError::DimensionMismatch {
                operation: "multiply",
                left: self.shape(),
                right: factor.shape(),
            });
        }
        let mut entries = Vec::with_capacity(self.row_size * factor.column_size);
        for i in 1..=self.row_size {
            for j in 1..=factor.column_size {
                let element = (1..=self.column_size).fold(self.field.zero(), |acc, k| {
                    let product = self.field.multiply(self.at(i, k), factor.at(k, j));
                    self.field.add(&acc, &product)
                });
                entries.push(MatrixEntry::from_valid(i, j, element));
            }
        }
        self.field.matrix(entries)
    }

    pub fn multiply_vector(&self, vector: &Vector<F>) -> Result<Vector<F>> {
        if self.column_size != vector.size() {
            return Err(LinalgError::DimensionMismatch {
                operation: "multiply_vector",
                left: self.shape(),
                right: (vector.size(), 1),
            });
        }
        let index_to_element = (1..=self.row_size)
            .map(|i| {
                let element = vector.iter().fold(self.field.zero(), |acc, (&k, e)| {
                    let product = self.field.multiply(self.at(i, k), e);
                    self.field.add(&acc, &product)
                });
                (i, element)
            })
            .collect();
        self.field.vector(index_to_element)
    }

    pub fn transpose(&self) -> Result<Self> {
        self.field
            .matrix(self.entries.iter().map(|e| e.transposed()).collect())
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> Result<F::Element> {
        self.check_square()?;
        Ok(self
            .diagonal_elements()
            .fold(self.field.zero(), |acc, e| self.field.add(&acc, e)))
    }

    /// The matrix with `row` and `col` deleted.
    ///
    /// The minor of a matrix with a single row or column has no entries and
    /// is rejected as malformed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.check_indices(row, col)?;
        let shift = |index: usize, removed: usize| if index > removed { index - 1 } else { index };
        self.field.matrix(
            self.entries
                .iter()
                .filter(|e| e.row_index() != row && e.column_index() != col)
                .map(|e| {
                    MatrixEntry::from_valid(
                        shift(e.row_index(), row),
                        shift(e.column_index(), col),
                        e.element().clone(),
                    )
                })
                .collect(),
        )
    }

    /// Determinant, dispatched on structure and order.
    ///
    /// Triangular matrices (every 1x1 matrix included) take the diagonal
    /// product; otherwise orders above 3 use the Leibniz formula, order 3 the
    /// rule of Sarrus and order 2 the closed form. The Leibniz expansion is
    /// factorial in the order.
    pub fn determinant(&self) -> Result<F::Element> {
        self.check_square()?;
        let method = if self.is_triangular() {
            DeterminantMethod::Triangular
        } else if self.row_size > 3 {
            DeterminantMethod::Leibniz
        } else if self.row_size == 3 {
            DeterminantMethod::Sarrus
        } else {
            DeterminantMethod::TwoByTwo
        };
        log::debug!(
            "determinant of {}x{} matrix via {}",
            self.row_size,
            self.column_size,
            method.name()
        );
        self.determinant_with(method)
    }

    /// Determinant computed by one specific algorithm.
    pub fn determinant_with(&self, method: DeterminantMethod) -> Result<F::Element> {
        self.check_square()?;
        match method {
            DeterminantMethod::Triangular => {
                if !self.is_triangular() {
                    return Err(LinalgError::MethodNotApplicable {
                        method: method.name(),
                        reason: "matrix is neither upper nor lower triangular".to_string(),
                    });
                }
                Ok(self.diagonal_product())
            }
            DeterminantMethod::Leibniz => Ok(self.leibniz_formula()),
            DeterminantMethod::Sarrus => {
                self.check_order(method, 3)?;
                Ok(self.rule_of_sarrus())
            }
            DeterminantMethod::TwoByTwo => {
                self.check_order(method, 2)?;
                Ok(self.determinant_of_2x2())
            }
        }
    }

    fn check_order(&self, method: DeterminantMethod, order: usize) -> Result<()> {
        if self.row_size != order {
            return Err(LinalgError::MethodNotApplicable {
                method: method.name(),
                reason: format!("requires order {} but matrix has order {}", order, self.row_size),
            });
        }
        Ok(())
    }

    fn diagonal_product(&self) -> F::Element {
        self.diagonal_elements()
            .fold(self.field.one(), |acc, e| self.field.multiply(&acc, e))
    }

    fn leibniz_formula(&self) -> F::Element {
        let n = self.row_size;
        if n > LEIBNIZ_WARN_ORDER {
            log::warn!(
                "Leibniz formula on a {}x{} matrix expands {}! permutations",
                n,
                n,
                n
            );
        }
        let mut terms = 0usize;
        let det = Permutations::new(n).fold(self.field.zero(), |acc, (sigma, parity)| {
            terms += 1;
            let product = sigma
                .iter()
                .enumerate()
                .fold(self.field.one(), |p, (i, &j)| {
                    self.field.multiply(&p, self.at(i + 1, j + 1))
                });
            match parity {
                Parity::Even => self.field.add(&acc, &product),
                Parity::Odd => self.field.subtract(&acc, &product),
            }
        });
        log::trace!("Leibniz formula summed {} terms", terms);
        det
    }

    fn product3(&self, a: (usize, usize), b: (usize, usize), c: (usize, usize)) -> F::Element {
        let ab = self.field.multiply(self.at(a.0, a.1), self.at(b.0, b.1));
        self.field.multiply(&ab, self.at(c.0, c.1))
    }

    fn rule_of_sarrus(&self) -> F::Element {
        let f = &self.field;
        let positive = [
            self.product3((1, 1), (2, 2), (3, 3)),
            self.product3((1, 2), (2, 3), (3, 1)),
            self.product3((1, 3), (2, 1), (3, 2)),
        ];
        let negative = [
            self.product3((1, 3), (2, 2), (3, 1)),
            self.product3((1, 2), (2, 1), (3, 3)),
            self.product3((1, 1), (2, 3), (3, 2)),
        ];
        let sum = positive.iter().fold(f.zero(), |acc, p| f.add(&acc, p));
        negative.iter().fold(sum, |acc, p| f.subtract(&acc, p))
    }

    fn determinant_of_2x2(&self) -> F::Element {
        let f = &self.field;
        let main = f.multiply(self.at(1, 1), self.at(2, 2));
        let anti = f.multiply(self.at(1, 2), self.at(2, 1));
        f.subtract(&main, &anti)
    }

    /// Element-wise value equality; shapes must match.
    pub fn equals_by_comparing(&self, other: &Self) -> Result<bool> {
        self.check_same_shape(other, "equals_by_comparing")?;
        Ok(self
            .entries
            .iter()
            .zip(other.entries.iter())
            .all(|(a, b)| self.field.equal_by_comparing(a.element(), b.element())))
    }

    pub fn does_not_equal_by_comparing(&self, other: &Self) -> Result<bool> {
        Ok(!self.equals_by_comparing(other)?)
    }
}

impl<F: QuotientField + NormedField> Matrix<F> {
    fn max_of(&self, norms: impl Iterator<Item = F::Norm>) -> F::Norm {
        max_norm_of(self.field.norm_zero(), norms)
    }

    fn abs_sum(&self, cells: impl Iterator<Item = (usize, usize)>) -> F::Norm {
        cells.fold(self.field.norm_zero(), |acc, (r, c)| {
            self.field.add_norms(&acc, &self.field.abs(self.at(r, c)))
        })
    }

    pub fn max_abs_column_sum_norm(&self) -> F::Norm {
        self.max_of(
            (1..=self.column_size).map(|c| self.abs_sum((1..=self.row_size).map(move |r| (r, c)))),
        )
    }

    pub fn max_abs_row_sum_norm(&self) -> F::Norm {
        self.max_of(
            (1..=self.row_size).map(|r| self.abs_sum((1..=self.column_size).map(move |c| (r, c)))),
        )
    }

    pub fn frobenius_norm_pow2(&self) -> F::NormPow2 {
        self.entries.iter().fold(self.field.norm_pow2_zero(), |acc, e| {
            self.field.add_norms_pow2(&acc, &self.field.abs_pow2(e.element()))
        })
    }

    /// Frobenius norm as an exact decimal with `context.scale` fractional digits.
    pub fn frobenius_norm(&self, context: &MathContext) -> Result<BigRational> {
        let pow2 = self
            .field
            .norm_pow2_to_rational(&self.frobenius_norm_pow2())
            .ok_or(LinalgError::NonFiniteValue)?;
        decimal::sqrt(&pow2, context).ok_or(LinalgError::NonFiniteValue)
    }

    pub fn max_norm(&self) -> F::Norm {
        self.max_of(self.entries.iter().map(|e| self.field.abs(e.element())))
    }
}

impl<F: QuotientField> PartialEq for Matrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a, 'b, F: QuotientField> Add<&'b Matrix<F>> for &'a Matrix<F> {
    type Output = Result<Matrix<F>>;

    fn add(self, rhs: &'b Matrix<F>) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<'a, 'b, F: QuotientField> Sub<&'b Matrix<F>> for &'a Matrix<F> {
    type Output = Result<Matrix<F>>;

    fn sub(self, rhs: &'b Matrix<F>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, 'b, F: QuotientField> Mul<&'b Matrix<F>> for &'a Matrix<F> {
    type Output = Result<Matrix<F>>;

    fn mul(self, rhs: &'b Matrix<F>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<'a, 'b, F: QuotientField> Mul<&'b Vector<F>> for &'a Matrix<F> {
    type Output = Result<Vector<F>>;

    fn mul(self, rhs: &'b Vector<F>) -> Self::Output {
        self.multiply_vector(rhs)
    }
}

impl<'a, F: QuotientField> Neg for &'a Matrix<F> {
    type Output = Result<Matrix<F>>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<F: QuotientField> fmt::Display for Matrix<F>
where
    F::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 1..=self.row_size {
            write!(f, "[")?;
            for c in 1..=self.column_size {
                write!(f, "{}", self.at(r, c))?;
                if c != self.column_size {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if r != self.row_size {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
