use std::collections::btree_map::Iter;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use once_cell::sync::OnceCell;

use crate::error::{LinalgError, Result};
use crate::field::{Field, NormedField, QuotientField};
use crate::math::entry::VectorEntry;

/// Immutable vector with 1-based indices over the elements of a [`Field`].
///
/// The index set is always exactly `1..=size`. Every transformation builds
/// a new vector through [`Field::vector`].
#[derive(Clone, Debug)]
pub struct Vector<F: Field> {
    index_to_element: BTreeMap<usize, F::Element>,
    field: F,
    indices: OnceCell<Vec<usize>>,
    elements: OnceCell<Vec<F::Element>>,
    entries: OnceCell<Vec<VectorEntry<F::Element>>>,
}

impl<F: Field> Vector<F> {
    pub fn new(index_to_element: BTreeMap<usize, F::Element>, field: F) -> Result<Self> {
        if index_to_element.is_empty() {
            return Err(LinalgError::malformed("vector must have at least one entry"));
        }
        let size = index_to_element.len();
        for (expected, &index) in (1..).zip(index_to_element.keys()) {
            if index != expected {
                return Err(LinalgError::malformed(format!(
                    "expected indices 1..={} but found index {}",
                    size, index
                )));
            }
        }
        Ok(Self {
            index_to_element,
            field,
            indices: OnceCell::new(),
            elements: OnceCell::new(),
            entries: OnceCell::new(),
        })
    }

    /// Builds a vector from entries; duplicated indices are rejected.
    pub fn from_entries<I>(entries: I, field: F) -> Result<Self>
    where
        I: IntoIterator<Item = VectorEntry<F::Element>>,
    {
        let mut index_to_element = BTreeMap::new();
        for entry in entries {
            let index = entry.index();
            if index_to_element.insert(index, entry.into_element()).is_some() {
                return Err(LinalgError::malformed(format!("duplicate index {}", index)));
            }
        }
        Self::new(index_to_element, field)
    }

    /// Builds a vector whose i-th element sits at index i + 1.
    pub fn from_elements(elements: Vec<F::Element>, field: F) -> Result<Self> {
        Self::new((1..).zip(elements).collect(), field)
    }

    pub fn size(&self) -> usize {
        self.index_to_element.len()
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn iter(&self) -> Iter<'_, usize, F::Element> {
        self.index_to_element.iter()
    }

    pub fn indices(&self) -> &[usize] {
        self.indices
            .get_or_init(|| self.index_to_element.keys().copied().collect())
    }

    pub fn elements(&self) -> &[F::Element] {
        self.elements
            .get_or_init(|| self.index_to_element.values().cloned().collect())
    }

    pub fn entries(&self) -> &[VectorEntry<F::Element>] {
        self.entries.get_or_init(|| {
            self.index_to_element
                .iter()
                .map(|(&index, element)| VectorEntry::from_valid(index, element.clone()))
                .collect()
        })
    }

    pub fn get(&self, index: usize) -> Result<&F::Element> {
        LinalgError::check_index(index, self.size())?;
        self.index_to_element
            .get(&index)
            .ok_or(LinalgError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    pub fn entry(&self, index: usize) -> Result<VectorEntry<F::Element>> {
        let element = self.get(index)?.clone();
        VectorEntry::new(index, element)
    }

    /// Structural membership, see [`Vector::equals_by_comparing`] for value equality.
    pub fn contains(&self, element: &F::Element) -> bool {
        self.index_to_element.values().any(|e| e == element)
    }

    fn check_same_size(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.size() != other.size() {
            return Err(LinalgError::DimensionMismatch {
                operation,
                left: (self.size(), 1),
                right: (other.size(), 1),
            });
        }
        Ok(())
    }

    // Both index sets are 1..=size, so zipping the ordered values pairs equal indices.
    fn zip_with<T>(
        &self,
        other: &Self,
        mut op: impl FnMut(&F::Element, &F::Element) -> T,
    ) -> BTreeMap<usize, T> {
        self.index_to_element
            .iter()
            .zip(other.index_to_element.values())
            .map(|((&i, a), b)| (i, op(a, b)))
            .collect()
    }

    pub fn add(&self, summand: &Self) -> Result<Self> {
        self.check_same_size(summand, "add")?;
        self.field
            .vector(self.zip_with(summand, |a, b| self.field.add(a, b)))
    }

    pub fn subtract(&self, subtrahend: &Self) -> Result<Self> {
        self.check_same_size(subtrahend, "subtract")?;
        self.field
            .vector(self.zip_with(subtrahend, |a, b| self.field.subtract(a, b)))
    }

    pub fn dot_product(&self, other: &Self) -> Result<F::Element> {
        self.check_same_size(other, "dot_product")?;
        Ok(self
            .zip_with(other, |a, b| self.field.multiply(a, b))
            .into_values()
            .fold(self.field.zero(), |acc, product| {
                self.field.add(&acc, &product)
            }))
    }

    pub fn scalar_multiply(&self, scalar: &F::Element) -> Result<Self> {
        self.field.vector(
            self.index_to_element
                .iter()
                .map(|(&i, e)| (i, self.field.multiply(scalar, e)))
                .collect(),
        )
    }

    pub fn negate(&self) -> Result<Self> {
        let minus_one = self.field.negate(&self.field.one());
        self.scalar_multiply(&minus_one)
    }
}

impl<F: NormedField> Vector<F> {
    pub fn taxicab_norm(&self) -> F::Norm {
        self.index_to_element
            .values()
            .fold(self.field.norm_zero(), |acc, e| {
                self.field.add_norms(&acc, &self.field.abs(e))
            })
    }

    pub fn euclidean_norm_pow2(&self) -> F::NormPow2 {
        self.index_to_element
            .values()
            .fold(self.field.norm_pow2_zero(), |acc, e| {
                self.field.add_norms_pow2(&acc, &self.field.abs_pow2(e))
            })
    }

    pub fn euclidean_norm(&self) -> F::Norm {
        self.field.sqrt(&self.euclidean_norm_pow2())
    }

    /// Largest absolute value; a NaN norm is carried through like in the sums.
    pub fn max_norm(&self) -> F::Norm {
        let norms = self
            .index_to_element
            .values()
            .map(|e| self.field.abs(e));
        max_norm_of(self.field.norm_zero(), norms)
    }

    pub fn taxicab_distance(&self, other: &Self) -> Result<F::Norm> {
        self.check_same_size(other, "taxicab_distance")?;
        Ok(self.subtract(other)?.taxicab_norm())
    }

    pub fn euclidean_distance(&self, other: &Self) -> Result<F::Norm> {
        self.check_same_size(other, "euclidean_distance")?;
        Ok(self.subtract(other)?.euclidean_norm())
    }

    pub fn max_distance(&self, other: &Self) -> Result<F::Norm> {
        self.check_same_size(other, "max_distance")?;
        Ok(self.subtract(other)?.max_norm())
    }
}

impl<F: QuotientField> Vector<F> {
    /// True when the dot product is zero by comparing.
    pub fn orthogonal_to(&self, other: &Self) -> Result<bool> {
        let dot = self.dot_product(other)?;
        Ok(self.field.is_zero(&dot))
    }

    /// Element-wise value equality; sizes must match.
    pub fn equals_by_comparing(&self, other: &Self) -> Result<bool> {
        self.check_same_size(other, "equals_by_comparing")?;
        Ok(self
            .index_to_element
            .values()
            .zip(other.index_to_element.values())
            .all(|(a, b)| self.field.equal_by_comparing(a, b)))
    }

    pub fn does_not_equal_by_comparing(&self, other: &Self) -> Result<bool> {
        Ok(!self.equals_by_comparing(other)?)
    }
}

/// Maximum of `norms`, starting from `zero`.
///
/// A value that is unordered even against itself (NaN) wins and stays.
pub(crate) fn max_norm_of<N: PartialOrd>(zero: N, norms: impl Iterator<Item = N>) -> N {
    let unordered = |n: &N| n.partial_cmp(n).is_none();
    norms.fold(zero, |acc, n| {
        if unordered(&acc) {
            acc
        } else if unordered(&n) || n > acc {
            n
        } else {
            acc
        }
    })
}

impl<F: Field> PartialEq for Vector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.index_to_element == other.index_to_element
    }
}

impl<'a, 'b, F: Field> Add<&'b Vector<F>> for &'a Vector<F> {
    type Output = Result<Vector<F>>;

    fn add(self, rhs: &'b Vector<F>) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl<'a, 'b, F: Field> Sub<&'b Vector<F>> for &'a Vector<F> {
    type Output = Result<Vector<F>>;

    fn sub(self, rhs: &'b Vector<F>) -> Self::Output {
        self.subtract(rhs)
    }
}

/// `&u * &v` is the dot product.
impl<'a, 'b, F: Field> Mul<&'b Vector<F>> for &'a Vector<F> {
    type Output = Result<F::Element>;

    fn mul(self, rhs: &'b Vector<F>) -> Self::Output {
        self.dot_product(rhs)
    }
}

impl<'a, F: Field> Neg for &'a Vector<F> {
    type Output = Result<Vector<F>>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<F: Field> fmt::Display for Vector<F>
where
    F::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.index_to_element.values().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.size() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
