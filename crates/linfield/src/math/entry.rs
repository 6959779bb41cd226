use crate::error::{LinalgError, Result};

/// An element anchored at a 1-based vector index.
///
/// Entries order by [`VectorEntry::position`]. They do not implement `Ord`
/// because elements such as `f64` are not totally ordered.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorEntry<E> {
    index: usize,
    element: E,
}

impl<E> VectorEntry<E> {
    pub fn new(index: usize, element: E) -> Result<Self> {
        if index == 0 {
            return Err(LinalgError::malformed("vector index must be >= 1"));
        }
        Ok(Self { index, element })
    }

    pub(crate) fn from_valid(index: usize, element: E) -> Self {
        Self { index, element }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    /// Sort key; entries are ordered by index only.
    pub fn position(&self) -> usize {
        self.index
    }
}

/// An element anchored at a 1-based (row, column) cell.
///
/// Row-major order is given by [`MatrixEntry::position`]; like
/// [`VectorEntry`] this type is not `Ord`.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixEntry<E> {
    row_index: usize,
    column_index: usize,
    element: E,
}

impl<E> MatrixEntry<E> {
    pub fn new(row_index: usize, column_index: usize, element: E) -> Result<Self> {
        if row_index == 0 || column_index == 0 {
            return Err(LinalgError::malformed(format!(
                "matrix indices must be >= 1 but got ({}, {})",
                row_index, column_index
            )));
        }
        Ok(Self {
            row_index,
            column_index,
            element,
        })
    }

    pub(crate) fn from_valid(row_index: usize, column_index: usize, element: E) -> Self {
        Self {
            row_index,
            column_index,
            element,
        }
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    /// Sort key; entries are ordered by row, then column.
    pub fn position(&self) -> (usize, usize) {
        (self.row_index, self.column_index)
    }

    pub fn is_diagonal(&self) -> bool {
        self.row_index == self.column_index
    }

    // Indices stay >= 1, so the public validation can be skipped.
    pub(crate) fn transposed(&self) -> Self
    where
        E: Clone,
    {
        Self {
            row_index: self.column_index,
            column_index: self.row_index,
            element: self.element.clone(),
        }
    }

    pub(crate) fn with_element<U>(&self, element: U) -> MatrixEntry<U> {
        MatrixEntry {
            row_index: self.row_index,
            column_index: self.column_index,
            element,
        }
    }
}
