use std::error::Error;
use std::fmt;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Precondition and validation failures raised by vectors and matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Empty entry collection, or indices that are not exactly `1..=size`.
    MalformedEntries { reason: String },
    /// Operand shapes are incompatible for the named operation.
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// 1-based index outside `1..=size`.
    IndexOutOfRange { index: usize, size: usize },
    NotSquare { rows: usize, columns: usize },
    /// A determinant branch was requested for a matrix outside its domain.
    MethodNotApplicable { method: &'static str, reason: String },
    NonFiniteValue,
}

impl LinalgError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        LinalgError::MalformedEntries {
            reason: reason.into(),
        }
    }

    pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
        if index == 0 || index > size {
            return Err(LinalgError::IndexOutOfRange { index, size });
        }
        Ok(())
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::MalformedEntries { reason } => write!(f, "Malformed entries: {}", reason),
            LinalgError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Dimension mismatch in {}: {}x{} vs {}x{}",
                operation, left.0, left.1, right.0, right.1
            ),
            LinalgError::IndexOutOfRange { index, size } => {
                write!(f, "Index {} out of range, expected 1..={}", index, size)
            }
            LinalgError::NotSquare { rows, columns } => {
                write!(f, "Expected a square matrix but got {}x{}", rows, columns)
            }
            LinalgError::MethodNotApplicable { method, reason } => {
                write!(f, "Determinant method {} not applicable: {}", method, reason)
            }
            LinalgError::NonFiniteValue => write!(f, "Value has no finite rational representation"),
        }
    }
}

impl Error for LinalgError {}
