//! Error types for checked matrix operations
//!
//! The unchecked fast path (indexing, views, [`element_wise`](crate::element_wise),
//! [`mat_mul`](crate::mat_mul)) never reports errors: violating a precondition
//! is the caller's responsibility. The `try_*` variants and the text/serde
//! adapters report failures through [`MatrixError`].

use thiserror::Error;

/// Error type for checked matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Two operands of an element-wise operation have different logical shapes
    #[error("{operation}: shape mismatch - expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        operation: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// `lhs.cols() != rhs.rows()` in a matrix product
    #[error("matrix product: inner dimensions differ ({lhs_cols} columns vs {rhs_rows} rows)")]
    InnerDimensionMismatch { lhs_cols: usize, rhs_rows: usize },

    /// An element-wise operand list contained only scalars
    #[error("element-wise operation needs at least one matrix operand")]
    NoMatrixOperand,

    /// A requested region does not fit inside the logical shape
    #[error("{axis} range {start}..{end} out of bounds for extent {extent}")]
    IndexOutOfBounds {
        axis: &'static str,
        start: usize,
        end: usize,
        extent: usize,
    },

    /// Text input ended before every cell was filled
    #[error("expected {expected} values, found {found}")]
    InsufficientData { expected: usize, found: usize },

    /// Text rows have differing numbers of cells
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token could not be parsed into the element type
    #[error("cannot parse {token:?} at cell ({row}, {col}): {message}")]
    Parse {
        token: String,
        row: usize,
        col: usize,
        message: String,
    },
}

/// Result type for checked matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        MatrixError::ShapeMismatch {
            operation,
            expected,
            actual,
        }
    }

    /// Check that `start..start + len` fits in `extent`
    pub(crate) fn check_range(
        axis: &'static str,
        start: usize,
        len: usize,
        extent: usize,
    ) -> MatrixResult<()> {
        match start.checked_add(len) {
            Some(end) if end <= extent => Ok(()),
            _ => Err(MatrixError::IndexOutOfBounds {
                axis,
                start,
                end: start.saturating_add(len),
                extent,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatrixError::shape_mismatch("add", (2, 3), (3, 2));
        assert_eq!(
            err.to_string(),
            "add: shape mismatch - expected (2, 3), got (3, 2)"
        );

        let err = MatrixError::InnerDimensionMismatch {
            lhs_cols: 4,
            rhs_rows: 3,
        };
        assert!(err.to_string().contains("4 columns vs 3 rows"));
    }

    #[test]
    fn test_check_range() {
        assert!(MatrixError::check_range("row", 1, 2, 3).is_ok());
        assert!(MatrixError::check_range("row", 0, 0, 0).is_ok());
        assert_eq!(
            MatrixError::check_range("col", 2, 2, 3),
            Err(MatrixError::IndexOutOfBounds {
                axis: "col",
                start: 2,
                end: 4,
                extent: 3
            })
        );
        assert!(MatrixError::check_range("col", usize::MAX, 2, 3).is_err());
    }
}
