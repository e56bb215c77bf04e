use std::fmt;
use thiserror::Error;

/// Result type alias for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// The axis an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors returned by matrix construction, access and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// The data handed to a constructor does not fill the matrix exactly.
    #[error("invalid argument: expected {expected} values, found {found}")]
    InvalidArgument { expected: usize, found: usize },

    /// The operand shapes are incompatible for the operation.
    #[error(
        "dimension mismatch in {op}: {}x{} and {}x{}",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A 1-based index fell outside `1..=bound`.
    #[error("{axis} index {index} out of range 1..={bound}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },
}
