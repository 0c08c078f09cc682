use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Indicates that the input rows do not form a square matrix: row `row`
    /// has `width` entries while the matrix has `rows` rows.
    NotSquare {
        rows: usize,
        row: usize,
        width: usize,
    },

    /// Indicates a flat value buffer whose length is not `side * side`.
    LengthMismatch { expected: usize, actual: usize },

    /// Random weight bound admits no integer weight in `[1, bound)`.
    InvalidWeightBound(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotSquare { rows, row, width } => write!(
                f,
                "Matrix with {} rows is not square: row {} has {} entries.",
                rows, row, width
            ),

            Error::LengthMismatch { expected, actual } => write!(
                f,
                "Flat matrix buffer holds {} values, expected {}.",
                actual, expected
            ),

            Error::InvalidWeightBound(bound) => write!(
                f,
                "Weight bound {} leaves the integer range [1, {}) empty.",
                bound, bound
            ),
        }
    }
}

impl std::error::Error for Error {}
