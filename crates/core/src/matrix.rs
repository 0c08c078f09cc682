use common::error::Error;
use common::types::{NO_EDGE, Weight};
use std::fmt;

/// Dense N x N weight matrix in row-major order.
///
/// Entry `(i, j)` holds the direct edge weight from node `i` to node `j`:
/// - `values[i * num_nodes + j]` -> weight of edge `i -> j`
/// - `NO_EDGE` (positive infinity) -> no direct edge
/// - diagonal entries are conventionally `0.0` in input matrices
///
/// Squareness is enforced by the constructors, so every `SquareMatrix` a
/// solver receives is valid by construction. The same type carries both
/// input weights and computed distances.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    num_nodes: usize,
    values: Vec<Weight>,
}

impl SquareMatrix {
    /// Creates an `num_nodes` x `num_nodes` matrix with every entry set to `value`.
    pub fn filled(num_nodes: usize, value: Weight) -> Self {
        SquareMatrix {
            num_nodes,
            values: vec![value; num_nodes * num_nodes],
        }
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    /// Returns `Error::NotSquare` if any row's length differs from the
    /// number of rows. An empty `rows` yields the valid 0 x 0 matrix.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self, Error> {
        let num_nodes = rows.len();

        let mut values = Vec::with_capacity(num_nodes * num_nodes);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != num_nodes {
                return Err(Error::NotSquare {
                    rows: num_nodes,
                    row,
                    width: entries.len(),
                });
            }
            values.extend_from_slice(entries);
        }

        Ok(SquareMatrix { num_nodes, values })
    }

    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if `values.len() != num_nodes * num_nodes`.
    pub fn from_flat(num_nodes: usize, values: Vec<Weight>) -> Result<Self, Error> {
        let expected = num_nodes * num_nodes;
        if values.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(SquareMatrix { num_nodes, values })
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Weight {
        self.values[i * self.num_nodes + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Weight) {
        self.values[i * self.num_nodes + j] = value;
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Row-major view of all entries.
    pub fn values(&self) -> &[Weight] {
        &self.values
    }

    /// Iterates over the diagonal entries `(0,0), (1,1), ...`.
    pub fn diagonal(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..self.num_nodes).map(|i| self.get(i, i))
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.num_nodes {
            for j in 0..self.num_nodes {
                let value = self.get(i, j);
                if value == NO_EDGE {
                    write!(f, "{:>8}", "inf")?;
                } else {
                    write!(f, "{:>8.1}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
