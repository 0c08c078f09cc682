use super::matrix::SquareMatrix;

/// Trait for solvers computing all-pairs shortest path distances.
pub trait DistanceSolver {
    /// Computes the distance matrix for `weights`.
    ///
    /// The caller's matrix is never modified; each call works on a fresh
    /// internal copy and returns an independently owned result. On input
    /// containing a reachable negative cycle the affected diagonal entries
    /// of the result turn negative, which is a reportable data condition
    /// rather than an error.
    fn compute_distances(&self, weights: &SquareMatrix) -> SquareMatrix;
}
