use std::time::{Duration, Instant};

use apsp_solver_core::generator::{DEFAULT_MAX_WEIGHT, generate_random_graph};
use apsp_solver_core::matrix::SquareMatrix;
use apsp_solver_core::solver::{IterativeSolver, RecursiveSolver};
use apsp_solver_core::traits::DistanceSolver;
use common::error::Error;
use common::types::{PerformanceRecord, PerformanceSample};

/// Runs `solver` on `weights` and measures the elapsed wall-clock time.
///
/// Generic over the solver so callers invoke either implementation through
/// one code path. The input is only borrowed; the solver clones internally.
pub fn timed<S: DistanceSolver>(solver: &S, weights: &SquareMatrix) -> (SquareMatrix, Duration) {
    let start_time = Instant::now();
    let distances = solver.compute_distances(weights);
    (distances, start_time.elapsed())
}

/// Times both solvers across the given graph sizes.
///
/// For each size a fresh random graph without negative weights is generated,
/// then each solver runs once on it (each on its own internal copy). One
/// sample per size, in input order, single wall-clock measurement per run.
pub fn benchmark(sizes: &[usize]) -> Result<PerformanceRecord, Error> {
    let mut record = Vec::with_capacity(sizes.len());

    for &num_nodes in sizes {
        let weights = generate_random_graph(num_nodes, false, DEFAULT_MAX_WEIGHT)?;

        let (_, iterative) = timed(&IterativeSolver, &weights);
        let (_, recursive) = timed(&RecursiveSolver, &weights);

        record.push(PerformanceSample {
            num_nodes,
            iterative,
            recursive,
        });
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_returns_the_solver_result() {
        let weights = generate_random_graph(5, false, DEFAULT_MAX_WEIGHT).unwrap();

        let (distances, _) = timed(&IterativeSolver, &weights);

        assert_eq!(distances, IterativeSolver.compute_distances(&weights));
    }

    #[test]
    fn benchmark_samples_match_requested_sizes() {
        let sizes = [0, 2, 4, 8];

        let record = benchmark(&sizes).unwrap();

        let sampled: Vec<usize> = record.iter().map(|s| s.num_nodes).collect();
        assert_eq!(sampled, sizes);
    }

    #[test]
    fn benchmark_of_empty_size_list_is_empty() {
        let record = benchmark(&[]).unwrap();
        assert!(record.is_empty());
    }
}
