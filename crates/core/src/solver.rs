use super::matrix::SquareMatrix;
use super::traits::DistanceSolver;
use common::types::NO_EDGE;

/// Deepest graph the recursive solver descends into before switching to
/// level-by-level iteration. One stack frame is spent per intermediate node,
/// so the cap keeps stack usage bounded for pathologically large inputs.
const MAX_RECURSION_LEVELS: usize = 64;

/// Solver running the Floyd-Warshall relaxation as three nested loops,
/// bottom-up over the intermediate-node index.
pub struct IterativeSolver;

/// Solver expressing the same relaxation as a recursion over the
/// intermediate-node index.
///
/// Produces output bit-for-bit identical to [`IterativeSolver`] on every
/// input: both run the same per-level pass in the same order.
pub struct RecursiveSolver;

/// Runs one relaxation pass with `k` as the newly permitted intermediate
/// node, visiting cells in row-major order.
///
/// The sum `dist(i,k) + dist(k,j)` is only formed when both legs are real
/// edges; `NO_EDGE` (infinity) must never leak into an arithmetic result.
/// Both legs are re-read at every cell because a negative `dist(k,k)` can
/// shrink the k-row and k-column mid-pass.
fn relax_level(dist: &mut SquareMatrix, k: usize) {
    let num_nodes = dist.num_nodes();

    for i in 0..num_nodes {
        for j in 0..num_nodes {
            let through = dist.get(i, k);
            let tail = dist.get(k, j);
            if through != NO_EDGE && tail != NO_EDGE {
                let candidate = through + tail;
                if candidate < dist.get(i, j) {
                    dist.set(i, j, candidate);
                }
            }
        }
    }
}

impl DistanceSolver for IterativeSolver {
    /// Relaxes a copy of `weights` once per intermediate node, in index
    /// order, and returns the resulting distance matrix.
    ///
    /// An empty matrix is returned unchanged. O(N^3) time, O(N^2) space.
    fn compute_distances(&self, weights: &SquareMatrix) -> SquareMatrix {
        let mut dist = weights.clone();

        for k in 0..dist.num_nodes() {
            relax_level(&mut dist, k);
        }

        dist
    }
}

impl RecursiveSolver {
    /// Relaxes every level from `k` upward; the terminal case `k == N`
    /// returns the threaded matrix as-is.
    fn relax_from(dist: &mut SquareMatrix, k: usize) {
        if k == dist.num_nodes() {
            return;
        }
        relax_level(dist, k);
        Self::relax_from(dist, k + 1);
    }
}

impl DistanceSolver for RecursiveSolver {
    /// Recursive rendition of the same relaxation: the recursion runs over
    /// the intermediate-node dimension only, threading one owned working
    /// copy through all levels, while each level traverses its cells with
    /// ordinary loops.
    ///
    /// Graphs with more than `MAX_RECURSION_LEVELS` nodes are relaxed
    /// level-by-level in a loop instead; the fallback applies the identical
    /// pass in the identical order, so the output does not change.
    fn compute_distances(&self, weights: &SquareMatrix) -> SquareMatrix {
        let mut dist = weights.clone();

        if dist.num_nodes() <= MAX_RECURSION_LEVELS {
            Self::relax_from(&mut dist, 0);
        } else {
            for k in 0..dist.num_nodes() {
                relax_level(&mut dist, k);
            }
        }

        dist
    }
}

/// Reports whether `distances` implies a reachable negative-weight cycle.
///
/// True iff any diagonal entry is strictly negative: a node that can reach
/// itself at negative cost sits on or feeds into a net-negative cycle,
/// leaving "shortest path" undefined for routes through it.
///
/// `distances` must be the output of a completed solver run. A raw,
/// unrelaxed weight matrix gives no meaningful answer here.
pub fn has_negative_cycle(distances: &SquareMatrix) -> bool {
    distances.diagonal().any(|d| d < 0.0)
}

#[cfg(test)]
mod solver_tests {
    use super::*;
    use crate::generator::generate_random_graph_with;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn weights_3x3() -> SquareMatrix {
        SquareMatrix::from_rows(vec![
            vec![0.0, 3.0, NO_EDGE],
            vec![NO_EDGE, 0.0, 1.0],
            vec![4.0, NO_EDGE, 0.0],
        ])
        .unwrap()
    }

    fn expected_3x3() -> SquareMatrix {
        SquareMatrix::from_rows(vec![
            vec![0.0, 3.0, 4.0],
            vec![5.0, 0.0, 1.0],
            vec![4.0, 7.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn iterative_solves_known_graph() {
        let distances = IterativeSolver.compute_distances(&weights_3x3());
        assert_eq!(distances, expected_3x3());
    }

    #[test]
    fn recursive_solves_known_graph() {
        let distances = RecursiveSolver.compute_distances(&weights_3x3());
        assert_eq!(distances, expected_3x3());
    }

    #[test]
    fn solvers_agree_on_mixed_sign_graph() {
        // Graph with negative edges but no negative cycle.
        let weights = SquareMatrix::from_rows(vec![
            vec![0.0, 3.0, 8.0, NO_EDGE, -4.0],
            vec![NO_EDGE, 0.0, NO_EDGE, 1.0, 7.0],
            vec![NO_EDGE, 4.0, 0.0, NO_EDGE, NO_EDGE],
            vec![2.0, NO_EDGE, -5.0, 0.0, NO_EDGE],
            vec![NO_EDGE, NO_EDGE, NO_EDGE, 6.0, 0.0],
        ])
        .unwrap();

        let expected = SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, -3.0, 2.0, -4.0],
            vec![3.0, 0.0, -4.0, 1.0, -1.0],
            vec![7.0, 4.0, 0.0, 5.0, 3.0],
            vec![2.0, -1.0, -5.0, 0.0, -2.0],
            vec![8.0, 5.0, 1.0, 6.0, 0.0],
        ])
        .unwrap();

        let iterative = IterativeSolver.compute_distances(&weights);
        let recursive = RecursiveSolver.compute_distances(&weights);

        assert_eq!(iterative, expected);
        assert_eq!(recursive, expected);
        assert!(!has_negative_cycle(&iterative));
    }

    #[test]
    fn negative_cycle_turns_diagonal_negative() {
        let weights = SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, NO_EDGE],
            vec![NO_EDGE, 0.0, -1.0],
            vec![-1.0, NO_EDGE, 0.0],
        ])
        .unwrap();

        let iterative = IterativeSolver.compute_distances(&weights);
        let recursive = RecursiveSolver.compute_distances(&weights);

        assert!(
            iterative.get(0, 0) < 0.0,
            "Node 0 lies on the cycle 0 -> 1 -> 2 -> 0 of weight -1."
        );
        assert!(has_negative_cycle(&iterative));
        assert_eq!(
            iterative, recursive,
            "Both solvers must report the same relaxed values, negative cycles included."
        );
    }

    #[test]
    fn raw_weight_matrix_without_cycle_reports_none() {
        let distances = IterativeSolver.compute_distances(&weights_3x3());
        assert!(!has_negative_cycle(&distances));
    }

    #[test]
    fn empty_matrix_is_returned_unchanged() {
        let empty = SquareMatrix::from_rows(vec![]).unwrap();

        assert_eq!(IterativeSolver.compute_distances(&empty), empty);
        assert_eq!(RecursiveSolver.compute_distances(&empty), empty);
    }

    #[test]
    fn single_node_matrix_is_a_fixed_point() {
        let single = SquareMatrix::from_rows(vec![vec![0.0]]).unwrap();

        assert_eq!(IterativeSolver.compute_distances(&single), single);
    }

    #[test]
    fn unreachable_pairs_stay_unreachable() {
        let weights =
            SquareMatrix::from_rows(vec![vec![0.0, NO_EDGE], vec![1.0, 0.0]]).unwrap();

        let distances = IterativeSolver.compute_distances(&weights);

        assert_eq!(distances.get(0, 1), NO_EDGE);
        assert_eq!(distances.get(1, 0), 1.0);
    }

    #[test]
    fn callers_matrix_is_not_mutated() {
        let weights = weights_3x3();
        let snapshot = weights.clone();

        let _ = IterativeSolver.compute_distances(&weights);
        let _ = RecursiveSolver.compute_distances(&weights);

        assert_eq!(weights, snapshot);
    }

    #[test]
    fn relaxed_matrix_is_a_fixed_point() {
        let distances = IterativeSolver.compute_distances(&weights_3x3());
        let relaxed_again = IterativeSolver.compute_distances(&distances);

        assert_eq!(relaxed_again, distances);
    }

    #[test]
    fn recursive_fallback_matches_iterative_above_level_cap() {
        let num_nodes = MAX_RECURSION_LEVELS + 6;
        let mut rng = SmallRng::seed_from_u64(9);
        let weights = generate_random_graph_with(&mut rng, num_nodes, false, 10).unwrap();

        let iterative = IterativeSolver.compute_distances(&weights);
        let recursive = RecursiveSolver.compute_distances(&weights);

        assert_eq!(
            iterative, recursive,
            "The level-loop fallback must reproduce the recursive output exactly."
        );
    }
}
