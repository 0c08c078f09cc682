use std::hint::black_box;
use std::time::Instant;

use apsp_solver_core::generator::{DEFAULT_MAX_WEIGHT, generate_random_graph};
use apsp_solver_core::solver::IterativeSolver;
use apsp_solver_core::traits::DistanceSolver;

const SIZES: [usize; 5] = [16, 32, 64, 96, 128];

fn main() {
    println!("--- Iterative Solver Benchmark ---");

    for num_nodes in SIZES {
        let weights = generate_random_graph(num_nodes, false, DEFAULT_MAX_WEIGHT)
            .expect("Failed to generate benchmark graph");

        let start_time = Instant::now();
        let distances = IterativeSolver.compute_distances(&weights);
        let elapsed_time = start_time.elapsed();

        // Summing the result keeps the relaxation observable so the
        // compiler cannot optimize the run away.
        let checksum: f64 = black_box(distances.values().iter().sum());

        println!(
            "{:>4} nodes | Elapsed Time: {:?} | Checksum: {:.1}",
            num_nodes, elapsed_time, checksum
        );
    }
}
