pub mod config;
pub mod error;
pub mod report;

use std::env;
use std::path::Path;
use std::process;
use std::time::Duration;

use apsp_solver_core::generator::generate_random_graph;
use apsp_solver_core::matrix::SquareMatrix;
use apsp_solver_core::solver::{IterativeSolver, RecursiveSolver, has_negative_cycle};
use common::types::NO_EDGE;
use error::Error;
use perf_bench::{benchmark, timed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolverKind {
    Iterative,
    Recursive,
}

impl SolverKind {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "iterative" => Some(SolverKind::Iterative),
            "recursive" => Some(SolverKind::Recursive),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SolverKind::Iterative => "Iterative",
            SolverKind::Recursive => "Recursive",
        }
    }

    fn run(self, weights: &SquareMatrix) -> (SquareMatrix, Duration) {
        match self {
            SolverKind::Iterative => timed(&IterativeSolver, weights),
            SolverKind::Recursive => timed(&RecursiveSolver, weights),
        }
    }
}

enum Mode {
    Demo(SolverKind),
    Cycles(SolverKind),
    Bench(Option<String>),
}

fn main() {
    let mode = parse_args();
    let config = config::load_config().expect("Failed to load config");

    let outcome = match mode {
        Mode::Demo(kind) => run_demo(kind),
        Mode::Cycles(kind) => run_cycles(kind, &config),
        Mode::Bench(output_path) => run_bench(&config, output_path),
    };

    if let Err(e) = outcome {
        eprintln!("runner failed: {}", e);
        process::exit(1);
    }
}

/// Parse command-line arguments to determine the run mode.
fn parse_args() -> Mode {
    let args: Vec<String> = env::args().collect();
    let mode = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "demo".to_string());

    match mode.as_str() {
        "demo" => Mode::Demo(parse_solver_kind(&args)),
        "cycles" => Mode::Cycles(parse_solver_kind(&args)),
        "bench" => Mode::Bench(args.get(2).cloned()),
        _ => {
            eprintln!(
                "Usage: {} <demo|cycles|bench> [iterative|recursive | output.csv]\n  - demo: solve the fixed example graph\n  - cycles: solve a random graph with negative weights and report cycles\n  - bench: time both solvers across graph sizes and write a CSV report",
                args[0]
            );
            process::exit(1);
        }
    }
}

fn parse_solver_kind(args: &[String]) -> SolverKind {
    let kind = args
        .get(2)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "iterative".to_string());

    SolverKind::parse(&kind).unwrap_or_else(|| {
        eprintln!("Unknown solver '{}', expected iterative or recursive.", kind);
        process::exit(1);
    })
}

/// Fixed 5-node example graph with mixed-sign weights and no negative cycle.
fn example_graph() -> SquareMatrix {
    SquareMatrix::from_rows(vec![
        vec![0.0, 3.0, 8.0, NO_EDGE, -4.0],
        vec![NO_EDGE, 0.0, NO_EDGE, 1.0, 7.0],
        vec![NO_EDGE, 4.0, 0.0, NO_EDGE, NO_EDGE],
        vec![2.0, NO_EDGE, -5.0, 0.0, NO_EDGE],
        vec![NO_EDGE, NO_EDGE, NO_EDGE, 6.0, 0.0],
    ])
    .expect("example graph is square")
}

fn run_demo(kind: SolverKind) -> Result<(), Error> {
    let weights = example_graph();
    println!("Example graph (adjacency matrix):\n{}", weights);

    let (distances, duration) = kind.run(&weights);

    println!("Resulting distance matrix:\n{}", distances);
    println!(
        "{} execution time: {:.6} seconds",
        kind.label(),
        duration.as_secs_f64()
    );
    Ok(())
}

fn run_cycles(kind: SolverKind, config: &config::Config) -> Result<(), Error> {
    let weights = generate_random_graph(
        config.generator.num_nodes,
        true,
        config.generator.max_weight,
    )?;
    println!("Random graph (adjacency matrix):\n{}", weights);

    let (distances, duration) = kind.run(&weights);

    println!("Resulting distance matrix:\n{}", distances);
    println!(
        "{} execution time: {:.6} seconds",
        kind.label(),
        duration.as_secs_f64()
    );

    if has_negative_cycle(&distances) {
        println!("A negative cycle has been detected in the graph.");
    } else {
        println!("No negative cycles detected.");
    }
    Ok(())
}

fn run_bench(config: &config::Config, output_path: Option<String>) -> Result<(), Error> {
    let sizes = config.bench.sizes();
    println!(
        "Benchmarking both solvers on {} graph sizes...",
        sizes.len()
    );

    let record = benchmark(&sizes)?;

    println!("{:>6} | {:>18} | {:>18}", "nodes", "iterative (s)", "recursive (s)");
    for sample in &record {
        println!(
            "{:>6} | {:>18.6} | {:>18.6}",
            sample.num_nodes,
            sample.iterative_secs(),
            sample.recursive_secs()
        );
    }

    let path = output_path.unwrap_or_else(|| config.bench.output_path.clone());
    report::write_benchmark_csv(Path::new(&path), &record)?;
    println!("Benchmark report written to {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_kind_parses_known_names() {
        assert_eq!(SolverKind::parse("iterative"), Some(SolverKind::Iterative));
        assert_eq!(SolverKind::parse("recursive"), Some(SolverKind::Recursive));
        assert_eq!(SolverKind::parse("parallel"), None);
    }

    #[test]
    fn example_graph_has_no_negative_cycle() {
        let (distances, _) = SolverKind::Iterative.run(&example_graph());

        assert!(!has_negative_cycle(&distances));
        assert_eq!(distances.get(0, 4), -4.0);
        assert_eq!(distances.get(4, 2), 1.0);
    }
}
