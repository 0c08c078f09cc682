use csv::Writer;
use serde::Serialize;
use std::path::Path;

use super::error::Error;
use common::types::PerformanceRecord;

/// Row layout for the benchmark CSV report.
#[derive(Debug, Serialize)]
struct BenchRow {
    nodes: usize,
    iterative_seconds: f64,
    recursive_seconds: f64,
}

/// Writes one CSV row per benchmarked size, preserving sample order.
pub fn write_benchmark_csv(path: &Path, record: &PerformanceRecord) -> Result<(), Error> {
    let mut writer = Writer::from_path(path)?;

    for sample in record {
        writer.serialize(BenchRow {
            nodes: sample.num_nodes,
            iterative_seconds: sample.iterative_secs(),
            recursive_seconds: sample.recursive_secs(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
