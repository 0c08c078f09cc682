use std::time::Duration;

/// Edge weights and path distances are plain IEEE doubles.
pub type Weight = f64;

/// Sentinel for "no direct edge between these nodes".
///
/// Absent edges are always positive infinity, never a negative marker and
/// never an omitted entry. Finite weights may be negative.
pub const NO_EDGE: Weight = f64::INFINITY;

/// One benchmarked graph size: how long each solver took on the same
/// randomly generated input.
///
/// Durations are single-sample wall-clock measurements. The harness does no
/// statistical smoothing, so samples are suited to illustrative comparison
/// of the two solvers rather than rigorous benchmarking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceSample {
    pub num_nodes: usize,
    pub iterative: Duration,
    pub recursive: Duration,
}

impl PerformanceSample {
    /// Iterative solver runtime in fractional seconds.
    pub fn iterative_secs(&self) -> f64 {
        self.iterative.as_secs_f64()
    }

    /// Recursive solver runtime in fractional seconds.
    pub fn recursive_secs(&self) -> f64 {
        self.recursive.as_secs_f64()
    }
}

/// Series of samples in the order the sizes were benchmarked.
pub type PerformanceRecord = Vec<PerformanceSample>;
