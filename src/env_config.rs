//! Shared environment configuration for the PiLab binaries.
//!
//! Consolidates `PILAB_MAX_ITERATIONS`, `PILAB_MAX_TRACE_POINTS`, and
//! `RAYON_NUM_THREADS` reads shared by the binaries.

use crate::constants::{MAX_ITERATIONS, MAX_TRACE_POINTS};
use crate::estimator::EstimatorLimits;

/// Read `PILAB_MAX_ITERATIONS` (default [`MAX_ITERATIONS`]).
pub fn max_iterations() -> u64 {
    std::env::var("PILAB_MAX_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(MAX_ITERATIONS)
}

/// Read `PILAB_MAX_TRACE_POINTS` (default [`MAX_TRACE_POINTS`]).
pub fn max_trace_points() -> usize {
    std::env::var("PILAB_MAX_TRACE_POINTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(MAX_TRACE_POINTS)
}

/// Estimator limits from the environment.
pub fn limits_from_env() -> EstimatorLimits {
    EstimatorLimits {
        max_iterations: max_iterations(),
        max_trace_points: max_trace_points(),
    }
}

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8).
/// Builds rayon global thread pool. Returns thread count.
pub fn init_rayon_threads() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok(); // May fail if already initialized
    println!("Rayon threads: {}", num_threads);
    num_threads
}
