//! Convergence sweeps and spread statistics across the estimation methods.
//!
//! Runs the estimator over an iteration ladder per method, parallelized
//! across independent calls, and aggregates absolute error against the
//! double-precision value of π. Monte Carlo additionally gets a spread pass
//! (repeated seeded runs at one iteration count) since a single stochastic
//! run says little on its own.

use std::f64::consts::PI;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::EstimateResult;
use crate::estimator::estimate_seeded;
use crate::types::{EstimationRequest, Method};

/// Default iteration ladder for sweeps.
pub const DEFAULT_LADDER: [u64; 6] = [10, 100, 1_000, 10_000, 100_000, 1_000_000];

// ── Report structure ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ConvergenceReport {
    pub seed: u64,
    pub methods: Vec<MethodConvergence>,
    pub monte_carlo_spread: Vec<SpreadStatistics>,
}

#[derive(Serialize)]
pub struct MethodConvergence {
    pub method: Method,
    pub rungs: Vec<ConvergenceEntry>,
}

#[derive(Serialize)]
pub struct ConvergenceEntry {
    pub iterations: u64,
    pub value: f64,
    pub abs_error: f64,
}

/// Spread of repeated Monte Carlo runs at one iteration count.
#[derive(Serialize)]
pub struct SpreadStatistics {
    pub iterations: u64,
    pub runs: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

// ── Sweeps ──────────────────────────────────────────────────────────

/// One method across the ladder. Each rung runs as an independent seeded
/// call; rungs parallelize since no state is shared between them.
pub fn convergence_ladder(
    method: Method,
    ladder: &[u64],
    seed: u64,
) -> EstimateResult<Vec<ConvergenceEntry>> {
    ladder
        .par_iter()
        .enumerate()
        .map(|(i, &iterations)| {
            let request = EstimationRequest::new(method, iterations);
            let result = estimate_seeded(&request, seed.wrapping_add(i as u64))?;
            Ok(ConvergenceEntry {
                iterations,
                value: result.value,
                abs_error: (result.value - PI).abs(),
            })
        })
        .collect()
}

/// All three methods across the ladder, plus the Monte Carlo spread at the
/// ladder's top rung.
pub fn sweep_all_methods(ladder: &[u64], runs: usize, seed: u64) -> EstimateResult<ConvergenceReport> {
    let methods = Method::ALL
        .iter()
        .map(|&method| {
            Ok(MethodConvergence {
                method,
                rungs: convergence_ladder(method, ladder, seed)?,
            })
        })
        .collect::<EstimateResult<Vec<_>>>()?;

    let monte_carlo_spread = ladder
        .iter()
        .map(|&iterations| monte_carlo_spread(iterations, runs, seed))
        .collect::<EstimateResult<Vec<_>>>()?;

    Ok(ConvergenceReport {
        seed,
        methods,
        monte_carlo_spread,
    })
}

/// Repeated Monte Carlo runs at one iteration count, one seed stream per
/// run, aggregated to mean/std-dev/min/max.
pub fn monte_carlo_spread(
    iterations: u64,
    runs: usize,
    seed: u64,
) -> EstimateResult<SpreadStatistics> {
    let request = EstimationRequest::new(Method::MonteCarlo, iterations);
    let values: Vec<f64> = (0..runs)
        .into_par_iter()
        .map(|i| Ok(estimate_seeded(&request, seed.wrapping_add(i as u64))?.value))
        .collect::<EstimateResult<Vec<_>>>()?;

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(SpreadStatistics {
        iterations,
        runs,
        mean,
        std_dev: variance.sqrt(),
        min,
        max,
    })
}

/// Save a report as pretty-printed JSON.
pub fn save_report(report: &ConvergenceReport, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(report).expect("Failed to serialize report");
    std::fs::write(path, json).expect("Failed to write report file");
}
