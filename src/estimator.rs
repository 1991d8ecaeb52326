//! The π estimator: input validation plus the three estimation methods.
//!
//! `estimate` is a pure function of its request (and, for Monte Carlo, the
//! RNG stream): no shared state across calls, nothing to unwind on failure.
//! Callers that need a responsive UI run it off their interaction thread;
//! the loops here do not yield.
//!
//! The two series methods are deterministic and bit-stable across calls.
//! Monte Carlo is stochastic; use [`estimate_seeded`] for reproducible runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::{MAX_ITERATIONS, MAX_TRACE_POINTS};
use crate::error::{EstimateError, EstimateResult};
use crate::types::{EstimationRequest, EstimationResult, Method, TracePoint};

/// Per-call resource bounds.
#[derive(Clone, Copy, Debug)]
pub struct EstimatorLimits {
    /// Requests above this iteration count are rejected.
    pub max_iterations: u64,
    /// Hard cap on retained trace points, independent of iteration count.
    pub max_trace_points: usize,
}

impl Default for EstimatorLimits {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            max_trace_points: MAX_TRACE_POINTS,
        }
    }
}

/// Parse a user-typed iteration count against the configured limits.
///
/// Mirrors the frontend input guard: non-numeric or non-positive text is
/// `InvalidInput`; values above the ceiling report the ceiling.
pub fn parse_iterations(raw: &str, limits: &EstimatorLimits) -> EstimateResult<u64> {
    let n: u64 = raw
        .trim()
        .parse()
        .map_err(|_| EstimateError::InvalidInput)?;
    if n == 0 {
        return Err(EstimateError::InvalidInput);
    }
    if n > limits.max_iterations {
        return Err(EstimateError::IterationCountTooLarge {
            requested: n,
            max: limits.max_iterations,
        });
    }
    Ok(n)
}

fn validate(request: &EstimationRequest, limits: &EstimatorLimits) -> EstimateResult<()> {
    if request.iterations == 0 {
        return Err(EstimateError::InvalidInput);
    }
    if request.iterations > limits.max_iterations {
        return Err(EstimateError::IterationCountTooLarge {
            requested: request.iterations,
            max: limits.max_iterations,
        });
    }
    Ok(())
}

/// Run one estimation with entropy-seeded randomness and default limits.
pub fn estimate(request: &EstimationRequest) -> EstimateResult<EstimationResult> {
    let mut rng = SmallRng::from_os_rng();
    estimate_with(request, &EstimatorLimits::default(), &mut rng)
}

/// Run one estimation with a fixed seed and default limits. Deterministic
/// for all three methods.
pub fn estimate_seeded(request: &EstimationRequest, seed: u64) -> EstimateResult<EstimationResult> {
    let mut rng = SmallRng::seed_from_u64(seed);
    estimate_with(request, &EstimatorLimits::default(), &mut rng)
}

/// Run one estimation with explicit limits and RNG.
pub fn estimate_with(
    request: &EstimationRequest,
    limits: &EstimatorLimits,
    rng: &mut SmallRng,
) -> EstimateResult<EstimationResult> {
    validate(request, limits)?;
    let result = match request.method {
        Method::MonteCarlo => monte_carlo(
            request.iterations,
            request.want_trace,
            limits.max_trace_points,
            rng,
        ),
        Method::Leibniz => EstimationResult {
            value: leibniz(request.iterations),
            trace: Vec::new(),
        },
        Method::Nilakantha => EstimationResult {
            value: nilakantha(request.iterations),
            trace: Vec::new(),
        },
    };
    Ok(result)
}

/// Monte Carlo: uniform samples in the unit square, classified against the
/// quarter circle `x² + y² ≤ 1`. Estimate = 4 · inside / n.
///
/// With `want_trace`, every k-th sample is retained where
/// `k = max(1, n / cap)`, and retention stops at `min(n, cap)` points, so
/// the trace is an evenly spaced subsample of exactly that length.
fn monte_carlo(
    iterations: u64,
    want_trace: bool,
    max_trace_points: usize,
    rng: &mut SmallRng,
) -> EstimationResult {
    let trace_len = if want_trace {
        (iterations as usize).min(max_trace_points)
    } else {
        0
    };
    let stride = if want_trace {
        (iterations / max_trace_points as u64).max(1)
    } else {
        1
    };

    let mut inside_count: u64 = 0;
    let mut trace = Vec::with_capacity(trace_len);

    for i in 0..iterations {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        let inside = x * x + y * y <= 1.0;
        if inside {
            inside_count += 1;
        }
        if want_trace && i % stride == 0 && trace.len() < trace_len {
            trace.push(TracePoint { x, y, inside });
        }
    }

    EstimationResult {
        value: 4.0 * inside_count as f64 / iterations as f64,
        trace,
    }
}

/// Leibniz series: 4 · Σ_{i=0}^{n-1} (−1)^i / (2i+1).
///
/// Error ~ O(1/n). Plain summation; the precision target does not call for
/// compensated accumulation.
fn leibniz(iterations: u64) -> f64 {
    let mut sum = 0.0f64;
    for i in 0..iterations {
        let term = 1.0 / (2.0 * i as f64 + 1.0);
        if i % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
    }
    4.0 * sum
}

/// Nilakantha series: 3 + 4/(2·3·4) − 4/(4·5·6) + 4/(6·7·8) − …
///
/// Term i (for i ≥ 1) is 4 / (2i · (2i+1) · (2i+2)), added for odd i and
/// subtracted for even i. Converges much faster than Leibniz.
fn nilakantha(iterations: u64) -> f64 {
    let mut sum = 3.0f64;
    for i in 1..iterations {
        let k = 2.0 * i as f64;
        let term = 4.0 / (k * (k + 1.0) * (k + 2.0));
        if i % 2 == 0 {
            sum -= term;
        } else {
            sum += term;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_iterations_invalid() {
        for method in Method::ALL {
            let req = EstimationRequest::new(method, 0);
            assert_eq!(estimate(&req).unwrap_err(), EstimateError::InvalidInput);
        }
    }

    #[test]
    fn test_iteration_ceiling_enforced() {
        let req = EstimationRequest::new(Method::Leibniz, MAX_ITERATIONS + 1);
        assert_eq!(
            estimate(&req).unwrap_err(),
            EstimateError::IterationCountTooLarge {
                requested: MAX_ITERATIONS + 1,
                max: MAX_ITERATIONS,
            }
        );
    }

    #[test]
    fn test_ceiling_itself_allowed_by_validation() {
        // Validation accepts n == max; keep the run itself small.
        let limits = EstimatorLimits {
            max_iterations: 1_000,
            max_trace_points: MAX_TRACE_POINTS,
        };
        let req = EstimationRequest::new(Method::Nilakantha, 1_000);
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(estimate_with(&req, &limits, &mut rng).is_ok());
    }

    #[test]
    fn test_parse_iterations() {
        let limits = EstimatorLimits::default();
        assert_eq!(parse_iterations("1000", &limits).unwrap(), 1000);
        assert_eq!(parse_iterations(" 42 ", &limits).unwrap(), 42);
        assert_eq!(
            parse_iterations("abc", &limits).unwrap_err(),
            EstimateError::InvalidInput
        );
        assert_eq!(
            parse_iterations("-5", &limits).unwrap_err(),
            EstimateError::InvalidInput
        );
        assert_eq!(
            parse_iterations("3.5", &limits).unwrap_err(),
            EstimateError::InvalidInput
        );
        assert_eq!(
            parse_iterations("0", &limits).unwrap_err(),
            EstimateError::InvalidInput
        );
        assert!(matches!(
            parse_iterations("10000001", &limits).unwrap_err(),
            EstimateError::IterationCountTooLarge { .. }
        ));
    }

    #[test]
    fn test_leibniz_first_term() {
        let req = EstimationRequest::new(Method::Leibniz, 1);
        assert_eq!(estimate(&req).unwrap().value, 4.0);
    }

    #[test]
    fn test_nilakantha_first_term() {
        let req = EstimationRequest::new(Method::Nilakantha, 1);
        assert_eq!(estimate(&req).unwrap().value, 3.0);
    }

    #[test]
    fn test_series_converge() {
        for method in [Method::Leibniz, Method::Nilakantha] {
            let coarse = estimate(&EstimationRequest::new(method, 100)).unwrap();
            let fine = estimate(&EstimationRequest::new(method, 100_000)).unwrap();
            assert!(
                fine.abs_error() < coarse.abs_error(),
                "{method}: error at 100k ({}) not below error at 100 ({})",
                fine.abs_error(),
                coarse.abs_error()
            );
        }
    }

    #[test]
    fn test_series_bit_identical() {
        for method in Method::ALL.into_iter().filter(|m| m.is_deterministic()) {
            let req = EstimationRequest::new(method, 12_345);
            let a = estimate(&req).unwrap().value;
            let b = estimate(&req).unwrap().value;
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_monte_carlo_seeded_reproducible() {
        let req = EstimationRequest::with_trace(Method::MonteCarlo, 10_000);
        let a = estimate_seeded(&req, 99).unwrap();
        let b = estimate_seeded(&req, 99).unwrap();
        assert_eq!(a.value.to_bits(), b.value.to_bits());
        assert_eq!(a.trace, b.trace);
    }

    #[test]
    fn test_monte_carlo_close_at_scale() {
        let req = EstimationRequest::new(Method::MonteCarlo, 200_000);
        let result = estimate_seeded(&req, 42).unwrap();
        // σ ≈ 4·√(p(1−p)/n) ≈ 0.0037 at n=200k; 0.05 is far outside it.
        assert!(
            (result.value - PI).abs() < 0.05,
            "estimate {} too far from π",
            result.value
        );
    }

    #[test]
    fn test_trace_length_small_run() {
        let req = EstimationRequest::with_trace(Method::MonteCarlo, 100);
        let result = estimate_seeded(&req, 7).unwrap();
        assert_eq!(result.trace.len(), 100);
    }

    #[test]
    fn test_trace_length_capped() {
        // n not divisible by the cap: naive striding would retain
        // ceil(n/k) > cap points; the hard cap keeps it exact.
        let limits = EstimatorLimits {
            max_iterations: MAX_ITERATIONS,
            max_trace_points: 300,
        };
        let req = EstimationRequest::with_trace(Method::MonteCarlo, 1_000);
        let mut rng = SmallRng::seed_from_u64(3);
        let result = estimate_with(&req, &limits, &mut rng).unwrap();
        assert_eq!(result.trace.len(), 300);
    }

    #[test]
    fn test_trace_absent_without_flag() {
        let req = EstimationRequest::new(Method::MonteCarlo, 1_000);
        let result = estimate_seeded(&req, 7).unwrap();
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_trace_points_normalized_and_classified() {
        let req = EstimationRequest::with_trace(Method::MonteCarlo, 2_000);
        let result = estimate_seeded(&req, 11).unwrap();
        for p in &result.trace {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
            assert_eq!(p.inside, p.x * p.x + p.y * p.y <= 1.0);
        }
    }

    #[test]
    fn test_series_ignore_trace_flag() {
        let req = EstimationRequest::with_trace(Method::Leibniz, 50);
        assert!(estimate(&req).unwrap().trace.is_empty());
    }
}
