//! Core data structures: estimation requests/results and score events.
//!
//! Everything here crosses the boundary to the frontend, so it all derives
//! serde. `EstimationRequest`/`EstimationResult` are ephemeral (one per user
//! action); [`ScoreEvent`]s are appended to a ledger that outlives any call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Estimation method identifier.
///
/// The serde/textual forms are the frontend's method keys
/// (`"monte-carlo"`, `"leibniz"`, `"nilakantha"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    MonteCarlo,
    Leibniz,
    Nilakantha,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::MonteCarlo, Method::Leibniz, Method::Nilakantha];

    /// Frontend method key.
    pub fn key(self) -> &'static str {
        match self {
            Method::MonteCarlo => "monte-carlo",
            Method::Leibniz => "leibniz",
            Method::Nilakantha => "nilakantha",
        }
    }

    /// Whether repeated calls with the same input yield bit-identical
    /// results. Monte Carlo is stochastic by design.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Method::MonteCarlo)
    }
}

impl FromStr for Method {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monte-carlo" => Ok(Method::MonteCarlo),
            "leibniz" => Ok(Method::Leibniz),
            "nilakantha" => Ok(Method::Nilakantha),
            other => Err(EstimateError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One estimation call as the caller specifies it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EstimationRequest {
    pub method: Method,
    pub iterations: u64,
    /// Retain a bounded subsample of classified points (Monte Carlo only).
    #[serde(default)]
    pub want_trace: bool,
}

impl EstimationRequest {
    pub fn new(method: Method, iterations: u64) -> Self {
        Self {
            method,
            iterations,
            want_trace: false,
        }
    }

    pub fn with_trace(method: Method, iterations: u64) -> Self {
        Self {
            method,
            iterations,
            want_trace: true,
        }
    }
}

/// A classified sample point, normalized to the unit square.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub x: f64,
    pub y: f64,
    pub inside: bool,
}

/// Result of a successful estimation.
///
/// `trace` is non-empty only for Monte Carlo with `want_trace`, and its
/// length is exactly `min(iterations, max_trace_points)`.
#[derive(Clone, Debug, Serialize)]
pub struct EstimationResult {
    pub value: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TracePoint>,
}

impl EstimationResult {
    /// Absolute error against the double-precision value of π.
    pub fn abs_error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }
}

/// A single signed point delta attributed to a named activity.
///
/// Events are produced by the pure rules in [`crate::scoring`] and applied
/// by a [`crate::ledger::LedgerStore`]; they never read a running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreEvent {
    pub activity: &'static str,
    pub delta: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_round_trip() {
        for m in Method::ALL {
            assert_eq!(m.key().parse::<Method>().unwrap(), m);
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        let err = "chudnovsky".parse::<Method>().unwrap_err();
        assert_eq!(err, EstimateError::UnknownMethod("chudnovsky".to_string()));
    }

    #[test]
    fn test_determinism_flags() {
        assert!(!Method::MonteCarlo.is_deterministic());
        assert!(Method::Leibniz.is_deterministic());
        assert!(Method::Nilakantha.is_deterministic());
    }

    #[test]
    fn test_method_serde_keys() {
        let json = serde_json::to_string(&Method::MonteCarlo).unwrap();
        assert_eq!(json, "\"monte-carlo\"");
        let back: Method = serde_json::from_str("\"nilakantha\"").unwrap();
        assert_eq!(back, Method::Nilakantha);
    }

    #[test]
    fn test_result_serialization_omits_empty_trace() {
        let result = EstimationResult {
            value: 3.14,
            trace: Vec::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("trace").is_none());
    }
}
