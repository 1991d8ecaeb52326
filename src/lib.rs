//! # PiLab — π estimation engine and activity scoring core
//!
//! The computation layer behind the PiLab frontend: three π-approximation
//! methods, the point-award rules for every interactive activity, and the
//! per-activity score ledger they feed.
//!
//! ## Estimation methods
//!
//! | Method | Module entry | Character |
//! |--------|--------------|-----------|
//! | Monte Carlo | [`estimator::estimate`] | Stochastic; uniform unit-square samples classified against the quarter circle, optional bounded trace for drawing |
//! | Leibniz | [`estimator::estimate`] | Deterministic alternating series, error ~ O(1/n) |
//! | Nilakantha | [`estimator::estimate`] | Deterministic, starts at 3, converges much faster than Leibniz |
//!
//! `estimate` is pure: validation and computation only, no score side
//! effects. Callers apply awards afterwards — a successful run maps to a
//! [`types::ScoreEvent`] via [`scoring`], and a [`ledger::LedgerStore`]
//! accumulates the totals.
//!
//! ## Activities
//!
//! - [`quiz`] — the canonical 10-question bank and a one-pass session.
//! - [`memorization`] — the digit trainer with practice/challenge modes.
//! - [`sampler`] — the incremental accumulator behind the live Monte Carlo
//!   demonstration, with a bounded drawing window.
//! - [`progress`] — achievement levels derived from a ledger total.
//!
//! [`convergence`] provides batch sweeps across methods for error/spread
//! reporting; the `pilab-estimate` and `pilab-convergence` binaries are thin
//! CLI drivers over the library.

pub mod constants;
pub mod convergence;
pub mod env_config;
pub mod error;
pub mod estimator;
pub mod fast_prng;
pub mod ledger;
pub mod memorization;
pub mod progress;
pub mod quiz;
pub mod sampler;
pub mod scoring;
pub mod types;
