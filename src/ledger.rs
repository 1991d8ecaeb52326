//! Per-activity score ledger.
//!
//! The ledger is an explicit value owned by the caller, never ambient state.
//! An activity's total is the plain sum of every delta ever applied to it;
//! totals are unclamped and can go negative (hint penalties do this).
//!
//! [`MemoryLedger`] is the in-process reference store; [`SharedLedger`]
//! wraps it behind a mutex so concurrent scoring sources (a continuous
//! simulation ticking while the user clicks) serialize through one writer.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::types::ScoreEvent;

/// Storage contract the scoring layer writes against.
pub trait LedgerStore {
    /// Current total for an activity; 0 if it has never scored.
    fn score(&self, activity: &str) -> i64;

    /// Apply one event, returning the activity's new total.
    fn apply(&mut self, event: ScoreEvent) -> i64;
}

/// One row of a dashboard snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct ActivityScore {
    pub activity: &'static str,
    pub score: i64,
}

/// In-memory ledger keyed by activity name.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    totals: BTreeMap<&'static str, i64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum across all activities.
    pub fn total_score(&self) -> i64 {
        self.totals.values().sum()
    }

    /// Activities ranked by score, descending (dashboard order).
    pub fn ranked(&self) -> Vec<ActivityScore> {
        let mut rows: Vec<ActivityScore> = self
            .totals
            .iter()
            .map(|(&activity, &score)| ActivityScore { activity, score })
            .collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows
    }

    /// Serializable snapshot in activity-name order.
    pub fn snapshot(&self) -> Vec<ActivityScore> {
        self.totals
            .iter()
            .map(|(&activity, &score)| ActivityScore { activity, score })
            .collect()
    }
}

impl LedgerStore for MemoryLedger {
    fn score(&self, activity: &str) -> i64 {
        self.totals.get(activity).copied().unwrap_or(0)
    }

    fn apply(&mut self, event: ScoreEvent) -> i64 {
        let total = self.totals.entry(event.activity).or_insert(0);
        *total += event.delta;
        *total
    }
}

/// Single-writer ledger for concurrent scoring sources.
#[derive(Debug, Default)]
pub struct SharedLedger {
    inner: Mutex<MemoryLedger>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, activity: &str) -> i64 {
        self.inner.lock().expect("ledger lock poisoned").score(activity)
    }

    pub fn apply(&self, event: ScoreEvent) -> i64 {
        self.inner.lock().expect("ledger lock poisoned").apply(event)
    }

    pub fn total_score(&self) -> i64 {
        self.inner.lock().expect("ledger lock poisoned").total_score()
    }

    pub fn snapshot(&self) -> Vec<ActivityScore> {
        self.inner.lock().expect("ledger lock poisoned").snapshot()
    }
}
