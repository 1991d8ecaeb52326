//! Point award rules for every activity.
//!
//! Each rule is a pure function from an activity outcome to a [`ScoreEvent`]
//! (or `None` when the outcome earns nothing). Rules never read a ledger
//! total, so they unit-test without any storage behind them; applying the
//! event is the caller's separate, explicit step after a successful outcome.

use crate::constants::*;
use crate::types::ScoreEvent;

/// Flat award for one successful calculator run, any method.
pub fn calculator_run_award() -> ScoreEvent {
    ScoreEvent {
        activity: ACTIVITY_CALCULATOR,
        delta: CALCULATOR_RUN_POINTS,
    }
}

/// Milestone award for the memorization trainer.
///
/// `correct_digits` is the number of canonical characters matched from the
/// start of the digit string ("3." included). An award is due only at
/// positive multiples of 5, and scales with depth:
/// `5 · (correct_digits/10 + 1)` — so 10 correct characters earn +10.
///
/// The caller is responsible for only reporting counts whose typed prefix
/// matched the canonical string exactly (see [`crate::memorization`]).
pub fn memorization_award(correct_digits: usize) -> Option<ScoreEvent> {
    if correct_digits == 0 || correct_digits % MEMORIZATION_AWARD_STEP != 0 {
        return None;
    }
    let level_multiplier = (correct_digits / 10 + 1) as i64;
    Some(ScoreEvent {
        activity: ACTIVITY_MEMORIZATION,
        delta: MEMORIZATION_BASE_POINTS * level_multiplier,
    })
}

/// Penalty for revealing the next digit, regardless of any streak.
pub fn memorization_hint_penalty() -> ScoreEvent {
    ScoreEvent {
        activity: ACTIVITY_MEMORIZATION,
        delta: MEMORIZATION_HINT_PENALTY,
    }
}

/// Award for one quiz answer. Correct picks earn a flat +10; wrong picks
/// earn nothing and cost nothing.
pub fn quiz_answer_award(correct: bool) -> Option<ScoreEvent> {
    correct.then_some(ScoreEvent {
        activity: ACTIVITY_QUIZ,
        delta: QUIZ_CORRECT_POINTS,
    })
}

/// Award for one manually added demonstration point.
pub fn visual_point_award() -> ScoreEvent {
    ScoreEvent {
        activity: ACTIVITY_VISUAL,
        delta: 1,
    }
}

/// Award for a named bulk insertion (+100, +1000, …): one point per 10
/// points added, rounded up.
pub fn visual_batch_award(count: usize) -> ScoreEvent {
    ScoreEvent {
        activity: ACTIVITY_VISUAL,
        delta: count.div_ceil(VISUAL_BATCH_DIVISOR) as i64,
    }
}

/// Rate limiter for continuous-run scoring.
///
/// A continuous simulation calls [`tick`](TickBatcher::tick) once per loop
/// pass; every tenth tick yields a +1 event. This keeps a long-running
/// simulation from flooding the ledger while staying independent of any
/// rendering loop or clock.
#[derive(Clone, Debug, Default)]
pub struct TickBatcher {
    ticks: u64,
}

impl TickBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total ticks observed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Register one tick; returns an award on every tenth.
    pub fn tick(&mut self) -> Option<ScoreEvent> {
        self.ticks += 1;
        (self.ticks % VISUAL_TICKS_PER_POINT == 0).then(visual_point_award)
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_award_flat() {
        let ev = calculator_run_award();
        assert_eq!(ev.activity, ACTIVITY_CALCULATOR);
        assert_eq!(ev.delta, 5);
    }

    #[test]
    fn test_memorization_milestones() {
        assert_eq!(memorization_award(0), None);
        assert_eq!(memorization_award(3), None);
        assert_eq!(memorization_award(12), None);
        assert_eq!(memorization_award(5).unwrap().delta, 5);
        assert_eq!(memorization_award(10).unwrap().delta, 10);
        assert_eq!(memorization_award(15).unwrap().delta, 10);
        assert_eq!(memorization_award(20).unwrap().delta, 15);
        assert_eq!(memorization_award(50).unwrap().delta, 30);
    }

    #[test]
    fn test_hint_penalty() {
        let ev = memorization_hint_penalty();
        assert_eq!(ev.activity, ACTIVITY_MEMORIZATION);
        assert_eq!(ev.delta, -1);
    }

    #[test]
    fn test_quiz_award() {
        assert_eq!(quiz_answer_award(true).unwrap().delta, 10);
        assert_eq!(quiz_answer_award(false), None);
    }

    #[test]
    fn test_visual_batch_rounds_up() {
        assert_eq!(visual_batch_award(100).delta, 10);
        assert_eq!(visual_batch_award(1000).delta, 100);
        assert_eq!(visual_batch_award(1).delta, 1);
        assert_eq!(visual_batch_award(11).delta, 2);
        assert_eq!(visual_batch_award(0).delta, 0);
    }

    #[test]
    fn test_tick_batcher_cadence() {
        let mut batcher = TickBatcher::new();
        let mut events = 0;
        for _ in 0..95 {
            if batcher.tick().is_some() {
                events += 1;
            }
        }
        assert_eq!(events, 9);
        assert_eq!(batcher.ticks(), 95);

        batcher.reset();
        assert_eq!(batcher.ticks(), 0);
        for _ in 0..9 {
            assert!(batcher.tick().is_none());
        }
        assert_eq!(batcher.tick().unwrap().delta, 1);
    }
}
