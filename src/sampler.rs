//! Incremental Monte Carlo accumulator for the live demonstration.
//!
//! Unlike the one-shot estimator, the demonstration adds points one at a time
//! (or in small batches) across many user interactions and keeps a bounded
//! window of recent points for drawing. The running counts cover every point
//! ever added; only the retained window is bounded.
//!
//! Points classify against the circle inscribed in the unit square (center
//! (0.5, 0.5), radius 0.5). The inside/total ratio converges to π/4 exactly
//! as the quarter-circle form does.

use std::collections::VecDeque;
use std::f64::consts::PI;

use crate::constants::VISUAL_RETAINED_POINTS;
use crate::fast_prng::SplitMix64;
use crate::types::TracePoint;

#[derive(Clone)]
pub struct SampleAccumulator {
    rng: SplitMix64,
    points: VecDeque<TracePoint>,
    inside: u64,
    total: u64,
}

impl SampleAccumulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
            points: VecDeque::with_capacity(VISUAL_RETAINED_POINTS),
            inside: 0,
            total: 0,
        }
    }

    /// Points inside the circle so far.
    pub fn inside(&self) -> u64 {
        self.inside
    }

    /// Points added so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The retained drawing window, oldest first. At most
    /// [`VISUAL_RETAINED_POINTS`] entries; older points have fallen out.
    pub fn points(&self) -> &VecDeque<TracePoint> {
        &self.points
    }

    /// Draw, classify, and record one point.
    pub fn add_point(&mut self) -> TracePoint {
        let (x, y) = self.rng.next_point();
        let dx = x - 0.5;
        let dy = y - 0.5;
        let point = TracePoint {
            x,
            y,
            inside: dx * dx + dy * dy <= 0.25,
        };

        if self.points.len() == VISUAL_RETAINED_POINTS {
            self.points.pop_front();
        }
        self.points.push_back(point);

        self.total += 1;
        if point.inside {
            self.inside += 1;
        }
        point
    }

    /// Add `count` points in one go (the +100/+1000/+10000 buttons).
    pub fn add_batch(&mut self, count: usize) {
        for _ in 0..count {
            self.add_point();
        }
    }

    /// Running estimate 4 · inside / total; 0 before the first point.
    pub fn estimate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        4.0 * self.inside as f64 / self.total as f64
    }

    /// Accuracy display value: 100 − |π − estimate| / π · 100.
    /// 0 before the first point.
    pub fn accuracy_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 - (PI - self.estimate()).abs() / PI * 100.0
    }

    /// Drop all points and counts. The RNG stream keeps advancing, so a
    /// reset run is not a replay of the previous one.
    pub fn reset(&mut self) {
        self.points.clear();
        self.inside = 0;
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator() {
        let acc = SampleAccumulator::new(1);
        assert_eq!(acc.total(), 0);
        assert_eq!(acc.estimate(), 0.0);
        assert_eq!(acc.accuracy_percent(), 0.0);
        assert!(acc.points().is_empty());
    }

    #[test]
    fn test_counts_track_points() {
        let mut acc = SampleAccumulator::new(7);
        for expected in 1..=50 {
            acc.add_point();
            assert_eq!(acc.total(), expected);
        }
        assert!(acc.inside() <= acc.total());
        assert_eq!(acc.points().len(), 50);
    }

    #[test]
    fn test_estimate_bounded() {
        let mut acc = SampleAccumulator::new(42);
        acc.add_batch(10_000);
        let est = acc.estimate();
        assert!((0.0..=4.0).contains(&est));
        // Inscribed-circle ratio is π/4, same as the quarter circle.
        assert!((est - PI).abs() < 0.1, "estimate {est} too far from π");
        assert!(acc.accuracy_percent() > 95.0);
    }

    #[test]
    fn test_window_bounded_counts_not() {
        let mut acc = SampleAccumulator::new(3);
        acc.add_batch(VISUAL_RETAINED_POINTS + 500);
        assert_eq!(acc.points().len(), VISUAL_RETAINED_POINTS);
        assert_eq!(acc.total(), (VISUAL_RETAINED_POINTS + 500) as u64);
    }

    #[test]
    fn test_window_drops_oldest() {
        let mut acc = SampleAccumulator::new(9);
        let first = acc.add_point();
        acc.add_batch(VISUAL_RETAINED_POINTS);
        assert!(acc.points().iter().all(|p| (p.x, p.y) != (first.x, first.y)));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut acc = SampleAccumulator::new(5);
        acc.add_batch(100);
        acc.reset();
        assert_eq!(acc.total(), 0);
        assert_eq!(acc.inside(), 0);
        assert_eq!(acc.estimate(), 0.0);
        assert!(acc.points().is_empty());
    }

    #[test]
    fn test_points_classified_against_inscribed_circle() {
        let mut acc = SampleAccumulator::new(11);
        acc.add_batch(1_000);
        for p in acc.points() {
            let dx = p.x - 0.5;
            let dy = p.y - 0.5;
            assert_eq!(p.inside, dx * dx + dy * dy <= 0.25);
        }
    }
}
