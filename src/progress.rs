//! Achievement levels derived from a ledger total.
//!
//! Thresholds match the dashboard: 100 / 200 / 500 / 1000, with Grand
//! Master as the 2000-point target beyond Master.

use std::fmt;

use serde::Serialize;

/// Level thresholds, ascending. The entry value is the minimum total for
/// that level.
const LEVELS: [(AchievementLevel, i64); 6] = [
    (AchievementLevel::Beginner, 0),
    (AchievementLevel::Intermediate, 100),
    (AchievementLevel::Advanced, 200),
    (AchievementLevel::Expert, 500),
    (AchievementLevel::Master, 1000),
    (AchievementLevel::GrandMaster, 2000),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AchievementLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
    GrandMaster,
}

impl AchievementLevel {
    pub fn name(self) -> &'static str {
        match self {
            AchievementLevel::Beginner => "Beginner",
            AchievementLevel::Intermediate => "Intermediate",
            AchievementLevel::Advanced => "Advanced",
            AchievementLevel::Expert => "Expert",
            AchievementLevel::Master => "Master",
            AchievementLevel::GrandMaster => "Grand Master",
        }
    }
}

impl fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The next level to reach and how far away it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NextLevel {
    pub level: AchievementLevel,
    pub required: i64,
    pub remaining: i64,
}

/// Current level for a total. Negative totals are Beginner.
pub fn level_for(total: i64) -> AchievementLevel {
    LEVELS
        .iter()
        .rev()
        .find(|&&(_, min)| total >= min)
        .map(|&(level, _)| level)
        .unwrap_or(AchievementLevel::Beginner)
}

/// Next target level. At or beyond Grand Master there is nothing further;
/// the Grand Master entry is returned with zero remaining.
pub fn next_level(total: i64) -> NextLevel {
    for &(level, min) in &LEVELS {
        if total < min {
            return NextLevel {
                level,
                required: min,
                remaining: min - total,
            };
        }
    }
    NextLevel {
        level: AchievementLevel::GrandMaster,
        required: 2000,
        remaining: 0,
    }
}

/// Progress through the current level bracket, 0–100.
pub fn progress_percent(total: i64) -> f64 {
    let total = total.max(0);
    let next = next_level(total);
    if next.remaining == 0 {
        return 100.0;
    }
    let floor = LEVELS
        .iter()
        .rev()
        .find(|&&(_, min)| total >= min)
        .map(|&(_, min)| min)
        .unwrap_or(0);
    (total - floor) as f64 / (next.required - floor) as f64 * 100.0
}
