//! Product constants: iteration bounds, the canonical digit string, activity
//! names, and point values.
//!
//! Point values and thresholds mirror the live site exactly; changing any of
//! them changes user-visible scoring.

/// Default ceiling on `iterations` per estimation call. Bounds worst-case
/// synchronous compute time; requests above it are rejected, not truncated.
pub const MAX_ITERATIONS: u64 = 10_000_000;

/// Default cap on retained trace points per Monte Carlo run. Bounds memory
/// and canvas render cost independent of the iteration count.
pub const MAX_TRACE_POINTS: usize = 5_000;

/// Canonical π digit string: "3." plus the first 100 decimal digits.
/// The memorization trainer matches typed input against this exact text,
/// decimal point included.
pub const PI_DIGITS: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Activity keys as the ledger stores them.
pub const ACTIVITY_CALCULATOR: &str = "Pi Calculator";
pub const ACTIVITY_MEMORIZATION: &str = "Pi Memorization";
pub const ACTIVITY_QUIZ: &str = "Pi Quiz";
pub const ACTIVITY_VISUAL: &str = "Visual Demonstrations";

/// Flat award per successful calculator run.
pub const CALCULATOR_RUN_POINTS: i64 = 5;

/// Award per correctly answered quiz question. Wrong answers cost nothing.
pub const QUIZ_CORRECT_POINTS: i64 = 10;

/// Base award at each memorization milestone; multiplied by the level
/// factor `digits/10 + 1`.
pub const MEMORIZATION_BASE_POINTS: i64 = 5;

/// Milestone spacing: an award is due every this many correct characters.
pub const MEMORIZATION_AWARD_STEP: usize = 5;

/// Penalty for revealing the next digit in challenge mode.
pub const MEMORIZATION_HINT_PENALTY: i64 = -1;

/// Continuous-run scoring cadence: one +1 event per this many ticks.
pub const VISUAL_TICKS_PER_POINT: u64 = 10;

/// Bulk point insertion awards `ceil(count / this)`.
pub const VISUAL_BATCH_DIVISOR: usize = 10;

/// Retained-point window for the live demonstration canvas. Older points
/// fall out of the window; the running counts are unaffected.
pub const VISUAL_RETAINED_POINTS: usize = 2_000;
