//! Simulated-clock time model and duration rendering.
//!
//! # Design
//!
//! Every event carries a `SimTime`: milliseconds on the simulation's own
//! logical clock, monotonically non-decreasing per entity.  It is unrelated
//! to wall-clock time; only the final report's "simulation real time" line
//! uses a wall clock, and that is measured by the analyzer itself.
//!
//! Using an integer millisecond count as the canonical unit means all
//! correlation arithmetic is exact (no floating-point drift) and hour
//! bucketing is a single integer division.

use std::fmt;

/// Milliseconds in one productivity hour bucket.
pub const MS_PER_HOUR: u64 = 3_600_000;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute timestamp on the simulated clock, in milliseconds.
///
/// Stored as `u64`: at millisecond resolution a u64 lasts ~585 million years
/// of simulated time, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> SimTime {
        SimTime(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }

    /// Like [`since`][Self::since], but clamps to zero when `earlier > self`.
    /// Event streams are only monotonic per entity, not globally.
    #[inline]
    pub fn saturating_since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The one-hour-wide productivity bucket containing this timestamp
    /// (truncating division).
    #[inline]
    pub fn hour_bucket(self) -> u64 {
        self.0 / MS_PER_HOUR
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Duration rendering ────────────────────────────────────────────────────────

/// Render a duration in milliseconds as zero-padded `HH:mm:ss`.
///
/// A zero duration renders as the literal `"NaN"` — the report treats
/// non-positive durations as "no data" rather than `00:00:00`.
///
/// Hours do not wrap at 24: a 25-hour duration renders `25:00:00`.  Long
/// simulation runs routinely exceed one simulated day and a wrapped hour
/// count would be ambiguous.
pub fn fmt_duration(ms: u64) -> String {
    if ms == 0 {
        return "NaN".to_owned();
    }
    let total_secs = ms / 1_000;
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// [`fmt_duration`] for fractional milliseconds (mean durations).
///
/// Non-finite or non-positive values render `"NaN"`; everything else is
/// rounded to the nearest millisecond first.
pub fn fmt_duration_f64(ms: f64) -> String {
    if !ms.is_finite() || ms <= 0.0 {
        return "NaN".to_owned();
    }
    fmt_duration(ms.round() as u64)
}
