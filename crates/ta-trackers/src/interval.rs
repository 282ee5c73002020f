//! `IntervalTracker` — start/end event correlation by entity key.
//!
//! # Why this exists
//!
//! The analyzer never knows in advance how many entities exist or when they
//! will complete.  The tracker holds one open start per key and converts each
//! matching end into a completed duration; order statistics are computed
//! lazily at report time.
//!
//! # Correlation leniency
//!
//! A new start overwrites any prior unmatched start for the same key
//! (last-start-wins).  An end with no matching open start is dropped and
//! counted — never an error.  Simulation log streams from long runs cannot be
//! assumed perfectly well-formed; the analyzer's strict mode surfaces the
//! counter, it does not change behavior here.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use ta_core::SimTime;

/// Correlates `open(key, t)` / `close(key, t)` pairs and aggregates the
/// elapsed durations.
///
/// At most one open interval per key at a time.  Completed durations are kept
/// unordered; [`median`][Self::median] sorts a copy at query time.
#[derive(Debug, Default)]
pub struct IntervalTracker<K: Copy + Eq + Hash> {
    open: FxHashMap<K, SimTime>,
    completed: Vec<u64>,
    unmatched_closes: u64,
}

impl<K: Copy + Eq + Hash> IntervalTracker<K> {
    pub fn new() -> Self {
        Self {
            open: FxHashMap::default(),
            completed: Vec::new(),
            unmatched_closes: 0,
        }
    }

    /// Record (or overwrite) the start timestamp for `key`.
    pub fn open(&mut self, key: K, t: SimTime) {
        self.open.insert(key, t);
    }

    /// Close the open interval for `key` at `t`.
    ///
    /// Returns `true` and appends `t - start` (clamped to zero) to the
    /// completed set when an open start exists; returns `false` and bumps the
    /// unmatched counter otherwise.
    pub fn close(&mut self, key: K, t: SimTime) -> bool {
        match self.open.remove(&key) {
            Some(start) => {
                self.completed.push(t.saturating_since(start));
                true
            }
            None => {
                self.unmatched_closes += 1;
                false
            }
        }
    }

    // ── Query operations — valid once all input has been consumed ────────

    /// Arithmetic mean of completed durations, or `None` if none completed.
    pub fn mean(&self) -> Option<f64> {
        if self.completed.is_empty() {
            return None;
        }
        let sum: u64 = self.completed.iter().sum();
        Some(sum as f64 / self.completed.len() as f64)
    }

    /// Maximum completed duration, or `None` if none completed.
    pub fn max(&self) -> Option<u64> {
        self.completed.iter().copied().max()
    }

    /// Lower median of the completed durations: `sorted[(n - 1) / 2]`.
    ///
    /// For an even count this returns the lower of the two middle elements —
    /// always an observed value, never an interpolated one.
    pub fn median(&self) -> Option<u64> {
        if self.completed.is_empty() {
            return None;
        }
        let mut sorted = self.completed.clone();
        sorted.sort_unstable();
        Some(sorted[(sorted.len() - 1) / 2])
    }

    /// Number of completed intervals.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Number of keys with an open, unmatched start.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Number of `close` calls that found no open start.
    pub fn unmatched_closes(&self) -> u64 {
        self.unmatched_closes
    }
}
