//! Report snapshot and fixed-layout text rendering.
//!
//! `ReportSnapshot` is plain data built once at finalize time and never
//! mutated afterwards; `render` is a pure function over it.  The layout and
//! wording are the compatibility surface of the analyzer — downstream
//! benchmark tooling greps these lines.

use std::fmt::Write as _;

use ta_core::{fmt_duration, fmt_duration_f64};

use crate::analyzer::Diagnostics;

/// Mean/max/median of one interval tracker, in milliseconds.
///
/// `None` means no interval completed; rendered as `NaN`.
#[derive(Clone, Debug, Default)]
pub struct IntervalSummary {
    pub mean_ms: Option<f64>,
    pub max_ms: Option<u64>,
    pub median_ms: Option<u64>,
}

impl IntervalSummary {
    fn mean_text(&self) -> String {
        self.mean_ms.map(fmt_duration_f64).unwrap_or_else(|| "NaN".to_owned())
    }

    fn max_text(&self) -> String {
        self.max_ms.map(fmt_duration).unwrap_or_else(|| "NaN".to_owned())
    }

    fn median_text(&self) -> String {
        self.median_ms.map(fmt_duration).unwrap_or_else(|| "NaN".to_owned())
    }
}

/// Everything the report needs, frozen at finalize time.
#[derive(Clone, Debug)]
pub struct ReportSnapshot {
    /// Request → alighting.
    pub travel: IntervalSummary,
    /// Boarding → alighting.
    pub on_board: IntervalSummary,
    /// Request → boarding.
    pub wait: IntervalSummary,
    /// One rendered block per processor, in registration order.
    pub processor_summaries: Vec<String>,
    /// Cumulative wall-clock milliseconds spent in the dispatch algorithm.
    pub alg_time_ms: u64,
    /// Wall-clock milliseconds since the analyzer was constructed.
    pub wall_elapsed_ms: u64,
    /// Average boardings per in-service vehicle, indexed by hour bucket.
    /// Empty when no boardings were recorded (block omitted).
    pub hourly_productivity: Vec<f64>,
    /// Inconsistency counters; rendered only when `show_diagnostics`.
    pub diagnostics: Diagnostics,
    pub show_diagnostics: bool,
}

impl ReportSnapshot {
    /// Render the fixed-layout report text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push('\n');
        line(&mut out, "------ Simulation result -----------");
        line(&mut out, &format!("Average passenger travel time is :{}", self.travel.mean_text()));
        line(&mut out, &format!("Max passenger travel time is :{}", self.travel.max_text()));
        line(&mut out, &format!("Median passenger travel time is :{}", self.travel.median_text()));
        line(&mut out, &format!("Average passenger ride time (on-board) is :{}", self.on_board.mean_text()));
        line(&mut out, &format!("Max passenger ride time (on-board) is :{}", self.on_board.max_text()));
        line(&mut out, &format!("Median passenger ride time (on-board) is :{}", self.on_board.median_text()));
        line(&mut out, &format!("Average passenger wait time is :{}", self.wait.mean_text()));
        line(&mut out, &format!("Max passenger wait time is :{}", self.wait.max_text()));
        line(&mut out, &format!("Median passenger wait time is :{}", self.wait.median_text()));

        for summary in &self.processor_summaries {
            if !summary.is_empty() {
                line(&mut out, summary);
            }
        }

        line(&mut out, &format!("Alg. real time :{}", fmt_duration(self.alg_time_ms)));
        line(&mut out, &format!("Simulation real time :{}", fmt_duration(self.wall_elapsed_ms)));

        for (hour, avg) in self.hourly_productivity.iter().enumerate() {
            line(
                &mut out,
                &format!("Hour - {hour} : avg. passengers per vehicle hour - {avg}"),
            );
        }

        if self.show_diagnostics {
            let d = &self.diagnostics;
            line(&mut out, "Diagnostics:");
            line(&mut out, &format!("  unmatched interval ends : {}", d.unmatched_closes));
            line(&mut out, &format!("  concurrent trip starts : {}", d.concurrent_trips));
            line(&mut out, &format!("  stray trip ends : {}", d.stray_trip_ends));
            line(&mut out, &format!("  dropped position samples : {}", d.dropped_samples));
            line(&mut out, &format!("  processor failures : {}", d.processor_failures));
        }

        out
    }
}

fn line(out: &mut String, text: &str) {
    // String's fmt::Write never fails.
    let _ = writeln!(out, "{text}");
}
