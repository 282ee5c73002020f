//! `TelemetryAnalyzer` — the dispatcher/aggregator composition root.
//!
//! Owns the three interval trackers, the productivity counter, the path
//! tracker, and the processor chain.  `handle` performs a pure
//! type-and-field dispatch; no event type triggers more than the documented
//! tracker calls.  `finalize` assembles and emits the report.

use std::time::Instant;

use tracing::{debug, info, warn};

use ta_core::{Event, PassengerId};
use ta_trackers::{IntervalTracker, PathTracker, ProductivityCounter, TripEnd, TripStart, VehiclePath};

use crate::config::AnalyzerConfig;
use crate::processor::PathProcessor;
use crate::report::{IntervalSummary, ReportSnapshot};

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Counters for every event the analyzer dropped or had to recover from.
///
/// None of these are fatal; they exist so long-run log streams with upstream
/// bugs are visible instead of silently mis-aggregated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Interval ends (boarding/alighting) with no matching open start,
    /// summed across the wait, on-board, and travel trackers.
    pub unmatched_closes: u64,
    /// Trip starts for a driver that already had an open path.
    pub concurrent_trips: u64,
    /// Trip ends for a driver with no open path.
    pub stray_trip_ends: u64,
    /// Position samples for agents with no open path.
    pub dropped_samples: u64,
    /// Failed `consume` calls, across all processors.
    pub processor_failures: u64,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

// ── TelemetryAnalyzer ─────────────────────────────────────────────────────────

/// Consumes the simulation's event stream and produces the final report.
///
/// Construction captures the wall clock; the report's "Simulation real time"
/// line measures from that instant to `finalize`.
pub struct TelemetryAnalyzer {
    config: AnalyzerConfig,

    /// Request → boarding.
    wait: IntervalTracker<PassengerId>,
    /// Boarding → alighting.
    on_board: IntervalTracker<PassengerId>,
    /// Request → alighting.
    travel: IntervalTracker<PassengerId>,

    productivity: ProductivityCounter,
    paths: PathTracker,
    processors: Vec<Box<dyn PathProcessor>>,

    /// Cumulative wall-clock ms reported by `AlgTiming` events.
    alg_time_ms: u64,
    run_started: Instant,

    concurrent_trips: u64,
    stray_trip_ends: u64,
    dropped_samples: u64,
    processor_failures: u64,
}

impl TelemetryAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_start(config, Instant::now())
    }

    /// Like [`new`][Self::new] with an explicit run-start instant, for hosts
    /// that construct the analyzer after the simulation has already begun.
    pub fn with_start(config: AnalyzerConfig, run_started: Instant) -> Self {
        Self {
            config,
            wait: IntervalTracker::new(),
            on_board: IntervalTracker::new(),
            travel: IntervalTracker::new(),
            productivity: ProductivityCounter::new(),
            paths: PathTracker::new(),
            processors: Vec::new(),
            alg_time_ms: 0,
            run_started,
            concurrent_trips: 0,
            stray_trip_ends: 0,
            dropped_samples: 0,
            processor_failures: 0,
        }
    }

    /// Register a path processor.  Register before the first `TripEnded`
    /// event for full coverage; later registration only sees later paths.
    pub fn add_processor(&mut self, processor: Box<dyn PathProcessor>) {
        self.processors.push(processor);
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Route one event to the relevant tracker(s).
    ///
    /// Synchronous: the call fully completes before the next event is
    /// accepted.  Never fails; inconsistent events are counted and, in
    /// strict mode, logged.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::PassengerRequested { passenger, earliest_departure } => {
                self.wait.open(passenger, earliest_departure);
                self.travel.open(passenger, earliest_departure);
            }

            // Closes wait and opens on-board back-to-back: no intermediate
            // state is observable between the two trackers.
            Event::PassengerBoarded { passenger, vehicle, time } => {
                self.productivity.record(vehicle, time);
                if !self.wait.close(passenger, time) && self.config.strict() {
                    warn!(%passenger, "boarding without a matching request");
                }
                self.on_board.open(passenger, time);
            }

            Event::PassengerAlighted { passenger, time } => {
                let on_board_ok = self.on_board.close(passenger, time);
                let travel_ok = self.travel.close(passenger, time);
                if !(on_board_ok && travel_ok) && self.config.strict() {
                    warn!(%passenger, "alighting without a matching boarding or request");
                }
            }

            Event::TripStarted { driver, vehicle, time } => {
                if self.paths.start_trip(driver, vehicle, time) == TripStart::ReplacedOpen {
                    self.concurrent_trips += 1;
                    warn!(%driver, "trip started while a trip was already open; previous path discarded");
                }
            }

            Event::TripEnded { driver, time: _ } => match self.paths.end_trip(driver) {
                TripEnd::Closed(path) => self.dispatch_path(&path),
                TripEnd::Empty => {}
                TripEnd::NotActive => {
                    self.stray_trip_ends += 1;
                    warn!(%driver, "trip ended with no open trip; ignored");
                }
            },

            Event::PositionSample { agent, time, node } => {
                if !self.paths.record_sample(agent, time, node) {
                    self.dropped_samples += 1;
                    debug!(%agent, "position sample outside any trip session; dropped");
                }
            }

            Event::AlgTiming { elapsed_ms } => {
                self.alg_time_ms += elapsed_ms;
            }
        }
    }

    /// Hand one finalized path to every processor, isolating failures.
    fn dispatch_path(&mut self, path: &VehiclePath) {
        for processor in &mut self.processors {
            if let Err(e) = processor.consume(path) {
                self.processor_failures += 1;
                warn!(processor = processor.name(), error = %e, "path processor failed; continuing");
            }
        }
    }

    // ── Finalization ──────────────────────────────────────────────────────

    /// Aggregate the current tracker state into a report snapshot.
    ///
    /// Valid at any point; called before the stream is exhausted it reflects
    /// the partial input seen so far.
    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot {
            travel: summary(&self.travel),
            on_board: summary(&self.on_board),
            wait: summary(&self.wait),
            processor_summaries: self.processors.iter().map(|p| p.summarize()).collect(),
            alg_time_ms: self.alg_time_ms,
            wall_elapsed_ms: self.run_started.elapsed().as_millis() as u64,
            hourly_productivity: self.productivity.hourly_averages(),
            diagnostics: self.diagnostics(),
            show_diagnostics: self.config.strict(),
        }
    }

    /// Render the report, log it, write it to the configured path, and
    /// return it.
    ///
    /// A file-write failure is logged and swallowed: the report text is
    /// still returned and remains available to the caller.
    pub fn finalize(&mut self) -> String {
        let text = self.snapshot().render();
        info!("{text}");

        if let Some(path) = &self.config.report_path {
            if let Err(e) = std::fs::write(path, &text) {
                warn!(path = %path.display(), error = %e, "failed to write report file");
            }
        }

        text
    }

    /// Inconsistency counters accumulated so far.
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            unmatched_closes: self.wait.unmatched_closes()
                + self.on_board.unmatched_closes()
                + self.travel.unmatched_closes(),
            concurrent_trips: self.concurrent_trips,
            stray_trip_ends: self.stray_trip_ends,
            dropped_samples: self.dropped_samples,
            processor_failures: self.processor_failures,
        }
    }

    /// Trips still open (no `TripEnded` seen).  Useful for end-of-stream
    /// sanity checks in hosts and tests.
    pub fn open_trips(&self) -> usize {
        self.paths.open_trips()
    }
}

fn summary(tracker: &IntervalTracker<PassengerId>) -> IntervalSummary {
    IntervalSummary {
        mean_ms: tracker.mean(),
        max_ms: tracker.max(),
        median_ms: tracker.median(),
    }
}
