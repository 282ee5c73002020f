//! `ta-analyzer` — event dispatch and report assembly for rust_ta.
//!
//! # Data flow
//!
//! ```text
//! simulation → Event stream → TelemetryAnalyzer::handle
//!   PassengerRequested → wait.open, travel.open
//!   PassengerBoarded   → productivity.record, wait.close, on_board.open
//!   PassengerAlighted  → on_board.close, travel.close
//!   TripStarted        → paths.start_trip
//!   TripEnded          → paths.end_trip → every PathProcessor::consume
//!   PositionSample     → paths.record_sample
//!   AlgTiming          → cumulative algorithm-time sum
//! ...stream exhausted...
//! TelemetryAnalyzer::finalize → ReportSnapshot::render → log + file
//! ```
//!
//! The analyzer is a passive sink: it is handed events one at a time and
//! never influences the simulation.  Dispatch is single-threaded and
//! synchronous; hosts with concurrent producers serialize around `handle`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ta_analyzer::{AnalyzerConfig, PathStatsProcessor, TelemetryAnalyzer};
//!
//! let mut analyzer = TelemetryAnalyzer::new(AnalyzerConfig::default());
//! analyzer.add_processor(Box::new(PathStatsProcessor::new()));
//! for event in events {
//!     analyzer.handle(event);
//! }
//! let report = analyzer.finalize();
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod processor;
pub mod report;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use analyzer::{Diagnostics, TelemetryAnalyzer};
pub use config::{AnalyzerConfig, CorrelationMode};
pub use error::{ProcessorError, ProcessorResult};
pub use processor::{CsvPathProcessor, NoopProcessor, PathProcessor, PathStatsProcessor};
pub use report::{IntervalSummary, ReportSnapshot};
