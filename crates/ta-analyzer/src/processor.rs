//! `PathProcessor` — pluggable consumers of finalized vehicle paths.
//!
//! Processors are mutually independent: the analyzer invokes `consume` on
//! every registered processor in registration order and isolates failures per
//! processor, so one misbehaving processor cannot starve the others.
//! Register processors before the first trip ends; later registration only
//! sees paths finalized after it.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use ta_core::fmt_duration_f64;
use ta_trackers::VehiclePath;

use crate::error::ProcessorResult;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// An independent consumer of finalized, non-empty vehicle paths.
pub trait PathProcessor {
    /// Short identifier used in logs when a `consume` call fails.
    fn name(&self) -> &str;

    /// Observe one finalized path.  Called once per path, in finalization
    /// order.  Errors are logged by the analyzer and do not stop dispatch.
    fn consume(&mut self, path: &VehiclePath) -> ProcessorResult<()>;

    /// Render this processor's contribution to the final report.
    ///
    /// Callable only after all input is consumed; must be idempotent.
    fn summarize(&self) -> String;
}

/// A [`PathProcessor`] that does nothing and contributes nothing.
pub struct NoopProcessor;

impl PathProcessor for NoopProcessor {
    fn name(&self) -> &str {
        "noop"
    }

    fn consume(&mut self, _path: &VehiclePath) -> ProcessorResult<()> {
        Ok(())
    }

    fn summarize(&self) -> String {
        String::new()
    }
}

// ── PathStatsProcessor ────────────────────────────────────────────────────────

/// Aggregates path counts, sample counts, and trip spans.
#[derive(Debug, Default)]
pub struct PathStatsProcessor {
    paths: u64,
    samples: u64,
    span_ms_total: u64,
}

impl PathStatsProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths_seen(&self) -> u64 {
        self.paths
    }
}

impl PathProcessor for PathStatsProcessor {
    fn name(&self) -> &str {
        "path-stats"
    }

    fn consume(&mut self, path: &VehiclePath) -> ProcessorResult<()> {
        self.paths += 1;
        self.samples += path.len() as u64;
        self.span_ms_total += path.span_ms();
        Ok(())
    }

    fn summarize(&self) -> String {
        if self.paths == 0 {
            return "Vehicle paths processed : 0".to_owned();
        }
        let avg_samples = self.samples as f64 / self.paths as f64;
        let avg_span = self.span_ms_total as f64 / self.paths as f64;
        format!(
            "Vehicle paths processed : {}\n\
             Avg. samples per path : {avg_samples:.1}\n\
             Avg. trip span : {}",
            self.paths,
            fmt_duration_f64(avg_span),
        )
    }
}

// ── CsvPathProcessor ──────────────────────────────────────────────────────────

/// Dumps every path sample to a CSV file, one row per sample.
///
/// Columns: `driver_id,vehicle_id,trip_started_ms,sample_ms,node_id`.
/// The writer is flushed after every path so a crash mid-run loses at most
/// the path currently being written.
pub struct CsvPathProcessor {
    writer: Writer<File>,
    path: PathBuf,
    rows: u64,
}

impl CsvPathProcessor {
    /// Create (or truncate) the sample file at `path` and write the header.
    pub fn create(path: &Path) -> ProcessorResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["driver_id", "vehicle_id", "trip_started_ms", "sample_ms", "node_id"])?;
        writer.flush()?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows: 0,
        })
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }
}

impl PathProcessor for CsvPathProcessor {
    fn name(&self) -> &str {
        "csv-path-dump"
    }

    fn consume(&mut self, path: &VehiclePath) -> ProcessorResult<()> {
        for sample in &path.samples {
            self.writer.write_record(&[
                path.driver.0.to_string(),
                path.vehicle.0.to_string(),
                path.started_at.0.to_string(),
                sample.time.0.to_string(),
                sample.node.0.to_string(),
            ])?;
        }
        self.writer.flush()?;
        self.rows += path.len() as u64;
        Ok(())
    }

    fn summarize(&self) -> String {
        format!(
            "Path samples written to {} : {} rows",
            self.path.display(),
            self.rows
        )
    }
}
