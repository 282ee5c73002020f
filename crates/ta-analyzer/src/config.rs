//! Analyzer configuration.

use std::path::PathBuf;

/// How the analyzer treats correlation inconsistencies (unmatched interval
/// ends, concurrent trip starts, stray trip ends).
///
/// Aggregates are identical in both modes; strict mode only changes
/// visibility.  `Lenient` matches the historical behavior of the testbed
/// analyzer and is the default.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum CorrelationMode {
    /// Drop inconsistent events silently (counted, but not logged and not
    /// included in the report).
    #[default]
    Lenient,
    /// Log each inconsistency at `warn` and append a diagnostics block to
    /// the report.
    Strict,
}

/// Top-level analyzer configuration.
#[derive(Clone, Debug, Default)]
pub struct AnalyzerConfig {
    /// Where to write the final report.  `None` skips the file write; the
    /// report is always logged and returned either way.
    pub report_path: Option<PathBuf>,

    /// Correlation-inconsistency handling.  Default: lenient.
    pub mode: CorrelationMode,
}

impl AnalyzerConfig {
    /// Lenient config writing the report to `path`.
    pub fn with_report_path(path: impl Into<PathBuf>) -> Self {
        Self {
            report_path: Some(path.into()),
            mode: CorrelationMode::Lenient,
        }
    }

    #[inline]
    pub fn strict(&self) -> bool {
        self.mode == CorrelationMode::Strict
    }
}
