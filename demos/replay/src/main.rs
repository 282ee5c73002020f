//! replay — feed a recorded event log through the rust_ta analyzer.
//!
//! Usage:
//!
//! ```text
//! replay [EVENT_CSV] [REPORT_PATH]
//! ```
//!
//! With no arguments a small embedded demo log is replayed: two vehicles
//! serving four passengers over three simulated hours.  Output lands in
//! `output/replay/` (report + path-sample dump).

mod loader;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ta_analyzer::{AnalyzerConfig, CsvPathProcessor, PathStatsProcessor, TelemetryAnalyzer};

use loader::{load_events_csv, load_events_reader, LoadedLog};

// ── Embedded demo log ─────────────────────────────────────────────────────────

// Two drivers (agents 100, 101) in vehicles 1 and 2.  Passengers 0–3.
// Times in simulated ms; hour buckets 0 and 2 have boardings, hour 1 is idle.
const DEMO_LOG_CSV: &str = "\
kind,a,b,time,node
passenger_requested,0,,60000,
passenger_requested,1,,120000,
trip_started,100,1,100000,
position_sample,100,,150000,11
passenger_boarded,0,1,300000,
position_sample,100,,400000,12
passenger_boarded,1,1,500000,
position_sample,100,,800000,13
passenger_alighted,0,,900000,
passenger_alighted,1,,1100000,
trip_ended,100,,1200000,
passenger_requested,2,,7200000,
passenger_requested,3,,7300000,
trip_started,101,2,7200000,
position_sample,101,,7260000,21
passenger_boarded,2,2,7500000,
passenger_boarded,3,2,7600000,
position_sample,101,,7800000,22
passenger_alighted,2,,8100000,
passenger_alighted,3,,8400000,
trip_ended,101,,8500000,
alg_timing,,,1500,
alg_timing,,,2500,
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        // The report is printed below; default to warn so it is not logged twice.
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args = std::env::args().skip(1);
    let event_path = args.next().map(PathBuf::from);
    let report_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output/replay/result.txt"));

    // 1. Load the event log.
    let t0 = Instant::now();
    let LoadedLog { events, unknown_kinds } = match &event_path {
        Some(path) => {
            println!("Loading event log from {}", path.display());
            load_events_csv(path)?
        }
        None => {
            println!("No event log given — replaying the embedded demo log");
            load_events_reader(Cursor::new(DEMO_LOG_CSV))?
        }
    };
    println!("Loaded {} events ({unknown_kinds} unknown kinds skipped)", events.len());

    // 2. Set up the analyzer with both built-in processors.
    if let Some(dir) = report_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let paths_csv = report_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("paths.csv");

    let mut analyzer = TelemetryAnalyzer::with_start(
        AnalyzerConfig::with_report_path(&report_path),
        t0,
    );
    analyzer.add_processor(Box::new(PathStatsProcessor::new()));
    analyzer.add_processor(Box::new(CsvPathProcessor::create(&paths_csv)?));

    // 3. Replay.
    for event in events {
        analyzer.handle(event);
    }
    if analyzer.open_trips() > 0 {
        println!("Warning: {} trip(s) still open at end of log", analyzer.open_trips());
    }

    // 4. Report.
    let report = analyzer.finalize();
    println!("{report}");
    println!("Report written to {}", report_path.display());
    println!("Path samples written to {}", paths_csv.display());

    Ok(())
}
