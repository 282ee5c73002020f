//! CSV event-log loader.
//!
//! # CSV format
//!
//! One row per event.  The `a`/`b` columns are overloaded per kind:
//!
//! | `kind`                | `a`       | `b`     | `time`               | `node` |
//! |-----------------------|-----------|---------|----------------------|--------|
//! | `passenger_requested` | passenger | —       | earliest departure   | —      |
//! | `passenger_boarded`   | passenger | vehicle | boarding time        | —      |
//! | `passenger_alighted`  | passenger | —       | alighting time       | —      |
//! | `trip_started`        | driver    | vehicle | trip start           | —      |
//! | `trip_ended`          | driver    | —       | trip end             | —      |
//! | `position_sample`     | agent     | —       | sample time          | node   |
//! | `alg_timing`          | —         | —       | wall-clock elapsed ms| —      |
//!
//! Times are simulated-clock milliseconds.  Rows with an unknown `kind` are
//! skipped and counted, not fatal: event logs from newer simulator builds may
//! contain kinds this analyzer does not track.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ta_core::{AgentId, Event, NodeId, PassengerId, SimTime, TaError, VehicleId};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventRecord {
    kind: String,
    a: Option<u32>,
    b: Option<u32>,
    time: u64,
    node: Option<u32>,
}

/// Result of loading an event log.
#[derive(Debug)]
pub struct LoadedLog {
    pub events: Vec<Event>,
    /// Rows skipped because their `kind` was not recognized.
    pub unknown_kinds: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an event log from a CSV file.
pub fn load_events_csv(path: &Path) -> Result<LoadedLog, TaError> {
    let file = std::fs::File::open(path).map_err(TaError::Io)?;
    load_events_reader(file)
}

/// Like [`load_events_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for the embedded demo log.
pub fn load_events_reader<R: Read>(reader: R) -> Result<LoadedLog, TaError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();
    let mut unknown_kinds = 0;

    for result in csv_reader.deserialize::<EventRecord>() {
        let row = result.map_err(|e| TaError::Parse(e.to_string()))?;
        match parse_event(&row)? {
            Some(event) => events.push(event),
            None => unknown_kinds += 1,
        }
    }

    Ok(LoadedLog { events, unknown_kinds })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_event(row: &EventRecord) -> Result<Option<Event>, TaError> {
    let t = SimTime(row.time);
    let event = match row.kind.as_str() {
        "passenger_requested" => Event::PassengerRequested {
            passenger: PassengerId(require(row.a, &row.kind, "a")?),
            earliest_departure: t,
        },
        "passenger_boarded" => Event::PassengerBoarded {
            passenger: PassengerId(require(row.a, &row.kind, "a")?),
            vehicle: VehicleId(require(row.b, &row.kind, "b")?),
            time: t,
        },
        "passenger_alighted" => Event::PassengerAlighted {
            passenger: PassengerId(require(row.a, &row.kind, "a")?),
            time: t,
        },
        "trip_started" => Event::TripStarted {
            driver: AgentId(require(row.a, &row.kind, "a")?),
            vehicle: VehicleId(require(row.b, &row.kind, "b")?),
            time: t,
        },
        "trip_ended" => Event::TripEnded {
            driver: AgentId(require(row.a, &row.kind, "a")?),
            time: t,
        },
        "position_sample" => Event::PositionSample {
            agent: AgentId(require(row.a, &row.kind, "a")?),
            time: t,
            node: NodeId(require(row.node, &row.kind, "node")?),
        },
        "alg_timing" => Event::AlgTiming { elapsed_ms: row.time },
        _ => return Ok(None),
    };
    Ok(Some(event))
}

fn require(field: Option<u32>, kind: &str, name: &str) -> Result<u32, TaError> {
    field.ok_or_else(|| TaError::Parse(format!("{kind} row is missing the {name:?} column")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parses_all_known_kinds() {
        let csv = "\
kind,a,b,time,node
passenger_requested,1,,1000,
passenger_boarded,1,5,2000,
passenger_alighted,1,,3000,
trip_started,7,5,100,
position_sample,7,,150,9
trip_ended,7,,200,
alg_timing,,,42,
";
        let log = load_events_reader(Cursor::new(csv)).unwrap();
        assert_eq!(log.events.len(), 7);
        assert_eq!(log.unknown_kinds, 0);
        assert!(matches!(log.events[6], Event::AlgTiming { elapsed_ms: 42 }));
    }

    #[test]
    fn unknown_kind_skipped_and_counted() {
        let csv = "\
kind,a,b,time,node
weather_changed,,,5,
passenger_requested,1,,1000,
";
        let log = load_events_reader(Cursor::new(csv)).unwrap();
        assert_eq!(log.events.len(), 1);
        assert_eq!(log.unknown_kinds, 1);
    }

    #[test]
    fn missing_required_column_is_parse_error() {
        let csv = "\
kind,a,b,time,node
passenger_boarded,1,,2000,
";
        let err = load_events_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, TaError::Parse(_)));
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let csv = "\
kind,a,b,time,node
passenger_requested,one,,1000,
";
        let err = load_events_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, TaError::Parse(_)));
    }
}
