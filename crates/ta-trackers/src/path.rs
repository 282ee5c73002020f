//! `PathTracker` — per-driver trip sessions and path reconstruction.
//!
//! # State machine
//!
//! Per driver: `Idle → Active` on trip start, `Active → Active` on each
//! position sample, `Active → Idle` on trip end.  A driver may have at most
//! one open path at a time; a second start while `Active` is a protocol
//! violation and is surfaced through [`TripStart::ReplacedOpen`] rather than
//! silently accepted.  The tracker applies a fixed recovery policy — discard
//! the old open path, keep the new one — so processing always continues.
//!
//! Position samples for agents with no open path are movement unrelated to a
//! tracked trip (idle repositioning) and are dropped without error.

use rustc_hash::FxHashMap;

use ta_core::{AgentId, NodeId, SimTime, VehicleId};

// ── Path data ─────────────────────────────────────────────────────────────────

/// One position update recorded while a trip was open.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSample {
    pub time: SimTime,
    pub node: NodeId,
}

/// The ordered sample sequence collected during one trip session.
///
/// Owned exclusively by the tracker while open; handed to processors by
/// shared reference once finalized.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehiclePath {
    pub driver: AgentId,
    pub vehicle: VehicleId,
    pub started_at: SimTime,
    pub samples: Vec<PathSample>,
}

impl VehiclePath {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Milliseconds from trip start to the last recorded sample, or 0 for an
    /// empty path.
    pub fn span_ms(&self) -> u64 {
        self.samples
            .last()
            .map(|s| s.time.saturating_since(self.started_at))
            .unwrap_or(0)
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of [`PathTracker::start_trip`].
#[derive(Debug, PartialEq, Eq)]
pub enum TripStart {
    /// No path was open for the driver; a fresh session is now open.
    Opened,
    /// The driver already had an open path — a structural inconsistency.
    /// The old path has been discarded in favour of the new session.
    ReplacedOpen,
}

/// Result of [`PathTracker::end_trip`].
#[derive(Debug)]
pub enum TripEnd {
    /// The open path had at least one sample; hand it to the processors.
    Closed(VehiclePath),
    /// The open path had no samples and was discarded.
    Empty,
    /// No path was open for the driver — a stray end, ignored.
    NotActive,
}

// ── Tracker ───────────────────────────────────────────────────────────────────

/// Tracks the currently open trip session per driver.
#[derive(Debug, Default)]
pub struct PathTracker {
    open: FxHashMap<AgentId, VehiclePath>,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a trip session for `driver`.
    pub fn start_trip(&mut self, driver: AgentId, vehicle: VehicleId, t: SimTime) -> TripStart {
        let path = VehiclePath {
            driver,
            vehicle,
            started_at: t,
            samples: Vec::new(),
        };
        match self.open.insert(driver, path) {
            None => TripStart::Opened,
            Some(_discarded) => TripStart::ReplacedOpen,
        }
    }

    /// Append a position sample to `agent`'s open path.
    ///
    /// Returns `false` (sample dropped) when the agent has no open path.
    pub fn record_sample(&mut self, agent: AgentId, t: SimTime, node: NodeId) -> bool {
        match self.open.get_mut(&agent) {
            Some(path) => {
                path.samples.push(PathSample { time: t, node });
                true
            }
            None => false,
        }
    }

    /// Close `driver`'s open path, consuming it.
    pub fn end_trip(&mut self, driver: AgentId) -> TripEnd {
        match self.open.remove(&driver) {
            Some(path) if !path.is_empty() => TripEnd::Closed(path),
            Some(_) => TripEnd::Empty,
            None => TripEnd::NotActive,
        }
    }

    /// Number of currently open trip sessions.
    pub fn open_trips(&self) -> usize {
        self.open.len()
    }
}
