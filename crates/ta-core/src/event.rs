//! The telemetry event union.
//!
//! The simulation publishes one event per observable fact; the analyzer
//! consumes them in arrival order.  A single tagged union (rather than one
//! handler registration per event class) keeps the dispatch contract
//! statically checkable: adding a variant forces every `match` to be
//! revisited.

use std::fmt;

use crate::ids::{AgentId, NodeId, PassengerId, VehicleId};
use crate::time::SimTime;

/// One timestamped fact emitted by the running simulation.
///
/// All timestamps are simulated-clock milliseconds, monotonically
/// non-decreasing per entity.  `AlgTiming` is the exception: it carries
/// wall-clock milliseconds spent inside one dispatch-algorithm invocation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A passenger asked for a ride.  Opens the wait and travel intervals.
    PassengerRequested {
        passenger: PassengerId,
        earliest_departure: SimTime,
    },
    /// A passenger boarded a vehicle.  Closes wait, opens on-board, and
    /// counts toward the vehicle's hourly productivity.
    PassengerBoarded {
        passenger: PassengerId,
        vehicle: VehicleId,
        time: SimTime,
    },
    /// A passenger left the vehicle.  Closes on-board and travel.
    PassengerAlighted { passenger: PassengerId, time: SimTime },
    /// A driver started a trip.  Opens a path session for the driver.
    TripStarted {
        driver: AgentId,
        vehicle: VehicleId,
        time: SimTime,
    },
    /// A driver finished a trip.  Finalizes the open path session.
    TripEnded { driver: AgentId, time: SimTime },
    /// A movement sample for an agent.  Appended to the agent's open path
    /// session, if any; dropped otherwise.
    PositionSample {
        agent: AgentId,
        time: SimTime,
        node: NodeId,
    },
    /// Wall-clock time one dispatch-algorithm invocation took.
    AlgTiming { elapsed_ms: u64 },
}

impl Event {
    /// The fieldless discriminant, for diagnostics counters and logging.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::PassengerRequested { .. } => EventKind::PassengerRequested,
            Event::PassengerBoarded { .. } => EventKind::PassengerBoarded,
            Event::PassengerAlighted { .. } => EventKind::PassengerAlighted,
            Event::TripStarted { .. } => EventKind::TripStarted,
            Event::TripEnded { .. } => EventKind::TripEnded,
            Event::PositionSample { .. } => EventKind::PositionSample,
            Event::AlgTiming { .. } => EventKind::AlgTiming,
        }
    }
}

/// Discriminant of [`Event`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    PassengerRequested,
    PassengerBoarded,
    PassengerAlighted,
    TripStarted,
    TripEnded,
    PositionSample,
    AlgTiming,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::PassengerRequested => "passenger_requested",
            EventKind::PassengerBoarded => "passenger_boarded",
            EventKind::PassengerAlighted => "passenger_alighted",
            EventKind::TripStarted => "trip_started",
            EventKind::TripEnded => "trip_ended",
            EventKind::PositionSample => "position_sample",
            EventKind::AlgTiming => "alg_timing",
        };
        f.write_str(s)
    }
}
