//! `ta-core` — foundational types for the `rust_ta` telemetry analyzer.
//!
//! This crate is a dependency of every other `ta-*` crate.  It intentionally
//! has no `ta-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `PassengerId`, `AgentId`, `VehicleId`, `NodeId`         |
//! | [`time`]  | `SimTime`, `MS_PER_HOUR`, `fmt_duration`                |
//! | [`event`] | `Event` tagged union, `EventKind`                       |
//! | [`error`] | `TaError`, `TaResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod event;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TaError, TaResult};
pub use event::{Event, EventKind};
pub use ids::{AgentId, NodeId, PassengerId, VehicleId};
pub use time::{fmt_duration, fmt_duration_f64, SimTime, MS_PER_HOUR};
