//! `ta-trackers` — keyed-state trackers for the rust_ta analyzer.
//!
//! Each tracker exclusively owns its keyed state; no tracker reads another's
//! state.  All cross-tracker coordination happens in `ta-analyzer`'s dispatch
//! table.
//!
//! | Module           | Tracker                                             |
//! |------------------|-----------------------------------------------------|
//! | [`interval`]     | start/end correlation by entity key → durations     |
//! | [`productivity`] | boardings per (vehicle, hour bucket)                |
//! | [`path`]         | open trip sessions → finalized `VehiclePath`s       |

pub mod interval;
pub mod path;
pub mod productivity;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use interval::IntervalTracker;
pub use path::{PathSample, PathTracker, TripEnd, TripStart, VehiclePath};
pub use productivity::ProductivityCounter;
