//! `ProductivityCounter` — boardings per (vehicle, hour bucket).
//!
//! # Aggregation semantics
//!
//! The report asks: "how many passengers did a vehicle pick up per hour of
//! service?"  For each hour bucket the average divides the bucket's total
//! boardings by the number of distinct vehicles that had entered service by
//! that bucket — i.e. vehicles with any recorded boarding in that bucket or
//! an earlier one.  A vehicle idling through an hour therefore drags the
//! fleet average down; a vehicle that first appears later does not count
//! against earlier hours.
//!
//! The rendered table is contiguous from bucket 0 through the maximum
//! observed bucket; silent hours report `0`.

use rustc_hash::{FxHashMap, FxHashSet};

use ta_core::{SimTime, VehicleId};

/// Multiset of boarding events keyed by `(vehicle, hour bucket)`.
#[derive(Debug, Default)]
pub struct ProductivityCounter {
    counts: FxHashMap<(VehicleId, u64), u64>,
}

impl ProductivityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one boarding for `vehicle` in the bucket containing `time`.
    pub fn record(&mut self, vehicle: VehicleId, time: SimTime) {
        *self.counts.entry((vehicle, time.hour_bucket())).or_insert(0) += 1;
    }

    /// Average boardings per in-service vehicle for every bucket from 0
    /// through the maximum observed bucket, inclusive.
    ///
    /// Returns an empty vec when nothing was recorded.
    pub fn hourly_averages(&self) -> Vec<f64> {
        let Some(max_bucket) = self.counts.keys().map(|&(_, h)| h).max() else {
            return Vec::new();
        };

        // Total boardings per bucket, and each vehicle's first active bucket.
        let mut totals: FxHashMap<u64, u64> = FxHashMap::default();
        let mut first_seen: FxHashMap<VehicleId, u64> = FxHashMap::default();
        for (&(vehicle, bucket), &count) in &self.counts {
            *totals.entry(bucket).or_insert(0) += count;
            first_seen
                .entry(vehicle)
                .and_modify(|b| *b = (*b).min(bucket))
                .or_insert(bucket);
        }

        (0..=max_bucket)
            .map(|bucket| {
                let in_service = first_seen.values().filter(|&&b| b <= bucket).count();
                let total = totals.get(&bucket).copied().unwrap_or(0);
                if in_service == 0 || total == 0 {
                    0.0
                } else {
                    total as f64 / in_service as f64
                }
            })
            .collect()
    }

    /// Total boardings across all vehicles and buckets.
    pub fn total_boardings(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct vehicles with at least one boarding.
    pub fn vehicle_count(&self) -> usize {
        let vehicles: FxHashSet<VehicleId> = self.counts.keys().map(|&(v, _)| v).collect();
        vehicles.len()
    }
}
