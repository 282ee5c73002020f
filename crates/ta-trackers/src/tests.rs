//! Unit tests for the ta-trackers leaves.

#[cfg(test)]
mod interval {
    use ta_core::{PassengerId, SimTime};

    use crate::IntervalTracker;

    fn t(ms: u64) -> SimTime {
        SimTime(ms)
    }

    #[test]
    fn paired_events_yield_exact_stats() {
        let mut tracker = IntervalTracker::new();
        // Durations: 100, 300, 200.
        tracker.open(PassengerId(0), t(0));
        tracker.close(PassengerId(0), t(100));
        tracker.open(PassengerId(1), t(50));
        tracker.close(PassengerId(1), t(350));
        tracker.open(PassengerId(2), t(500));
        tracker.close(PassengerId(2), t(700));

        assert_eq!(tracker.completed_count(), 3);
        assert_eq!(tracker.mean(), Some(200.0));
        assert_eq!(tracker.max(), Some(300));
        assert_eq!(tracker.median(), Some(200));
    }

    #[test]
    fn empty_tracker_returns_undefined() {
        let tracker: IntervalTracker<PassengerId> = IntervalTracker::new();
        assert_eq!(tracker.mean(), None);
        assert_eq!(tracker.max(), None);
        assert_eq!(tracker.median(), None);
    }

    #[test]
    fn even_count_median_is_lower_middle() {
        let mut tracker = IntervalTracker::new();
        for (i, dur) in [400u64, 100, 300, 200].iter().enumerate() {
            tracker.open(PassengerId(i as u32), t(0));
            tracker.close(PassengerId(i as u32), t(*dur));
        }
        // Sorted: 100 200 300 400 → lower median = 200.
        assert_eq!(tracker.median(), Some(200));
    }

    #[test]
    fn last_start_wins() {
        let mut tracker = IntervalTracker::new();
        tracker.open(PassengerId(1), t(0));
        tracker.open(PassengerId(1), t(500)); // overwrites
        assert!(tracker.close(PassengerId(1), t(800)));
        assert_eq!(tracker.max(), Some(300));
    }

    #[test]
    fn unmatched_close_is_counted_not_recorded() {
        let mut tracker: IntervalTracker<PassengerId> = IntervalTracker::new();
        assert!(!tracker.close(PassengerId(9), t(100)));
        assert_eq!(tracker.completed_count(), 0);
        assert_eq!(tracker.unmatched_closes(), 1);
    }

    #[test]
    fn close_removes_open_entry() {
        let mut tracker = IntervalTracker::new();
        tracker.open(PassengerId(1), t(0));
        assert_eq!(tracker.open_count(), 1);
        tracker.close(PassengerId(1), t(10));
        assert_eq!(tracker.open_count(), 0);
        // A second close for the same key is now unmatched.
        assert!(!tracker.close(PassengerId(1), t(20)));
    }

    #[test]
    fn end_before_start_clamps_to_zero() {
        let mut tracker = IntervalTracker::new();
        tracker.open(PassengerId(1), t(1_000));
        tracker.close(PassengerId(1), t(500));
        assert_eq!(tracker.max(), Some(0));
    }
}

#[cfg(test)]
mod productivity {
    use ta_core::{SimTime, VehicleId, MS_PER_HOUR};

    use crate::ProductivityCounter;

    fn at_hour(h: u64) -> SimTime {
        SimTime(h * MS_PER_HOUR + 1)
    }

    #[test]
    fn gap_hours_render_zero() {
        let mut counter = ProductivityCounter::new();
        // Bucket 0: 3 boardings for v1; bucket 2: 1 boarding for v1.
        for _ in 0..3 {
            counter.record(VehicleId(1), at_hour(0));
        }
        counter.record(VehicleId(1), at_hour(2));

        let averages = counter.hourly_averages();
        assert_eq!(averages.len(), 3, "buckets 0..=2 must all be present");
        assert_eq!(averages[0], 3.0);
        assert_eq!(averages[1], 0.0);
        assert_eq!(averages[2], 1.0);
    }

    #[test]
    fn denominator_counts_vehicles_in_service() {
        let mut counter = ProductivityCounter::new();
        // v1 enters service in bucket 0; v2 only in bucket 2.
        for _ in 0..3 {
            counter.record(VehicleId(1), at_hour(0));
        }
        counter.record(VehicleId(2), at_hour(2));

        let averages = counter.hourly_averages();
        // Bucket 0: only v1 in service → 3/1.
        assert_eq!(averages[0], 3.0);
        // Bucket 2: v1 (since bucket 0) and v2 → 1 boarding / 2 vehicles.
        assert_eq!(averages[2], 0.5);
    }

    #[test]
    fn empty_counter_is_empty_table() {
        let counter = ProductivityCounter::new();
        assert!(counter.hourly_averages().is_empty());
        assert_eq!(counter.total_boardings(), 0);
        assert_eq!(counter.vehicle_count(), 0);
    }

    #[test]
    fn boundary_timestamp_falls_in_next_bucket() {
        let mut counter = ProductivityCounter::new();
        counter.record(VehicleId(1), SimTime(MS_PER_HOUR));
        let averages = counter.hourly_averages();
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0], 0.0);
        assert_eq!(averages[1], 1.0);
    }

    #[test]
    fn totals_and_vehicle_count() {
        let mut counter = ProductivityCounter::new();
        counter.record(VehicleId(1), at_hour(0));
        counter.record(VehicleId(1), at_hour(0));
        counter.record(VehicleId(2), at_hour(1));
        assert_eq!(counter.total_boardings(), 3);
        assert_eq!(counter.vehicle_count(), 2);
    }
}

#[cfg(test)]
mod path {
    use ta_core::{AgentId, NodeId, SimTime, VehicleId};

    use crate::{PathTracker, TripEnd, TripStart};

    const D: AgentId = AgentId(7);
    const V: VehicleId = VehicleId(3);

    fn t(ms: u64) -> SimTime {
        SimTime(ms)
    }

    #[test]
    fn full_trip_round_trip() {
        let mut tracker = PathTracker::new();
        assert_eq!(tracker.start_trip(D, V, t(100)), TripStart::Opened);
        assert!(tracker.record_sample(D, t(200), NodeId(1)));
        assert!(tracker.record_sample(D, t(300), NodeId(2)));
        assert!(tracker.record_sample(D, t(400), NodeId(3)));

        match tracker.end_trip(D) {
            TripEnd::Closed(path) => {
                assert_eq!(path.driver, D);
                assert_eq!(path.vehicle, V);
                assert_eq!(path.started_at, t(100));
                assert_eq!(path.len(), 3);
                // Arrival order preserved.
                let nodes: Vec<u32> = path.samples.iter().map(|s| s.node.0).collect();
                assert_eq!(nodes, [1, 2, 3]);
                assert_eq!(path.span_ms(), 300);
            }
            other => panic!("expected Closed, got {other:?}"),
        }
        assert_eq!(tracker.open_trips(), 0);
    }

    #[test]
    fn empty_trip_discarded() {
        let mut tracker = PathTracker::new();
        tracker.start_trip(D, V, t(0));
        assert!(matches!(tracker.end_trip(D), TripEnd::Empty));
    }

    #[test]
    fn concurrent_start_replaces_and_reports() {
        let mut tracker = PathTracker::new();
        tracker.start_trip(D, V, t(0));
        tracker.record_sample(D, t(10), NodeId(1));

        assert_eq!(tracker.start_trip(D, V, t(50)), TripStart::ReplacedOpen);
        assert_eq!(tracker.open_trips(), 1);

        // The replacement session starts fresh: old samples are gone.
        tracker.record_sample(D, t(60), NodeId(2));
        match tracker.end_trip(D) {
            TripEnd::Closed(path) => {
                assert_eq!(path.started_at, t(50));
                assert_eq!(path.len(), 1);
                assert_eq!(path.samples[0].node, NodeId(2));
            }
            other => panic!("expected Closed, got {other:?}"),
        }
    }

    #[test]
    fn stray_end_is_not_active() {
        let mut tracker = PathTracker::new();
        assert!(matches!(tracker.end_trip(D), TripEnd::NotActive));
    }

    #[test]
    fn sample_without_open_path_dropped() {
        let mut tracker = PathTracker::new();
        assert!(!tracker.record_sample(AgentId(99), t(5), NodeId(0)));
        assert_eq!(tracker.open_trips(), 0);
    }

    #[test]
    fn sessions_are_independent_per_driver() {
        let mut tracker = PathTracker::new();
        let d2 = AgentId(8);
        tracker.start_trip(D, V, t(0));
        tracker.start_trip(d2, VehicleId(4), t(0));
        tracker.record_sample(D, t(10), NodeId(1));
        tracker.record_sample(d2, t(10), NodeId(9));
        assert_eq!(tracker.open_trips(), 2);

        match tracker.end_trip(d2) {
            TripEnd::Closed(path) => assert_eq!(path.samples[0].node, NodeId(9)),
            other => panic!("expected Closed, got {other:?}"),
        }
        assert_eq!(tracker.open_trips(), 1);
    }
}
