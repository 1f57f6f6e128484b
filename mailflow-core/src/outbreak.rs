//! Worst-case outbreak simulation.
//!
//! Models a malicious email that spreads from one "patient zero" to everyone
//! it emails, and from them onwards, until a firewall comes up `hours` after
//! the first infection. For every distinct send time `t` the records in
//! `[t, t + hours * 3600]` form the blast radius of a trial; every sender of a
//! record at exactly `t` is tried as patient zero. The result is the largest
//! number of actors infected in any trial, patient zero included.
//!
//! Records are sorted once and each window is located by binary search.

use crate::adjacency::AdjacencyIndex;
use crate::aggregate::aggregate_edges;
use crate::graph::InteractionGraph;
use crate::types::{ActorId, Interaction, Timestamp};
use std::collections::BTreeSet;

/// Timestamps are in seconds.
pub const SECONDS_PER_HOUR: u64 = 3600;

impl InteractionGraph {
    /// Maximum number of actors a single infection can reach within `hours`.
    ///
    /// Negative `hours` and empty graphs yield 0. With `hours == 0` each
    /// trial only sees emails sent at the same instant as the first one.
    pub fn max_breached_user_count(&self, hours: i64) -> usize {
        if hours < 0 {
            return 0;
        }
        let window = (hours as u64).saturating_mul(SECONDS_PER_HOUR);

        let mut sorted: Vec<Interaction> = self.records().to_vec();
        sorted.sort_by_key(|r| r.time);

        let mut times: Vec<Timestamp> = sorted.iter().map(|r| r.time).collect();
        times.dedup();

        let mut maximum = 0;
        for &start in &times {
            let lo = sorted.partition_point(|r| r.time < start);
            let end = start.saturating_add(window);
            let hi = sorted.partition_point(|r| r.time <= end);
            let trial = &sorted[lo..hi];

            let patients: BTreeSet<ActorId> = trial
                .iter()
                .take_while(|r| r.time == start)
                .map(|r| r.sender)
                .collect();

            let spread = AdjacencyIndex::from_edges(&aggregate_edges(trial));
            for &patient in &patients {
                let infected = spread.reachable_count(patient);
                tracing::trace!(start, end, patient, infected, "outbreak trial");
                maximum = maximum.max(infected);
            }
        }

        tracing::debug!(
            hours,
            trials = times.len(),
            maximum,
            "computed maximum breached user count"
        );
        maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(records: &[(ActorId, ActorId, Timestamp)]) -> InteractionGraph {
        records
            .iter()
            .map(|&(s, r, t)| Interaction::new(s, r, t))
            .collect()
    }

    #[test]
    fn test_negative_hours() {
        let g = graph(&[(0, 1, 0)]);
        assert_eq!(g.max_breached_user_count(-1), 0);
    }

    #[test]
    fn test_empty_graph() {
        let g = InteractionGraph::default();
        assert_eq!(g.max_breached_user_count(5), 0);
    }

    #[test]
    fn test_single_record() {
        let g = graph(&[(0, 1, 100)]);
        assert_eq!(g.max_breached_user_count(0), 2);
    }

    #[test]
    fn test_zero_hours_is_same_instant_fanout() {
        // At t=0: 0 -> 1 -> 2 (chain of 3). At t=10: 5 -> 6, 5 -> 7, 5 -> 8.
        let g = graph(&[(0, 1, 0), (1, 2, 0), (2, 3, 10), (5, 6, 10), (5, 7, 10), (5, 8, 10)]);
        assert_eq!(g.max_breached_user_count(0), 4);
    }

    #[test]
    fn test_window_extends_reach() {
        // 0 -> 1 at t=0, 1 -> 2 one hour later, 2 -> 3 two hours later
        let g = graph(&[(0, 1, 0), (1, 2, 3600), (2, 3, 7200)]);
        assert_eq!(g.max_breached_user_count(0), 2);
        assert_eq!(g.max_breached_user_count(1), 3);
        assert_eq!(g.max_breached_user_count(2), 4);
    }

    #[test]
    fn test_window_end_inclusive() {
        let g = graph(&[(0, 1, 0), (1, 2, 3600)]);
        assert_eq!(g.max_breached_user_count(1), 3);
    }

    #[test]
    fn test_spread_ignores_order_inside_window() {
        // 1 -> 2 happens before 0 -> 1, but the whole window is the blast radius
        let g = graph(&[(1, 2, 0), (0, 1, 10), (0, 9, 0)]);
        assert_eq!(g.max_breached_user_count(1), 4);
    }

    #[test]
    fn test_patient_zero_must_send_at_window_start() {
        // Only 4 sends at t=0; 0 -> 1 -> 2 -> 3 starts later and is the
        // larger cascade once its own window begins.
        let g = graph(&[(4, 5, 0), (0, 1, 100), (1, 2, 100), (2, 3, 100)]);
        assert_eq!(g.max_breached_user_count(0), 4);
    }

    #[test]
    fn test_huge_hours_saturates() {
        let g = graph(&[(0, 1, 0), (1, 2, u64::MAX)]);
        assert_eq!(g.max_breached_user_count(i64::MAX), 3);
    }
}
