//! Property-style scenarios over constructed interaction graphs.
//!
//! Each test builds graphs from deterministic pseudo-random logs and checks an
//! invariant that must hold for every instance.

use mailflow_core::{ActorReport, Interaction, InteractionGraph, SendOrReceive, Weight};

// ============================================================================
// Test Utilities
// ============================================================================

/// Deterministic pseudo-random interaction log (64-bit LCG).
fn generate_log(seed: u64, len: usize, actors: u64, span: u64) -> Vec<Interaction> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };

    (0..len)
        .map(|_| Interaction::new(next() % actors, next() % actors, next() % span))
        .collect()
}

fn sample_graphs() -> Vec<InteractionGraph> {
    (1..=8)
        .map(|seed| InteractionGraph::new(generate_log(seed, 40 + seed as usize * 10, 12, 20_000)))
        .collect()
}

fn scenario_graph() -> InteractionGraph {
    InteractionGraph::new(vec![
        Interaction::new(0, 1, 0),
        Interaction::new(0, 1, 0),
        Interaction::new(1, 2, 1),
        Interaction::new(2, 0, 2),
    ])
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_weight_conservation() {
    for graph in sample_graphs() {
        assert_eq!(graph.total_weight(), graph.record_count() as Weight);
    }
}

#[test]
fn test_email_count_matches_raw_records() {
    for graph in sample_graphs() {
        for sender in 0..14 {
            for receiver in 0..14 {
                let expected = graph
                    .records()
                    .iter()
                    .filter(|r| r.sender == sender && r.receiver == receiver)
                    .count() as Weight;
                assert_eq!(graph.email_count(sender, receiver), expected);
            }
        }
    }
}

#[test]
fn test_actor_set_is_union_of_endpoints() {
    for graph in sample_graphs() {
        for record in graph.records() {
            assert!(graph.actor_exists(record.sender));
            assert!(graph.actor_exists(record.receiver));
        }
        let endpoints: std::collections::BTreeSet<_> = graph
            .edges()
            .iter()
            .flat_map(|e| [e.sender, e.receiver])
            .collect();
        assert_eq!(endpoints, graph.actor_ids());
    }
}

#[test]
fn test_unknown_actor_report_is_empty() {
    for graph in sample_graphs() {
        assert_eq!(graph.report_on_actor(10_000), ActorReport::default());
    }
}

#[test]
fn test_rank_beyond_population_is_not_found() {
    for graph in sample_graphs() {
        for direction in [SendOrReceive::Send, SendOrReceive::Receive] {
            let active = graph.activity_ranking(direction).len();
            assert!(graph.nth_most_active(active, direction).is_some());
            assert_eq!(graph.nth_most_active(active + 1, direction), None);
        }
    }
}

#[test]
fn test_top_rank_is_highest_total_smallest_id() {
    for graph in sample_graphs() {
        let top = graph.nth_most_active(1, SendOrReceive::Send).unwrap();
        let best = graph
            .actor_ids()
            .into_iter()
            .map(|a| (graph.report_on_actor(a).sent, a))
            .max_by(|x, y| x.0.cmp(&y.0).then(y.1.cmp(&x.1)))
            .unwrap();
        assert_eq!(top, best.1);
    }
}

#[test]
fn test_full_window_reproduces_edges() {
    for graph in sample_graphs() {
        let last = graph.records().iter().map(|r| r.time).max().unwrap();
        let full = graph.filter_by_time(0, last);
        assert_eq!(full.edges(), graph.edges());

        let empty = graph.filter_by_time(last + 1, last + 1);
        assert!(empty.actor_ids().is_empty());
    }
}

#[test]
fn test_bfs_dfs_existence_equivalence() {
    for graph in sample_graphs() {
        for a in 0..13 {
            for b in 0..13 {
                let bfs = graph.bfs_path(a, b);
                let dfs = graph.dfs_path(a, b);
                assert_eq!(bfs.is_some(), dfs.is_some(), "{a} -> {b}");
                if let (Some(bfs), Some(dfs)) = (bfs, dfs) {
                    assert_eq!(bfs.first(), Some(&a));
                    assert_eq!(dfs.first(), Some(&a));
                    assert_eq!(bfs.last(), Some(&b));
                    assert_eq!(dfs.last(), Some(&b));
                }
            }
        }
    }
}

#[test]
fn test_zero_hour_breach_is_same_instant_fanout() {
    for graph in sample_graphs() {
        let times: std::collections::BTreeSet<_> = graph.records().iter().map(|r| r.time).collect();
        let expected = times
            .into_iter()
            .map(|t| {
                let instant = graph.filter_by_time(t, t);
                instant
                    .records()
                    .iter()
                    .map(|r| instant.adjacency().reachable_count(r.sender))
                    .max()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0);
        assert_eq!(graph.max_breached_user_count(0), expected);
    }
}

#[test]
fn test_breach_grows_with_hours() {
    for graph in sample_graphs() {
        let mut previous = 0;
        for hours in [0, 1, 2, 4, 8] {
            let count = graph.max_breached_user_count(hours);
            assert!(count >= previous);
            assert!(count <= graph.actor_count());
            previous = count;
        }
    }
}

#[test]
fn test_actor_filter_keeps_touching_records() {
    for graph in sample_graphs() {
        let filtered = graph.filter_by_actors([0, 5]);
        let expected = graph
            .records()
            .iter()
            .filter(|r| [0, 5].contains(&r.sender) || [0, 5].contains(&r.receiver))
            .count();
        assert_eq!(filtered.record_count(), expected);
        assert_eq!(filtered.report_on_actor(0), graph.report_on_actor(0));
    }
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_reference_scenario() {
    let graph = scenario_graph();

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.email_count(0, 1), 2);
    assert_eq!(
        graph.report_on_actor(0),
        ActorReport {
            sent: 2,
            received: 1,
            unique_counterparts: 2
        }
    );
    assert!(graph.bfs_path(0, 2).is_some());
    assert_eq!(graph.nth_most_active(1, SendOrReceive::Send), Some(0));
}

#[test]
fn test_scenario_breach() {
    let graph = scenario_graph();
    // Within one hour every email is in the window starting at t=0: 0 -> 1 -> 2 -> 0
    assert_eq!(graph.max_breached_user_count(1), 3);
    // At a single instant only the two 0 -> 1 emails spread
    assert_eq!(graph.max_breached_user_count(0), 2);
    assert_eq!(graph.max_breached_user_count(-3), 0);
}
