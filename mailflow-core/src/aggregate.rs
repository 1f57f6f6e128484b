//! Weighted edge aggregation.
//!
//! Collapses raw interactions sharing an ordered `(sender, receiver)` pair into
//! one edge whose weight is the number of such interactions.

use crate::types::{ActorId, Interaction, Weight, WeightedEdge};
use std::collections::BTreeMap;

/// Aggregate interactions into weighted edges, sorted by `(sender, receiver)`.
///
/// Input order does not affect the result. Every emitted weight is positive.
pub fn aggregate_edges(records: &[Interaction]) -> Vec<WeightedEdge> {
    let mut counts: BTreeMap<(ActorId, ActorId), Weight> = BTreeMap::new();
    for record in records {
        *counts.entry((record.sender, record.receiver)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((sender, receiver), weight)| WeightedEdge {
            sender,
            receiver,
            weight,
        })
        .collect()
}
