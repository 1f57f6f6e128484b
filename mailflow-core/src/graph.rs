//! Directed weighted interaction graph.
//!
//! An [`InteractionGraph`] is an immutable snapshot built from a sequence of
//! interactions. It owns its raw records, the aggregated weighted edges and a
//! petgraph-backed [`AdjacencyIndex`]. Filtering never mutates an instance; it
//! re-runs the aggregation pipeline over the kept records and returns a new,
//! independent graph.
//!
//! # Architecture
//!
//! ```text
//! records -> aggregate_edges -> AdjacencyIndex -> queries / traversal / outbreak
//! ```

use crate::adjacency::AdjacencyIndex;
use crate::aggregate::aggregate_edges;
use crate::error::Result;
use crate::records;
use crate::types::{ActorId, Interaction, Timestamp, Weight, WeightedEdge};
use std::collections::BTreeSet;
use std::path::Path;

/// Immutable directed weighted graph over a set of email interactions.
///
/// Every accessor returns an owned copy or a shared borrow, so an instance
/// can be queried from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct InteractionGraph {
    records: Vec<Interaction>,
    edges: Vec<WeightedEdge>,
    actors: BTreeSet<ActorId>,
    adjacency: AdjacencyIndex,
}

impl InteractionGraph {
    /// Build a graph from interaction records.
    ///
    /// # Example
    ///
    /// ```
    /// use mailflow_core::{Interaction, InteractionGraph};
    ///
    /// let graph = InteractionGraph::new(vec![
    ///     Interaction::new(0, 1, 0),
    ///     Interaction::new(0, 1, 0),
    ///     Interaction::new(1, 2, 1),
    /// ]);
    /// assert_eq!(graph.email_count(0, 1), 2);
    /// ```
    pub fn new(records: Vec<Interaction>) -> Self {
        let actors: BTreeSet<ActorId> = records
            .iter()
            .flat_map(|r| [r.sender, r.receiver])
            .collect();
        let edges = aggregate_edges(&records);
        let adjacency = AdjacencyIndex::build(&actors, &edges);

        tracing::debug!(
            records = records.len(),
            actors = actors.len(),
            edges = edges.len(),
            "built interaction graph"
        );

        let graph = Self {
            records,
            edges,
            actors,
            adjacency,
        };
        graph.check_rep();
        graph
    }

    /// Load an interaction log from `path` and build its graph.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(records::load_interactions(path)?))
    }

    /// New graph holding only interactions sent in `t0 <= time <= t1`.
    pub fn filter_by_time(&self, t0: Timestamp, t1: Timestamp) -> Self {
        let kept = records::filter_by_time(&self.records, t0, t1);
        tracing::debug!(t0, t1, kept = kept.len(), "time-filtered graph");
        Self::new(kept)
    }

    /// New graph holding only interactions sent or received by one of `actors`.
    pub fn filter_by_actors<I>(&self, actors: I) -> Self
    where
        I: IntoIterator<Item = ActorId>,
    {
        let kept = records::filter_by_actors(&self.records, actors);
        tracing::debug!(kept = kept.len(), "actor-filtered graph");
        Self::new(kept)
    }

    /// Every actor that sent or received at least one interaction.
    pub fn actor_ids(&self) -> BTreeSet<ActorId> {
        self.actors.clone()
    }

    /// Check if an actor appears in this graph.
    pub fn actor_exists(&self, actor: ActorId) -> bool {
        self.actors.contains(&actor)
    }

    /// Number of emails from `sender` to `receiver`; 0 if there are none.
    pub fn email_count(&self, sender: ActorId, receiver: ActorId) -> Weight {
        self.adjacency.weight(sender, receiver)
    }

    /// Outgoing weighted edges of `actor`, ascending by receiver.
    pub fn outgoing_edges(&self, actor: ActorId) -> Vec<WeightedEdge> {
        self.adjacency.outgoing_edges(actor)
    }

    /// Raw interactions in source order.
    pub fn records(&self) -> &[Interaction] {
        &self.records
    }

    /// Aggregated edges, ascending by `(sender, receiver)`.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of all edge weights. Always equals [`Self::record_count`].
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Breadth-first visit order from `start` to `target`; `None` if there is
    /// no path. See [`AdjacencyIndex::bfs_path`].
    pub fn bfs_path(&self, start: ActorId, target: ActorId) -> Option<Vec<ActorId>> {
        self.adjacency.bfs_path(start, target)
    }

    /// Depth-first visit order from `start` to `target`; `None` if there is
    /// no path. See [`AdjacencyIndex::dfs_path`].
    pub fn dfs_path(&self, start: ActorId, target: ActorId) -> Option<Vec<ActorId>> {
        self.adjacency.dfs_path(start, target)
    }

    fn check_rep(&self) {
        debug_assert_eq!(self.total_weight(), self.records.len() as Weight);
        debug_assert_eq!(self.adjacency.actor_count(), self.actors.len());
        debug_assert_eq!(self.adjacency.edge_count(), self.edges.len());
        debug_assert!(self.edges.iter().all(|e| e.weight > 0));
    }
}

impl FromIterator<Interaction> for InteractionGraph {
    fn from_iter<T: IntoIterator<Item = Interaction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
