//! Adjacency index powered by petgraph.
//!
//! Holds the aggregated edges of one graph instance as a `DiGraph` whose node
//! weights are actor ids and whose edge weights are interaction counts, plus a
//! map from actor id to node index. Traversals (see [`crate::traversal`]) run
//! directly on this structure.

use crate::types::{ActorId, Weight, WeightedEdge};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap};

/// Directed weighted adjacency over a fixed actor set.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
    graph: DiGraph<ActorId, Weight>,
    node_map: HashMap<ActorId, NodeIndex>,
}

impl AdjacencyIndex {
    /// Build the index from an actor set and the edges between those actors.
    ///
    /// Edge endpoints missing from `actors` are added as nodes, so an index
    /// built from edges alone covers every endpoint.
    pub fn build<'a, I>(actors: I, edges: &[WeightedEdge]) -> Self
    where
        I: IntoIterator<Item = &'a ActorId>,
    {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();

        for &actor in actors {
            node_map
                .entry(actor)
                .or_insert_with(|| graph.add_node(actor));
        }

        for edge in edges {
            let s = *node_map
                .entry(edge.sender)
                .or_insert_with(|| graph.add_node(edge.sender));
            let d = *node_map
                .entry(edge.receiver)
                .or_insert_with(|| graph.add_node(edge.receiver));
            graph.add_edge(s, d, edge.weight);
        }

        Self { graph, node_map }
    }

    /// Build an index covering exactly the endpoints of `edges`.
    pub fn from_edges(edges: &[WeightedEdge]) -> Self {
        let actors: BTreeSet<ActorId> = edges
            .iter()
            .flat_map(|e| [e.sender, e.receiver])
            .collect();
        Self::build(&actors, edges)
    }

    /// Check if an actor is a node of this index.
    pub fn actor_exists(&self, actor: ActorId) -> bool {
        self.node_map.contains_key(&actor)
    }

    /// Number of actors (nodes).
    pub fn actor_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of weighted edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing edges of `actor` in ascending receiver order.
    ///
    /// Unknown actors and actors that never sent have no outgoing edges.
    pub fn outgoing_edges(&self, actor: ActorId) -> Vec<WeightedEdge> {
        self.edges_of(actor, Direction::Outgoing)
    }

    /// Incoming edges of `actor` in ascending sender order.
    pub fn incoming_edges(&self, actor: ActorId) -> Vec<WeightedEdge> {
        self.edges_of(actor, Direction::Incoming)
    }

    /// Weight of the edge `sender -> receiver`, or 0 if there is none.
    pub fn weight(&self, sender: ActorId, receiver: ActorId) -> Weight {
        match (self.node_map.get(&sender), self.node_map.get(&receiver)) {
            (Some(&s), Some(&d)) => self
                .graph
                .find_edge(s, d)
                .map(|e| self.graph[e])
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Sum of edge weights leaving (`Outgoing`) or entering (`Incoming`) `actor`.
    pub fn total_weight(&self, actor: ActorId, direction: Direction) -> Weight {
        match self.node_map.get(&actor) {
            Some(&idx) => self
                .graph
                .edges_directed(idx, direction)
                .map(|e| *e.weight())
                .sum(),
            None => 0,
        }
    }

    /// Iterate over every actor in the index.
    pub fn actors(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.graph.node_indices().map(move |idx| self.graph[idx])
    }

    pub(crate) fn node_index(&self, actor: ActorId) -> Option<NodeIndex> {
        self.node_map.get(&actor).copied()
    }

    pub(crate) fn actor_at(&self, idx: NodeIndex) -> ActorId {
        self.graph[idx]
    }

    /// Receivers of `idx`, ordered by ascending actor id so traversals are
    /// deterministic.
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut next: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        next.sort_by_key(|&n| self.graph[n]);
        next.dedup();
        next
    }

    fn edges_of(&self, actor: ActorId, direction: Direction) -> Vec<WeightedEdge> {
        let idx = match self.node_map.get(&actor) {
            Some(&idx) => idx,
            None => return vec![],
        };

        let mut edges: Vec<WeightedEdge> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| WeightedEdge {
                sender: self.graph[e.source()],
                receiver: self.graph[e.target()],
                weight: *e.weight(),
            })
            .collect();
        edges.sort();
        edges
    }
}
