//! Mailflow core - weighted interaction graphs over timestamped email logs.
//!
//! This crate turns a log of `(sender, receiver, time)` interactions into an
//! immutable directed weighted graph and answers structural and temporal
//! questions about it.
//!
//! # Features
//!
//! - **Aggregation**: duplicate sender/receiver pairs collapse into one weighted edge
//! - **Derived graphs**: filter by time window or actor set into a new, independent graph
//! - **Activity queries**: per-window and per-actor reports, Nth-most-active ranking
//! - **Reachability**: BFS and DFS visit orders between two actors
//! - **Outbreak simulation**: worst-case spread of a malicious email within a time budget
//!
//! # Usage
//!
//! ```
//! use mailflow_core::{Interaction, InteractionGraph, SendOrReceive};
//!
//! let graph = InteractionGraph::new(vec![
//!     Interaction::new(0, 1, 0),
//!     Interaction::new(0, 1, 0),
//!     Interaction::new(1, 2, 1),
//!     Interaction::new(2, 0, 2),
//! ]);
//!
//! assert_eq!(graph.email_count(0, 1), 2);
//! assert_eq!(graph.nth_most_active(1, SendOrReceive::Send), Some(0));
//! assert!(graph.bfs_path(0, 2).is_some());
//! ```

pub mod adjacency;
pub mod aggregate;
pub mod error;
pub mod graph;
pub mod outbreak;
pub mod query;
pub mod records;
pub mod traversal;
pub mod types;

pub use adjacency::AdjacencyIndex;
pub use aggregate::aggregate_edges;
pub use error::{MailflowError, Result};
pub use graph::InteractionGraph;
pub use outbreak::SECONDS_PER_HOUR;
pub use records::{filter_by_actors, filter_by_time, load_interactions, parse_line, read_interactions};
pub use types::*;

/// Get the version of mailflow-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
