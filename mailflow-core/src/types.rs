//! Data models for interaction logs and the graphs derived from them.
//!
//! These types are plain value records: an [`Interaction`] is one email as read
//! from the log, a [`WeightedEdge`] is every email between one ordered pair of
//! actors collapsed into a count, and the report structs are the results of
//! the read-only queries on [`crate::InteractionGraph`].

use serde::{Deserialize, Serialize};

/// Identifier of an actor (a mailbox). Always non-negative.
pub type ActorId = u64;

/// Send time of an interaction, in seconds.
pub type Timestamp = u64;

/// Number of interactions collapsed into one edge.
pub type Weight = u64;

/// One timestamped directed interaction (a single email).
///
/// Duplicates are meaningful: two identical records are two distinct emails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interaction {
    pub sender: ActorId,
    pub receiver: ActorId,
    pub time: Timestamp,
}

impl Interaction {
    pub fn new(sender: ActorId, receiver: ActorId, time: Timestamp) -> Self {
        Self {
            sender,
            receiver,
            time,
        }
    }
}

impl From<(ActorId, ActorId, Timestamp)> for Interaction {
    fn from((sender, receiver, time): (ActorId, ActorId, Timestamp)) -> Self {
        Self::new(sender, receiver, time)
    }
}

/// A directed edge carrying the number of interactions from `sender` to `receiver`.
///
/// The weight is always positive; pairs with no interactions have no edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub sender: ActorId,
    pub receiver: ActorId,
    pub weight: Weight,
}

/// Which side of an interaction an activity ranking counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendOrReceive {
    Send,
    Receive,
}

/// Activity inside a time window, counted per interaction rather than per edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityReport {
    /// Distinct actors that sent at least one email in the window.
    pub senders: usize,
    /// Distinct actors that received at least one email in the window.
    pub receivers: usize,
    /// Number of emails in the window, duplicates included.
    pub transactions: usize,
}

/// Email history of a single actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorReport {
    pub sent: Weight,
    pub received: Weight,
    /// Distinct actors this actor sent to or received from.
    pub unique_counterparts: usize,
}

/// One row of an activity ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedActor {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub actor: ActorId,
    pub total: Weight,
}
