//! Read-only activity queries on an [`InteractionGraph`].

use crate::graph::InteractionGraph;
use crate::records;
use crate::types::{
    ActivityReport, ActorId, ActorReport, RankedActor, SendOrReceive, Timestamp, Weight,
};
use petgraph::Direction;
use std::collections::HashSet;

impl From<SendOrReceive> for Direction {
    fn from(value: SendOrReceive) -> Self {
        match value {
            SendOrReceive::Send => Direction::Outgoing,
            SendOrReceive::Receive => Direction::Incoming,
        }
    }
}

impl InteractionGraph {
    /// Count distinct senders, distinct receivers and emails sent in
    /// `t0 <= time <= t1`.
    ///
    /// Works on the raw records, so duplicate emails each count as one
    /// transaction. An inverted window reports zeros.
    pub fn report_activity_in_window(&self, t0: Timestamp, t1: Timestamp) -> ActivityReport {
        let window = records::filter_by_time(self.records(), t0, t1);
        let senders: HashSet<ActorId> = window.iter().map(|r| r.sender).collect();
        let receivers: HashSet<ActorId> = window.iter().map(|r| r.receiver).collect();

        ActivityReport {
            senders: senders.len(),
            receivers: receivers.len(),
            transactions: window.len(),
        }
    }

    /// Emails sent and received by `actor`, and how many distinct actors it
    /// exchanged emails with.
    ///
    /// An actor absent from this graph reports all zeros.
    pub fn report_on_actor(&self, actor: ActorId) -> ActorReport {
        if !self.actor_exists(actor) {
            return ActorReport::default();
        }

        let outgoing = self.adjacency().outgoing_edges(actor);
        let incoming = self.adjacency().incoming_edges(actor);

        let counterparts: HashSet<ActorId> = outgoing
            .iter()
            .map(|e| e.receiver)
            .chain(incoming.iter().map(|e| e.sender))
            .collect();

        ActorReport {
            sent: outgoing.iter().map(|e| e.weight).sum(),
            received: incoming.iter().map(|e| e.weight).sum(),
            unique_counterparts: counterparts.len(),
        }
    }

    /// Actors ranked by total emails sent or received.
    ///
    /// Actors with no activity in `direction` are left out. Higher totals come
    /// first; ties go to the smaller actor id.
    pub fn activity_ranking(&self, direction: SendOrReceive) -> Vec<RankedActor> {
        let dir = Direction::from(direction);

        let mut totals: Vec<(ActorId, Weight)> = self
            .adjacency()
            .actors()
            .map(|actor| (actor, self.adjacency().total_weight(actor, dir)))
            .filter(|&(_, total)| total > 0)
            .collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        totals
            .into_iter()
            .enumerate()
            .map(|(i, (actor, total))| RankedActor {
                rank: i + 1,
                actor,
                total,
            })
            .collect()
    }

    /// The actor at 1-based position `n` of [`Self::activity_ranking`].
    ///
    /// Returns `None` when fewer than `n` actors are active in `direction`, or
    /// when `n` is 0.
    pub fn nth_most_active(&self, n: usize, direction: SendOrReceive) -> Option<ActorId> {
        let index = n.checked_sub(1)?;
        self.activity_ranking(direction)
            .get(index)
            .map(|ranked| ranked.actor)
    }
}
