//! Reachability over the adjacency index.
//!
//! BFS and DFS agree on whether `target` is reachable from `start`; they only
//! differ in the order of the returned visit sequence. Both follow receivers
//! in ascending id order and stop as soon as `target` is reached. DFS uses an
//! explicit stack so deep chains cannot overflow the call stack.

use crate::adjacency::AdjacencyIndex;
use crate::types::ActorId;
use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};

impl AdjacencyIndex {
    /// Breadth-first search from `start` towards `target`.
    ///
    /// Returns actors in discovery order, beginning with `start` and ending
    /// with `target`, or `None` if either actor is unknown or `target` is
    /// unreachable.
    ///
    /// Uses BFS traversal: O(V + E)
    pub fn bfs_path(&self, start: ActorId, target: ActorId) -> Option<Vec<ActorId>> {
        let begin = self.node_index(start)?;
        let end = self.node_index(target)?;

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut order = vec![start];
        let mut queue = VecDeque::new();

        if begin == end {
            return Some(order);
        }

        visited.insert(begin);
        queue.push_back(begin);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.successors(current) {
                if visited.insert(neighbor) {
                    order.push(self.actor_at(neighbor));
                    if neighbor == end {
                        return Some(order);
                    }
                    queue.push_back(neighbor);
                }
            }
        }

        None
    }

    /// Depth-first search from `start` towards `target`.
    ///
    /// Returns actors in preorder, beginning with `start` and ending with
    /// `target`, or `None` if either actor is unknown or `target` is
    /// unreachable.
    pub fn dfs_path(&self, start: ActorId, target: ActorId) -> Option<Vec<ActorId>> {
        let begin = self.node_index(start)?;
        let end = self.node_index(target)?;

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut order = Vec::new();
        // Each frame holds a node's successors and the next one to try.
        let mut stack: Vec<(Vec<NodeIndex>, usize)> = Vec::new();

        visited.insert(begin);
        order.push(start);
        if begin == end {
            return Some(order);
        }
        stack.push((self.successors(begin), 0));

        while let Some((successors, next)) = stack.last_mut() {
            let Some(&neighbor) = successors.get(*next) else {
                stack.pop();
                continue;
            };
            *next += 1;

            if visited.insert(neighbor) {
                order.push(self.actor_at(neighbor));
                if neighbor == end {
                    return Some(order);
                }
                stack.push((self.successors(neighbor), 0));
            }
        }

        None
    }

    /// Number of distinct actors reachable from `start`, `start` included.
    ///
    /// Returns 0 for an unknown actor.
    pub fn reachable_count(&self, start: ActorId) -> usize {
        let Some(begin) = self.node_index(start) else {
            return 0;
        };

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(begin);
        queue.push_back(begin);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.successors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited.len()
    }
}
