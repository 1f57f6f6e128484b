//! Ranking commands - most active senders and receivers
//!
//! - `mailflow rank <n>` - the Nth most active actor (`-1` when there is none)
//! - `mailflow ranking` - the whole ranking, optionally limited

use super::actor_or_sentinel;
use crate::output::{CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use mailflow_core::{ActorId, InteractionGraph, RankedActor, SendOrReceive};
use serde::Serialize;

fn direction_label(direction: SendOrReceive) -> &'static str {
    match direction {
        SendOrReceive::Send => "senders",
        SendOrReceive::Receive => "receivers",
    }
}

/// The actor at one rank
#[derive(Debug, Serialize)]
pub struct RankResult {
    pub rank: usize,
    pub direction: SendOrReceive,
    /// `None` serializes as `null`; text formats show `-1`.
    pub actor: Option<ActorId>,
}

impl Outputter for RankResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let actor = match self.actor {
            Some(a) => a.to_string().cyan().to_string(),
            None => format!("{} {}", "-1".yellow(), "(not found)".dimmed()),
        };
        format!(
            "{} #{} {}: {}",
            "Most active".bold(),
            self.rank,
            direction_label(self.direction),
            actor
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let direction = direction_label(self.direction).to_string();
        CsvOutput::from_rows(
            &["rank", "direction", "actor"],
            &[vec![
                self.rank.to_string(),
                direction,
                actor_or_sentinel(self.actor),
            ]],
        )
    }
}

/// An activity ranking
#[derive(Debug, Serialize)]
pub struct RankingResult {
    pub direction: SendOrReceive,
    pub actors: Vec<RankedActor>,
    /// Active actors before any limit was applied.
    pub total_active: usize,
}

impl Outputter for RankingResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .actors
            .iter()
            .map(|r| vec![r.rank.to_string(), r.actor.to_string(), r.total.to_string()])
            .collect();
        format!(
            "{} {}\n{}\n\n{}: {}",
            "Most active".bold(),
            direction_label(self.direction),
            TableOutput::from_rows(&["Rank", "Actor", "Emails"], &rows, config),
            "Active actors".bold(),
            self.total_active
        )
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        CsvOutput::format(&self.actors, config)
    }
}

/// Run the rank command
pub fn run(
    graph: &InteractionGraph,
    n: usize,
    direction: SendOrReceive,
    config: &OutputConfig,
) -> Result<()> {
    let result = RankResult {
        rank: n,
        direction,
        actor: graph.nth_most_active(n, direction),
    };
    Output::with_config(result, config).render()
}

/// Run the ranking command
pub fn run_ranking(
    graph: &InteractionGraph,
    direction: SendOrReceive,
    limit: Option<usize>,
    config: &OutputConfig,
) -> Result<()> {
    let mut actors = graph.activity_ranking(direction);
    let total_active = actors.len();
    if let Some(limit) = limit {
        actors.truncate(limit);
    }
    let result = RankingResult {
        direction,
        actors,
        total_active,
    };
    Output::with_config(result, config).render()
}
