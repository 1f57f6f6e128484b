//! Summary commands - graph size and actor listing
//!
//! - `mailflow summary` - record, actor and edge counts
//! - `mailflow actors` - every actor id in the graph

use crate::output::{Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use mailflow_core::{ActorId, InteractionGraph};
use serde::Serialize;

/// Size of the (possibly filtered) graph
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub records: usize,
    pub actors: usize,
    pub edges: usize,
    pub total_weight: u64,
}

impl Outputter for SummaryResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = [
            ("Emails", self.records.to_string()),
            ("Actors", self.actors.to_string()),
            ("Edges", self.edges.to_string()),
            ("Total weight", self.total_weight.to_string()),
        ];
        format!(
            "{}\n{}",
            "Interaction graph".bold(),
            TableOutput::format_key_value(&pairs, config)
        )
    }
}

/// Actor ids in ascending order
#[derive(Debug, Serialize)]
pub struct ActorsResult {
    pub actors: Vec<ActorId>,
    pub count: usize,
}

impl Outputter for ActorsResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = format!("{}\n{}\n", "Actors".bold(), "-".repeat(60));
        if self.actors.is_empty() {
            output.push_str(&"  No actors in this graph.\n".dimmed().to_string());
        } else {
            let ids: Vec<String> = self.actors.iter().map(|a| a.to_string()).collect();
            output.push_str(&format!("  {}\n", ids.join(" ")));
        }
        output.push_str(&format!("\n{}: {}", "Total".bold(), self.count));
        output
    }
}

pub fn summarize(graph: &InteractionGraph) -> SummaryResult {
    SummaryResult {
        records: graph.record_count(),
        actors: graph.actor_count(),
        edges: graph.edge_count(),
        total_weight: graph.total_weight(),
    }
}

/// Run the summary command
pub fn run(graph: &InteractionGraph, config: &OutputConfig) -> Result<()> {
    Output::with_config(summarize(graph), config).render()
}

/// Run the actors command
pub fn run_actors(graph: &InteractionGraph, config: &OutputConfig) -> Result<()> {
    let actors: Vec<ActorId> = graph.actor_ids().into_iter().collect();
    let result = ActorsResult {
        count: actors.len(),
        actors,
    };
    Output::with_config(result, config).render()
}
