//! Path command - search for a chain of emails between two actors
//!
//! BFS is the default; `--dfs` switches to depth-first search. Both report
//! the actors in the order they were visited, ending at the target.

use crate::output::{CsvOutput, Output, OutputConfig, Outputter};
use anyhow::Result;
use colored::Colorize;
use mailflow_core::{ActorId, InteractionGraph};
use serde::Serialize;

/// Traversal strategy for the path command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bfs,
    Dfs,
}

impl Strategy {
    fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
        }
    }
}

/// Result of a path search
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: ActorId,
    pub to: ActorId,
    pub strategy: Strategy,
    /// Visit order ending at `to`, or `None` when `to` is unreachable.
    pub visited: Option<Vec<ActorId>>,
}

impl PathResult {
    pub fn found(&self) -> bool {
        self.visited.is_some()
    }
}

impl Outputter for PathResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = format!(
            "{} {} {} {} ({})\n",
            "Path from".bold(),
            self.from.to_string().cyan(),
            "to".bold(),
            self.to.to_string().cyan(),
            self.strategy.label()
        );

        match &self.visited {
            Some(visited) => {
                let chain: Vec<String> = visited.iter().map(|a| a.to_string()).collect();
                output.push_str(&format!("  {}\n", chain.join(" -> ").green()));
                output.push_str(&format!("\n{}: {}", "Visited".bold(), visited.len()));
            }
            None => {
                output.push_str(&format!("  {}", "No path found".yellow()));
            }
        }
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let visited = self
            .visited
            .as_ref()
            .map(|v| {
                v.iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .unwrap_or_default();
        CsvOutput::from_rows(
            &["from", "to", "strategy", "found", "visited"],
            &[vec![
                self.from.to_string(),
                self.to.to_string(),
                self.strategy.label().to_lowercase(),
                self.found().to_string(),
                visited,
            ]],
        )
    }
}

pub fn search(
    graph: &InteractionGraph,
    from: ActorId,
    to: ActorId,
    strategy: Strategy,
) -> PathResult {
    let visited = match strategy {
        Strategy::Bfs => graph.bfs_path(from, to),
        Strategy::Dfs => graph.dfs_path(from, to),
    };
    tracing::debug!(
        from,
        to,
        strategy = strategy.label(),
        found = visited.is_some(),
        "path search finished"
    );
    PathResult {
        from,
        to,
        strategy,
        visited,
    }
}

/// Run the path command
pub fn run(
    graph: &InteractionGraph,
    from: ActorId,
    to: ActorId,
    strategy: Strategy,
    config: &OutputConfig,
) -> Result<()> {
    Output::with_config(search(graph, from, to, strategy), config).render()
}
