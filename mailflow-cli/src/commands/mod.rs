//! Command implementations for the mailflow CLI
//!
//! Each command module provides a `run` function that executes the command
//! logic against an already-built [`InteractionGraph`].

pub mod breach;
pub mod path;
pub mod rank;
pub mod report;
pub mod summary;

use anyhow::{Context, Result};
use mailflow_core::{ActorId, InteractionGraph, Timestamp};
use std::path::Path;

/// Load the interaction log and derive the graph selected by the global
/// `--window` and `--actors` filters.
pub fn load_graph(
    file: &Path,
    window: Option<(Timestamp, Timestamp)>,
    actors: Option<&[ActorId]>,
) -> Result<InteractionGraph> {
    let mut graph = InteractionGraph::from_path(file)
        .with_context(|| format!("Failed to load interactions from {}", file.display()))?;
    tracing::info!(
        file = %file.display(),
        records = graph.record_count(),
        actors = graph.actor_count(),
        "loaded interaction graph"
    );

    if let Some((t0, t1)) = window {
        graph = graph.filter_by_time(t0, t1);
    }
    if let Some(actors) = actors {
        graph = graph.filter_by_actors(actors.iter().copied());
    }

    Ok(graph)
}

/// Render an optional actor the way text output shows a missing one.
pub fn actor_or_sentinel(actor: Option<ActorId>) -> String {
    actor.map_or_else(|| "-1".to_string(), |a| a.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_graph_applies_filters() {
        let file = write_log(&["0 1 0", "1 2 10", "3 4 20"]);

        let graph = load_graph(file.path(), None, None).unwrap();
        assert_eq!(graph.record_count(), 3);

        let graph = load_graph(file.path(), Some((0, 10)), None).unwrap();
        assert_eq!(graph.record_count(), 2);

        let graph = load_graph(file.path(), Some((0, 10)), Some([2].as_slice())).unwrap();
        assert_eq!(graph.record_count(), 1);
    }

    #[test]
    fn test_load_graph_reports_bad_line() {
        let file = write_log(&["0 1 0", "oops"]);
        let err = load_graph(file.path(), None, None).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_actor_or_sentinel() {
        assert_eq!(actor_or_sentinel(Some(4)), "4");
        assert_eq!(actor_or_sentinel(None), "-1");
    }
}
