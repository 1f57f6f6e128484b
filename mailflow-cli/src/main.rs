//! Mailflow CLI - explore who emails whom, and how far a message can spread
//!
//! Loads a whitespace-separated interaction log (`sender receiver time` per
//! line) into a weighted directed graph and answers queries against it.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand};
use mailflow_core::{ActorId, SendOrReceive, Timestamp};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::MailflowConfig;
use output::{OutputConfig, OutputFormat};

/// Parse a time window given as `t0,t1` (inclusive on both ends)
fn parse_window(s: &str) -> Result<(Timestamp, Timestamp), String> {
    let (start, end) = s
        .split_once(',')
        .ok_or_else(|| format!("'{}' is not a window; expected t0,t1", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<Timestamp>()
            .map_err(|_| format!("'{}' is not a valid timestamp", part.trim()))
    };
    Ok((parse(start)?, parse(end)?))
}

/// Email interaction graphs: counts, rankings, paths and outbreaks.
#[derive(Parser)]
#[command(name = "mailflow")]
#[command(author, version)]
#[command(about = "Email interaction graph explorer")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  mailflow -f emails.txt summary         Size of the graph
  mailflow -f emails.txt rank 1          Most active sender
  mailflow -f emails.txt path 3 17       Can 3 reach 17 by email?
  mailflow -f emails.txt breach 2        Worst outbreak with a 2h firewall
  mailflow -f emails.txt --window 0,86400 activity 0 3600")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interaction log to load (overrides config default)
    #[arg(short, long, global = true, env = "MAILFLOW_FILE")]
    file: Option<PathBuf>,

    /// Keep only interactions with t0 <= time <= t1
    #[arg(long, global = true, value_name = "T0,T1", value_parser = parse_window)]
    window: Option<(Timestamp, Timestamp)>,

    /// Keep only interactions touching one of these actors
    #[arg(long, global = true, value_delimiter = ',')]
    actors: Option<Vec<ActorId>>,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Single-line JSON and borderless tables
    #[arg(long, global = true)]
    compact: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show record, actor and edge counts
    #[command(visible_alias = "s")]
    Summary,

    /// List every actor id
    Actors,

    /// Count emails sent from one actor to another
    Count {
        sender: ActorId,
        receiver: ActorId,
    },

    /// Count senders, receivers and emails in a time window
    Activity {
        /// Window start (inclusive)
        from: Timestamp,
        /// Window end (inclusive)
        to: Timestamp,
    },

    /// Show how much one actor sent and received
    Actor { id: ActorId },

    /// Find the Nth most active sender (or receiver)
    Rank {
        /// 1-based rank
        n: usize,

        /// Rank by emails received instead of sent
        #[arg(short, long)]
        receive: bool,
    },

    /// Show the full activity ranking
    Ranking {
        /// Rank by emails received instead of sent
        #[arg(short, long)]
        receive: bool,

        /// Maximum rows to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Search for an email chain from one actor to another
    #[command(visible_alias = "p")]
    Path {
        from: ActorId,
        to: ActorId,

        /// Depth-first instead of breadth-first
        #[arg(long)]
        dfs: bool,
    },

    /// Simulate the worst outbreak stopped by a firewall after N hours
    Breach {
        /// Hours until the firewall comes up
        #[arg(allow_negative_numbers = true)]
        hours: i64,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn direction(receive: bool) -> SendOrReceive {
    if receive {
        SendOrReceive::Receive
    } else {
        SendOrReceive::Send
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .mailflowrc.toml
    let config = MailflowConfig::load(Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Config color setting wins over TTY detection
    let mut output = OutputConfig::auto_detect_with_color_override(format, config.use_color());
    colored::control::set_override(!output.no_color);
    if cli.compact {
        output = output.compact();
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    let file = match cli.file.as_deref().or_else(|| config.input_file()) {
        Some(file) => file.to_path_buf(),
        None => bail!(
            "No interaction log given; pass --file or set [input] file in {}",
            config::CONFIG_FILE
        ),
    };
    let graph = load_graph(&file, cli.window, cli.actors.as_deref())?;

    match command {
        Commands::Summary => summary::run(&graph, &output),
        Commands::Actors => summary::run_actors(&graph, &output),
        Commands::Count { sender, receiver } => {
            report::run_count(&graph, sender, receiver, &output)
        }
        Commands::Activity { from, to } => report::run_activity(&graph, from, to, &output),
        Commands::Actor { id } => report::run_actor(&graph, id, &output),
        Commands::Rank { n, receive } => rank::run(&graph, n, direction(receive), &output),
        Commands::Ranking { receive, limit } => {
            rank::run_ranking(&graph, direction(receive), limit, &output)
        }
        Commands::Path { from, to, dfs } => {
            let strategy = if dfs {
                path::Strategy::Dfs
            } else {
                path::Strategy::Bfs
            };
            path::run(&graph, from, to, strategy, &output)
        }
        Commands::Breach { hours } => breach::run(&graph, hours, &output),
    }
}
