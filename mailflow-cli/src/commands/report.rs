//! Report commands - email counts and activity reports
//!
//! - `mailflow count <sender> <receiver>` - emails on one directed edge
//! - `mailflow activity <t0> <t1>` - senders, receivers and emails in a window
//! - `mailflow actor <id>` - one actor's sent/received totals

use crate::output::{Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use mailflow_core::{ActivityReport, ActorId, ActorReport, InteractionGraph, Timestamp};
use serde::Serialize;

/// Emails sent from one actor to another
#[derive(Debug, Serialize)]
pub struct EmailCountResult {
    pub sender: ActorId,
    pub receiver: ActorId,
    pub emails: u64,
}

impl Outputter for EmailCountResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        format!(
            "{} {} {} {}: {}",
            "Emails from".bold(),
            self.sender.to_string().cyan(),
            "to".bold(),
            self.receiver.to_string().cyan(),
            self.emails
        )
    }
}

/// Activity inside a closed time window
#[derive(Debug, Serialize)]
pub struct ActivityResult {
    pub from: Timestamp,
    pub to: Timestamp,
    #[serde(flatten)]
    pub report: ActivityReport,
}

impl Outputter for ActivityResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = [
            ("Senders", self.report.senders.to_string()),
            ("Receivers", self.report.receivers.to_string()),
            ("Emails", self.report.transactions.to_string()),
        ];
        format!(
            "{} [{}, {}]\n{}",
            "Activity in window".bold(),
            self.from,
            self.to,
            TableOutput::format_key_value(&pairs, config)
        )
    }
}

/// Email history of one actor
#[derive(Debug, Serialize)]
pub struct ActorResult {
    pub actor: ActorId,
    pub known: bool,
    #[serde(flatten)]
    pub report: ActorReport,
}

impl Outputter for ActorResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = format!("{} {}\n", "Actor".bold(), self.actor.to_string().cyan());
        if !self.known {
            output.push_str(&format!(
                "  {} Actor not present in this graph.\n",
                "INFO".yellow()
            ));
        }
        let pairs = [
            ("Sent", self.report.sent.to_string()),
            ("Received", self.report.received.to_string()),
            ("Counterparts", self.report.unique_counterparts.to_string()),
        ];
        output.push_str(&TableOutput::format_key_value(&pairs, config));
        output
    }
}

/// Run the count command
pub fn run_count(
    graph: &InteractionGraph,
    sender: ActorId,
    receiver: ActorId,
    config: &OutputConfig,
) -> Result<()> {
    let result = EmailCountResult {
        sender,
        receiver,
        emails: graph.email_count(sender, receiver),
    };
    Output::with_config(result, config).render()
}

/// Run the activity command
pub fn run_activity(
    graph: &InteractionGraph,
    from: Timestamp,
    to: Timestamp,
    config: &OutputConfig,
) -> Result<()> {
    if from > to {
        tracing::warn!(from, to, "window start is after its end; nothing falls inside");
    }
    let result = ActivityResult {
        from,
        to,
        report: graph.report_activity_in_window(from, to),
    };
    Output::with_config(result, config).render()
}

/// Run the actor command
pub fn run_actor(graph: &InteractionGraph, actor: ActorId, config: &OutputConfig) -> Result<()> {
    let result = ActorResult {
        actor,
        known: graph.actor_exists(actor),
        report: graph.report_on_actor(actor),
    };
    Output::with_config(result, config).render()
}
