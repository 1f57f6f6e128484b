//! Breach command - worst-case reach of a spreading email
//!
//! `mailflow breach <hours>` tries every patient zero at every send time and
//! reports the largest number of actors infected before the firewall.

use crate::output::{Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use mailflow_core::{InteractionGraph, SECONDS_PER_HOUR};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BreachResult {
    pub hours: i64,
    /// Firewall delay in seconds; 0 for negative hours.
    pub window_seconds: u64,
    pub max_breached: usize,
}

impl Outputter for BreachResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = [
            ("Firewall after", format!("{}h", self.hours)),
            ("Window", format!("{}s", self.window_seconds)),
            ("Max breached", self.max_breached.to_string()),
        ];
        format!(
            "{}\n{}",
            "Outbreak simulation".bold(),
            TableOutput::format_key_value(&pairs, config)
        )
    }
}

/// Run the breach command
pub fn run(graph: &InteractionGraph, hours: i64, config: &OutputConfig) -> Result<()> {
    if hours < 0 {
        tracing::warn!(hours, "negative firewall delay; nothing can be breached");
    }
    let window_seconds = u64::try_from(hours)
        .unwrap_or(0)
        .saturating_mul(SECONDS_PER_HOUR);

    let result = BreachResult {
        hours,
        window_seconds,
        max_breached: graph.max_breached_user_count(hours),
    };
    Output::with_config(result, config).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_breach_csv() {
        let result = BreachResult {
            hours: 2,
            window_seconds: 7200,
            max_breached: 5,
        };
        let config = OutputConfig::new(OutputFormat::Csv);
        assert_eq!(result.render(&config), "hours,max_breached,window_seconds\n2,5,7200");
    }
}
