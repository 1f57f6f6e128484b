//! Mailflow configuration loading from `.mailflowrc.toml`.
//!
//! Configuration is optional - mailflow uses defaults if no config file
//! exists. Command-line flags always take precedence over the file.
//!
//! # Example Configuration
//!
//! ```toml
//! [input]
//! file = "logs/email-eu-core.txt"
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".mailflowrc.toml";

/// Root configuration structure loaded from `.mailflowrc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct MailflowConfig {
    /// Where interactions are read from.
    #[serde(default)]
    pub input: InputConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Input configuration.
#[derive(Debug, Deserialize, Default)]
pub struct InputConfig {
    /// Default interaction log, used when `--file` is not given.
    ///
    /// Relative paths are resolved against the directory holding the config.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `csv`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Defaults to TTY detection.
    #[serde(default)]
    pub color: Option<bool>,
}

impl MailflowConfig {
    /// Load configuration from `.mailflowrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str::<MailflowConfig>(&content) {
                    Ok(mut config) => {
                        config.input.file = config.input.file.map(|f| root.join(f));
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Default interaction log, if configured.
    pub fn input_file(&self) -> Option<&Path> {
        self.input.file.as_deref()
    }

    /// Default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Configured color preference, or `None` for auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MailflowConfig::default();
        assert!(config.input_file().is_none());
        assert!(config.default_format().is_none());
        assert!(config.use_color().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
file = "emails.txt"

[output]
format = "json"
color = false
"#;
        let config: MailflowConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input_file(), Some(Path::new("emails.txt")));
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
    }

    #[test]
    fn test_load_resolves_relative_input() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[input]\nfile = \"log.txt\"\n").unwrap();

        let config = MailflowConfig::load(dir.path());
        assert_eq!(config.input_file(), Some(dir.path().join("log.txt").as_path()));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = MailflowConfig::load(dir.path());
        assert!(config.input_file().is_none());
    }

    #[test]
    fn test_load_invalid_toml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output\nformat = ").unwrap();

        let config = MailflowConfig::load(dir.path());
        assert!(config.default_format().is_none());
    }
}
