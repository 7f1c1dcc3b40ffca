//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the flag/env layer; the config layer is applied
/// through [`GlobalOptions::resolve_format`] and `Config::api_url`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, if given on the command line
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.promoadmin/config.yaml)
    pub config: Option<String>,

    /// Backend URL override
    pub api_url: Option<String>,

    /// Debug logging enabled
    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            debug: cli.debug,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Output format: flag, then the config preference, then pretty
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default()
    }
}
