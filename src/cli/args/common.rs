//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - cards with meals and prices (default)
    #[default]
    Pretty,
    /// Table format - one row per promotion
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}
