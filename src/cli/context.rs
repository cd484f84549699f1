//! Command execution context
//!
//! Loads configuration and builds the API client once per command.

use clap::ValueEnum;
use log::warn;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use ghorgs::client::GitHubClient;
use ghorgs::config::Config;
use ghorgs::error::Result;

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    /// API client built from the configuration
    pub client: GitHubClient,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if an existing config file cannot be parsed or the API
    /// URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let client = config.client(opts.api_url_ref())?;
        let format = resolve_format(opts.format, config.preferences.format.as_deref());

        Ok(Self { client, format })
    }
}

/// Pick the output format: flag, then configured preference, then table.
fn resolve_format(flag: Option<OutputFormat>, preference: Option<&str>) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match preference {
        Some(p) => OutputFormat::from_str(p, true).unwrap_or_else(|_| {
            warn!("Ignoring unknown format preference '{}'", p);
            OutputFormat::default()
        }),
        None => OutputFormat::default(),
    }
}
