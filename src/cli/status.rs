//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use ghorgs::client::github::API_BASE_URL;
use ghorgs::config::{Config, TOKEN_ENV};
use ghorgs::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ghorgs Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    let config = Config::load_at(opts.config_ref())?;
    println!();

    if config.token.is_some() {
        println!("{} Token configured", "✓".green());
    } else {
        println!("{} No token configured", "✗".red());
        println!("  → Set {} or add `token:` to the config file", TOKEN_ENV);
    }

    let api_url = opts
        .api_url_ref()
        .or(config.api_url.as_deref())
        .unwrap_or(API_BASE_URL);
    println!("{} API URL: {}", "○".dimmed(), api_url.cyan());

    println!();
    Ok(())
}
