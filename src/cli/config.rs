//! Config command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use ghorgs::client::GitHubClient;
use ghorgs::config::Config;
use ghorgs::error::Result;

/// Run the config set-token command
pub fn set_token(opts: &GlobalOptions, token: String) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_or_default(&path)?;

    config.token = Some(token);
    config.save_to(&path)?;

    println!(
        "{} Token saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

/// Run the config set-api-url command
pub fn set_api_url(opts: &GlobalOptions, url: String) -> Result<()> {
    // Reject URLs the client could not use before writing them
    GitHubClient::new(None)?.with_base_url(&url)?;

    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_or_default(&path)?;

    config.api_url = Some(url);
    config.save_to(&path)?;

    println!(
        "{} API URL saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
