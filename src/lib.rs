//! Typed client for the GitHub organizations, teams and membership API
//!
//! ```no_run
//! # async fn run() -> ghorgs::error::Result<()> {
//! let client = ghorgs::client::GitHubClient::new(Some("ghp_token".to_string()))?;
//! let teams = client.organizations().list_teams("acme").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
