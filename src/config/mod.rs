//! Configuration management for ghorgs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::GitHubClient;
use crate::error::{ConfigError, Result};

/// Environment variable overriding the configured token
pub const TOKEN_ENV: &str = "GHORGS_TOKEN";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub access token, sent as `Authorization: token <token>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// API root, for GitHub Enterprise installs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".ghorgs").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    ///
    /// The `GHORGS_TOKEN` environment variable takes precedence over the
    /// token stored in the file.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;

        let mut config = Self::load_or_default(&path)?;
        config.apply_token_override(std::env::var(TOKEN_ENV).ok());
        Ok(config)
    }

    /// Load the file as written, or defaults when it does not exist
    ///
    /// No environment overrides are applied, so the result is safe to save back.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load_from(path) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the token with a non-empty override
    pub fn apply_token_override(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Tokens live here, keep the file private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Build an API client from this configuration
    ///
    /// `api_url_override` wins over the configured `api_url`.
    pub fn client(&self, api_url_override: Option<&str>) -> Result<GitHubClient> {
        let client = GitHubClient::new(self.token.clone())?;

        match api_url_override.or(self.api_url.as_deref()) {
            Some(url) => client.with_base_url(url),
            None => Ok(client),
        }
    }
}
