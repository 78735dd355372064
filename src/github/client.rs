//! Octocrab client construction.

use octocrab::Octocrab;

use crate::config::ActionConfig;
use crate::error::ConfigError;

/// Build an authenticated octocrab client for the configured API URL.
pub fn build_client(config: &ActionConfig) -> Result<Octocrab, ConfigError> {
    Octocrab::builder()
        .personal_token(config.github_token.clone())
        .base_uri(config.github_api_url.as_str())
        .map_err(|e| ConfigError::GitHubClient(Box::new(e)))?
        .build()
        .map_err(|e| ConfigError::GitHubClient(Box::new(e)))
}
