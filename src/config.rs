//! Process-wide configuration, read once from the environment at startup.
//!
//! Variables:
//! - `GITHUB_TOKEN` (required)
//! - `OPENAI_API_KEY`
//! - `GITHUB_REPOSITORY` as `owner/repo` (required)
//! - `GITHUB_API_URL`, defaults to `https://api.github.com`
//! - `OPENAI_API_BASE`, defaults to `https://api.openai.com/v1`
//! - `COMMIT_MESSAGES`, an optional block used by the plain prompt

use std::env;

use tracing::warn;

use crate::error::ConfigError;
use crate::text::is_blank;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Credentials and repository coordinates for one run.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub github_token: String,
    pub openai_api_key: Option<String>,
    pub repo: Repository,
    pub github_api_url: String,
    pub openai_api_base: String,
    /// Commit message block supplied by the workflow, if any.
    pub commit_messages: Option<String>,
}

/// The `owner/repo` pair the action runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse `owner/repo`. Both halves must be non-empty.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRepository(value.to_string());
        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl ActionConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_token =
            non_blank_var("GITHUB_TOKEN").ok_or(ConfigError::MissingCredential("GITHUB_TOKEN"))?;

        let openai_api_key = non_blank_var("OPENAI_API_KEY");
        if openai_api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; completion requests will be unauthenticated");
        }

        let repository = env::var("GITHUB_REPOSITORY").unwrap_or_default();
        let repo = Repository::parse(&repository)?;

        Ok(Self {
            github_token,
            openai_api_key,
            repo,
            github_api_url: non_blank_var("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            openai_api_base: non_blank_var("OPENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            commit_messages: non_blank_var("COMMIT_MESSAGES"),
        })
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !is_blank(Some(v.as_str())))
}
