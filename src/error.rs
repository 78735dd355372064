//! Error types for chronicler modules using thiserror.

use thiserror::Error;

/// Errors from reading action inputs and process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No {0} set")]
    MissingCredential(&'static str),

    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBooleanInput { name: String, value: String },

    #[error("Invalid repository '{0}': expected the form owner/repo")]
    InvalidRepository(String),

    #[error("Failed to build GitHub client: {0}")]
    GitHubClient(#[source] Box<octocrab::Error>),

    #[error("Failed to build completion client: {0}")]
    CompletionClient(#[source] reqwest::Error),
}

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("No release found for {owner}/{repo}: {source}")]
    ReleaseNotFound {
        owner: String,
        repo: String,
        #[source]
        source: Box<octocrab::Error>,
    },

    #[error("Failed to fetch commit history for '{reference}': {source}")]
    HistoryUnavailable {
        reference: String,
        #[source]
        source: Box<octocrab::Error>,
    },

    #[error("no new commits found")]
    NoCommitList { reference: String },
}

/// Errors from target language validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Language {language} is not supported.\nSupported languages are: {supported}")]
    UnsupportedLanguage { language: String, supported: String },
}

/// Errors from the text completion API.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion API responded with status {status}")]
    Status { status: u16, body: String },

    #[error("Failed to reach completion API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Completion API returned an unreadable response: {0}")]
    InvalidResponse(String),

    #[error("Empty response")]
    EmptyGenerationResult,
}

/// Errors from release note generation.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    UnsupportedLanguage(#[from] LanguageError),

    /// The completion call failed; the cause is only reachable through `source()`.
    #[error("Something went wrong with the OpenAI API.")]
    GenerationFailed(#[source] CompletionError),
}

/// Any failure that aborts an action run.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    History(#[from] GitHubError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
