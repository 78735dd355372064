//! chronicler - a GitHub Action that writes release notes with a language model.
//!
//! # Overview
//!
//! chronicler finds the commit the latest release points at (or uses the one
//! it is given), lists the commit messages reachable from it, and asks a text
//! completion API to turn them into release notes, optionally translated.

pub mod action;
pub mod config;
pub mod error;
pub mod github;
pub mod inputs;
pub mod language;
pub mod llm;
pub mod notes;
pub mod output;
pub mod text;

// Re-export commonly used types
pub use action::run_action;
pub use config::{ActionConfig, Repository};
pub use error::{ActionError, CompletionError, ConfigError, GenerationError, GitHubError, LanguageError};
pub use inputs::ActionInputs;
pub use language::{SUPPORTED_LANGUAGES, validate_language};
pub use llm::{CompletionClient, GenerationParams, OpenAiClient};
pub use notes::ReleaseParams;
pub use text::is_blank;
