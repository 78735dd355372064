//! Prompt construction for release notes.

use crate::error::LanguageError;
use crate::language::validate_language;
use crate::text::is_blank;

/// Everything the prompt is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseParams {
    pub release_name: String,
    pub project_name: String,
    pub messages: Vec<String>,
    pub whimsical: bool,
    /// Target language; blank or `None` means no translation.
    pub language: Option<String>,
}

/// Build the completion prompt.
///
/// The whimsical prompt always uses the fetched messages. The plain prompt
/// uses `configured_messages` when it is non-blank, and the fetched messages
/// otherwise. A non-blank language is validated before anything else is
/// returned.
pub fn build_prompt(
    params: &ReleaseParams,
    configured_messages: Option<&str>,
) -> Result<String, LanguageError> {
    let joined = params.messages.join("\n");
    let release = &params.release_name;
    let project = &params.project_name;

    let base = if params.whimsical {
        format!(
            "Generate release notes for version {release}. The project name is {project}. \
             The tone should be fun and whimsical, yet informative. \
             Use the following commit messages:\n\n{joined}"
        )
    } else {
        let block = match configured_messages {
            Some(block) if !is_blank(Some(block)) => block,
            _ => joined.as_str(),
        };
        format!(
            "Generate release notes for version {release}, for project {project}, \
             based on the following commit messages:\n\n{block}"
        )
    };

    match params.language.as_deref() {
        Some(language) if !is_blank(Some(language)) => {
            validate_language(language)?;
            Ok(format!(
                "Please first {base} and then translate the message to {}",
                language.trim()
            ))
        }
        _ => Ok(base),
    }
}
