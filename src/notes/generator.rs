//! Release note generation through the completion API.

use tracing::{debug, error};

use crate::error::{CompletionError, GenerationError};
use crate::llm::{CompletionClient, CompletionRequest, CompletionResponse, GenerationParams};

use super::prompt::{ReleaseParams, build_prompt};

/// Generate the release body for `params`.
///
/// An unsupported language fails before any request is sent. Every failure
/// of the completion call itself is logged and collapsed into
/// [`GenerationError::GenerationFailed`].
pub async fn generate_release_notes<C>(
    client: &C,
    generation: &GenerationParams,
    params: &ReleaseParams,
    configured_messages: Option<&str>,
) -> Result<String, GenerationError>
where
    C: CompletionClient + ?Sized,
{
    let prompt = build_prompt(params, configured_messages)?;
    debug!("Release notes prompt length: {} chars", prompt.len());

    let request = CompletionRequest::new(generation, prompt);

    complete(client, &request).await.map_err(|e| {
        log_failure(&e);
        GenerationError::GenerationFailed(e)
    })
}

async fn complete<C>(client: &C, request: &CompletionRequest) -> Result<String, CompletionError>
where
    C: CompletionClient + ?Sized,
{
    let response = client.create_completion(request).await?;
    extract_text(response)
}

/// Exactly one candidate with non-empty text, trimmed.
fn extract_text(response: CompletionResponse) -> Result<String, CompletionError> {
    let mut choices = response.choices.unwrap_or_default();
    if choices.len() != 1 {
        return Err(CompletionError::EmptyGenerationResult);
    }

    match choices.remove(0).text {
        Some(text) if !text.is_empty() => Ok(text.trim().to_string()),
        _ => Err(CompletionError::EmptyGenerationResult),
    }
}

fn log_failure(err: &CompletionError) {
    match err {
        CompletionError::Status { status, body } => {
            error!("{}", status);
            debug!("{}", body);
        }
        other => error!("{}", other),
    }
}
