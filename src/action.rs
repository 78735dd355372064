//! One run of the action: resolve, fetch, generate.

use octocrab::Octocrab;
use tracing::{debug, info};

use crate::config::ActionConfig;
use crate::error::ActionError;
use crate::github::{fetch_messages, resolve_reference};
use crate::inputs::ActionInputs;
use crate::llm::{CompletionClient, GenerationParams};
use crate::notes::{ReleaseParams, generate_release_notes};
use crate::text::is_blank;

/// Run the action and return the generated release body.
///
/// Steps run strictly in sequence. Only a missing release is recovered
/// from; every other failure is returned to the caller.
pub async fn run_action<C>(
    config: &ActionConfig,
    inputs: &ActionInputs,
    octocrab: &Octocrab,
    completions: &C,
) -> Result<String, ActionError>
where
    C: CompletionClient + ?Sized,
{
    let reference = match non_blank(inputs.sha.as_deref()) {
        Some(sha) => sha.to_string(),
        None => resolve_reference(octocrab, &config.repo).await,
    };

    let project_name = non_blank(inputs.project_name.as_deref())
        .unwrap_or(config.repo.name.as_str())
        .to_string();

    let language = non_blank(inputs.language.as_deref()).map(str::to_string);

    debug!(
        "Parameters:\n    - version: {}\n    - sha: {}\n    - whimsical: {}\n    - projectName: {}\n    - language: {}",
        inputs.version,
        reference,
        inputs.whimsical,
        project_name,
        language.as_deref().unwrap_or(""),
    );

    let messages = fetch_messages(octocrab, &config.repo, &reference).await?;
    info!("Found {} commits from {}", messages.len(), reference);
    debug!("Messages:\n{}", messages.join("\n"));

    let params = ReleaseParams {
        release_name: inputs.version.clone(),
        project_name,
        messages,
        whimsical: inputs.whimsical,
        language,
    };

    let generation = match non_blank(inputs.model.as_deref()) {
        Some(model) => GenerationParams::default().with_model(model),
        None => GenerationParams::default(),
    };

    let body = generate_release_notes(
        completions,
        &generation,
        &params,
        config.commit_messages.as_deref(),
    )
    .await?;

    Ok(body)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_blank(Some(*v))).map(str::trim)
}
