//! Latest release lookup.

use octocrab::Octocrab;
use tracing::{debug, warn};

use crate::config::Repository;
use crate::error::GitHubError;

/// Reference summarized when the repository has no published release.
pub const DEFAULT_REFERENCE: &str = "main";

/// Fetch the target commitish of the latest published release.
pub async fn latest_release_commitish(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<String, GitHubError> {
    let release = octocrab
        .repos(owner, repo)
        .releases()
        .get_latest()
        .await
        .map_err(|e| GitHubError::ReleaseNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
            source: Box::new(e),
        })?;

    Ok(release.target_commitish)
}

/// Resolve the reference to summarize.
///
/// Returns the latest release's target commitish, or [`DEFAULT_REFERENCE`]
/// when the lookup fails for any reason. A repository without releases is
/// not an error here.
pub async fn resolve_reference(octocrab: &Octocrab, repo: &Repository) -> String {
    match latest_release_commitish(octocrab, &repo.owner, &repo.name).await {
        Ok(reference) => reference,
        Err(e) => {
            warn!("No release found, defaulting to `{}`.", DEFAULT_REFERENCE);
            debug!("{}", e);
            DEFAULT_REFERENCE.to_string()
        }
    }
}
