//! Commit message listing.

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Repository;
use crate::error::GitHubError;

#[derive(Debug, Serialize)]
struct CommitsQuery<'a> {
    sha: &'a str,
}

#[derive(Debug, Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

/// Fetch the messages of the commits reachable from `reference`.
///
/// Messages keep the order the API returns them in (newest first). Only the
/// first page is read. A response with no commit list is an error, as is any
/// failed request; both are logged and returned.
pub async fn fetch_messages(
    octocrab: &Octocrab,
    repo: &Repository,
    reference: &str,
) -> Result<Vec<String>, GitHubError> {
    let result = list_commits(octocrab, repo, reference).await;

    if let Err(e) = &result {
        warn!("No messages found.");
        debug!("{}", e);
    }

    result
}

async fn list_commits(
    octocrab: &Octocrab,
    repo: &Repository,
    reference: &str,
) -> Result<Vec<String>, GitHubError> {
    let route = format!("/repos/{}/{}/commits", repo.owner, repo.name);

    let commits: Option<Vec<CommitEntry>> = octocrab
        .get(route, Some(&CommitsQuery { sha: reference }))
        .await
        .map_err(|e| GitHubError::HistoryUnavailable {
            reference: reference.to_string(),
            source: Box::new(e),
        })?;

    let commits = commits.ok_or_else(|| GitHubError::NoCommitList {
        reference: reference.to_string(),
    })?;

    Ok(commits.into_iter().map(|c| c.commit.message).collect())
}
