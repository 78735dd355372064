//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use chronicler::{ActionConfig, Repository};
use octocrab::Octocrab;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const OWNER: &str = "owner";
pub const REPO: &str = "repo";

/// Helper to create an octocrab client pointing to a mock server.
pub async fn mock_client(server: &MockServer) -> Octocrab {
    Octocrab::builder()
        .base_uri(server.uri())
        .expect("Failed to set base URI")
        .build()
        .expect("Failed to build octocrab")
}

/// The repository every mock route is mounted under.
pub fn repository() -> Repository {
    Repository {
        owner: OWNER.to_string(),
        name: REPO.to_string(),
    }
}

/// Configuration pointing both APIs at mock servers.
pub fn config(github: &MockServer, openai: &MockServer) -> ActionConfig {
    ActionConfig {
        github_token: "ghp_test".to_string(),
        openai_api_key: Some("sk-test".to_string()),
        repo: repository(),
        github_api_url: github.uri(),
        openai_api_base: format!("{}/v1", openai.uri()),
        commit_messages: None,
    }
}

/// A commit list entry with the fields GitHub returns that we care about.
pub fn mock_commit(sha: &str, message: &str) -> Value {
    json!({
        "sha": sha,
        "node_id": format!("C_{}", sha),
        "url": format!("https://api.github.com/repos/owner/repo/commits/{}", sha),
        "commit": {
            "author": {
                "name": "Test User",
                "email": "test@example.com",
                "date": "2024-06-15T12:00:00Z"
            },
            "message": message,
            "comment_count": 0
        },
        "parents": []
    })
}

/// A release object with the fields octocrab's `Release` model requires.
pub fn mock_release(target_commitish: &str) -> Value {
    json!({
        "url": "https://api.github.com/repos/owner/repo/releases/1",
        "html_url": "https://github.com/owner/repo/releases/tag/v1.0.0",
        "assets_url": "https://api.github.com/repos/owner/repo/releases/1/assets",
        "upload_url": "https://uploads.github.com/repos/owner/repo/releases/1/assets{?name,label}",
        "tarball_url": "https://api.github.com/repos/owner/repo/tarball/v1.0.0",
        "zipball_url": "https://api.github.com/repos/owner/repo/zipball/v1.0.0",
        "id": 1,
        "node_id": "RE_1",
        "tag_name": "v1.0.0",
        "target_commitish": target_commitish,
        "name": "v1.0.0",
        "body": "First release",
        "draft": false,
        "prerelease": false,
        "created_at": "2024-06-15T12:00:00Z",
        "published_at": "2024-06-15T12:00:00Z",
        "author": null,
        "assets": []
    })
}

/// A completion response with one choice per text.
pub fn completion_body(texts: &[&str]) -> Value {
    let choices: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "text": t, "index": i, "logprobs": null, "finish_reason": "stop" }))
        .collect();

    json!({
        "id": "cmpl-test",
        "object": "text_completion",
        "created": 1700000000,
        "model": "gpt-3.5-turbo-instruct",
        "choices": choices,
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    })
}
