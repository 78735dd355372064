//! GitHub API operations using octocrab.

pub mod client;
pub mod commits;
pub mod releases;

pub use client::build_client;
pub use commits::fetch_messages;
pub use releases::{DEFAULT_REFERENCE, latest_release_commitish, resolve_reference};
