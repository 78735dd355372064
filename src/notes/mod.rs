//! Release note prompt construction and generation.

pub mod generator;
pub mod prompt;

pub use generator::generate_release_notes;
pub use prompt::{ReleaseParams, build_prompt};
