//! Text completion API client and request parameters.

pub mod client;
pub mod params;

pub use client::{
    Choice, CompletionClient, CompletionRequest, CompletionResponse, OpenAiClient,
};
pub use params::GenerationParams;
