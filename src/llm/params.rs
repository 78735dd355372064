//! Completion parameters.

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Stop generating after three consecutive newlines.
pub const DEFAULT_STOP: &str = "\n\n\n";

/// Generation settings sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Number of candidates requested. The generator requires exactly one back.
    pub n: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub stop: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            n: 1,
            presence_penalty: 0.5,
            frequency_penalty: 0.5,
            stop: vec![DEFAULT_STOP.to_string()],
        }
    }
}

impl GenerationParams {
    /// Same settings with a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
