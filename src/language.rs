//! Supported translation languages.

use crate::error::LanguageError;

/// Languages the release notes can be translated into, lowercase.
pub const SUPPORTED_LANGUAGES: [&str; 9] = [
    "english",
    "spanish",
    "french",
    "german",
    "italian",
    "portuguese",
    "russian",
    "japanese",
    "chinese",
];

/// Check that `language` names a supported language.
///
/// Matching ignores case and surrounding whitespace. Returns the canonical
/// lowercase name. The error message echoes the input exactly as given.
pub fn validate_language(language: &str) -> Result<&'static str, LanguageError> {
    let normalized = language.trim().to_lowercase();

    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|supported| *supported == normalized)
        .ok_or_else(|| LanguageError::UnsupportedLanguage {
            language: language.to_string(),
            supported: SUPPORTED_LANGUAGES.join(", "),
        })
}
