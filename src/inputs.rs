//! Action inputs.
//!
//! The runner exposes each `with:` input as an `INPUT_<NAME>` environment
//! variable. The same values can be passed as flags for local runs.

use clap::{ArgAction, Parser};

use crate::error::ConfigError;

/// Generate release notes from recent commits with a language model.
#[derive(Parser, Debug, Clone)]
#[command(name = "chronicler")]
#[command(about = "Generate release notes from recent commits with a language model")]
pub struct ActionInputs {
    /// Version (release name) the notes are written for
    #[arg(long, env = "INPUT_VERSION")]
    pub version: String,

    /// Use a fun and whimsical tone
    #[arg(
        long,
        env = "INPUT_WHIMSICAL",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = whimsical_parser,
    )]
    pub whimsical: bool,

    /// Commit reference to summarize (defaults to the latest release target)
    #[arg(long, env = "INPUT_SHA")]
    pub sha: Option<String>,

    /// Project name used in the notes (defaults to the repository name)
    #[arg(long, env = "INPUT_PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Language to translate the notes into
    #[arg(long, env = "INPUT_LANGUAGE")]
    pub language: Option<String>,

    /// Completion model to use
    #[arg(long, env = "INPUT_MODEL")]
    pub model: Option<String>,
}

/// Parse a boolean input the way the Actions toolkit does.
///
/// Only the YAML 1.2 core schema literals are accepted.
pub fn parse_boolean_input(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(ConfigError::InvalidBooleanInput {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn whimsical_parser(value: &str) -> Result<bool, String> {
    parse_boolean_input("whimsical", value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const INPUT_VARS: [&str; 6] = [
        "INPUT_VERSION",
        "INPUT_WHIMSICAL",
        "INPUT_SHA",
        "INPUT_PROJECT_NAME",
        "INPUT_LANGUAGE",
        "INPUT_MODEL",
    ];

    fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
        INPUT_VARS.iter().map(|name| (*name, None)).collect()
    }

    #[test]
    fn test_boolean_literals() {
        for value in ["true", "True", "TRUE"] {
            assert!(parse_boolean_input("whimsical", value).unwrap());
        }
        for value in ["false", "False", "FALSE"] {
            assert!(!parse_boolean_input("whimsical", value).unwrap());
        }
    }

    #[test]
    fn test_boolean_rejects_other_values() {
        for value in ["yes", "1", "", "tRUE", "on"] {
            let err = parse_boolean_input("whimsical", value).unwrap_err();
            assert!(err.to_string().contains("whimsical"));
        }
    }

    #[test]
    #[serial]
    fn test_inputs_from_flags() {
        temp_env::with_vars(cleared(), || {
            let inputs = ActionInputs::try_parse_from([
                "chronicler",
                "--version",
                "v1.2.0",
                "--whimsical",
                "True",
                "--language",
                "french",
            ])
            .unwrap();

            assert_eq!(inputs.version, "v1.2.0");
            assert!(inputs.whimsical);
            assert_eq!(inputs.language.as_deref(), Some("french"));
            assert_eq!(inputs.sha, None);
            assert_eq!(inputs.project_name, None);
        });
    }

    #[test]
    #[serial]
    fn test_inputs_from_runner_env() {
        let mut vars = cleared();
        vars.retain(|(name, _)| {
            !matches!(*name, "INPUT_VERSION" | "INPUT_WHIMSICAL" | "INPUT_SHA" | "INPUT_PROJECT_NAME")
        });
        vars.push(("INPUT_VERSION", Some("2.0.0")));
        vars.push(("INPUT_WHIMSICAL", Some("false")));
        vars.push(("INPUT_SHA", Some("abcdef123456")));
        vars.push(("INPUT_PROJECT_NAME", Some("Widgets")));

        temp_env::with_vars(vars, || {
            let inputs = ActionInputs::try_parse_from(["chronicler"]).unwrap();
            assert_eq!(inputs.version, "2.0.0");
            assert!(!inputs.whimsical);
            assert_eq!(inputs.sha.as_deref(), Some("abcdef123456"));
            assert_eq!(inputs.project_name.as_deref(), Some("Widgets"));
        });
    }

    #[test]
    #[serial]
    fn test_whimsical_defaults_to_false() {
        temp_env::with_vars(cleared(), || {
            let inputs = ActionInputs::try_parse_from(["chronicler", "--version", "1.0.0"]).unwrap();
            assert!(!inputs.whimsical);
        });
    }

    #[test]
    #[serial]
    fn test_invalid_whimsical_is_rejected() {
        temp_env::with_vars(cleared(), || {
            let result = ActionInputs::try_parse_from([
                "chronicler",
                "--version",
                "1.0.0",
                "--whimsical",
                "yes",
            ]);
            assert!(result.is_err());
        });
    }
}
