//! chronicler - action entry point.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chronicler::github::build_client;
use chronicler::output::{RELEASE_BODY_OUTPUT, set_failed, set_output};
use chronicler::{ActionConfig, ActionInputs, OpenAiClient, run_action};

/// Environment variable holding a tracing filter directive.
const LOG_ENV_VAR: &str = "CHRONICLER_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            set_failed(&failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// The error with its whole cause chain, outermost first.
fn failure_message(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

async fn run() -> Result<()> {
    let inputs = match ActionInputs::try_parse() {
        Ok(inputs) => inputs,
        // --help and friends
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let config = ActionConfig::from_env()?;
    let octocrab = build_client(&config)?;
    let completions = OpenAiClient::new(&config.openai_api_base, config.openai_api_key.clone())?;

    let body = run_action(&config, &inputs, &octocrab, &completions).await?;

    set_output(RELEASE_BODY_OUTPUT, &body).context("Failed to write release_body output")?;
    Ok(())
}

/// Log to stderr. `CHRONICLER_LOG` wins; otherwise debug when the runner
/// has step debugging on, info when not.
fn init_tracing() {
    let default_level = if runner_debug() { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn runner_debug() -> bool {
    env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1")
        || env::var("ACTIONS_STEP_DEBUG").is_ok_and(|v| v.eq_ignore_ascii_case("true"))
}
