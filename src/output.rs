//! Runner output helpers.
//!
//! `set_output` appends `name<<delimiter` blocks to the file named by
//! `GITHUB_OUTPUT`, falling back to the legacy `::set-output` command when the
//! variable is unset. `set_failed` prints an `::error::` workflow command.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use uuid::Uuid;

/// Name of the output slot that receives the generated notes.
pub const RELEASE_BODY_OUTPUT: &str = "release_body";

/// Set a step output.
pub fn set_output(name: &str, value: &str) -> io::Result<()> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => append_output(Path::new(&path), name, value),
        _ => {
            println!("{}", set_output_command(name, value));
            Ok(())
        }
    }
}

fn set_output_command(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", escape_property(name), escape_data(value))
}

/// Append a delimited `name<<delimiter` block to an output file.
pub fn append_output(path: &Path, name: &str, value: &str) -> io::Result<()> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Unexpected input: value should not contain the delimiter \"{delimiter}\""),
        ));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "{}", format_output_block(name, value, &delimiter))
}

fn format_output_block(name: &str, value: &str, delimiter: &str) -> String {
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Report the run as failed with `message`.
///
/// The caller is responsible for exiting with a non-zero status.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
