//! Shared CLI plumbing: error type, exit codes and color argument parsing.

use std::fmt;

use crate::config::Config;
use crate::models::RgbColor;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected (bad color, bad file content, failing check)
    Validation = 1,
    /// Reading or writing a file failed
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Which exit code the error maps to
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Input validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a color argument, mapping decode failures to a validation error.
pub fn parse_color(input: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(input).map_err(|e| CliError::validation(e.to_string()))
}

/// Loads the user configuration; a broken file is a validation failure.
pub fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Serializes `value` as pretty JSON and prints it.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Check mark used in human-readable output.
#[must_use]
pub const fn mark(pass: bool) -> &'static str {
    if pass {
        "✓"
    } else {
        "✗"
    }
}
