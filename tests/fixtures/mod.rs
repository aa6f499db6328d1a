//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the univassist binary
pub fn univassist_bin() -> &'static str {
    env!("CARGO_BIN_EXE_univassist")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(univassist_bin());
    cmd.env("UNIVASSIST_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output ({e}). stdout: {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Guide response as the suggestion service returns it, fenced.
pub const GUIDE_RESPONSE: &str = r##"```json
{
  "colorSystem": {
    "primary": {"main": "#3B82F6", "light": "#93C5FD", "dark": "#1D4ED8"},
    "secondary": {"main": "#F6AF3B", "light": "#FCD34D", "dark": "#B45309"}
  },
  "typography": {"bodySize": "16px", "headlineSize": "32px", "lineHeight": 1.5},
  "accessibility": {"textColorOnPrimary": "#FFFFFF", "contrastRatio": 4.8}
}
```"##;

/// Font recommendation response.
pub const FONT_RESPONSE: &str = r#"{
  "heading": "Merriweather",
  "body": "Open Sans",
  "korean": "Nanum Gothic",
  "reasoning": "Readable pairing for long-form content."
}"#;

/// Writes `content` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}
