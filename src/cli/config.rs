//! Configuration management CLI commands.

use crate::cli::common::{load_config, parse_color, print_json, CliError, CliResult};
use crate::config::Config;
use crate::export::ExportFormat;
use crate::models::HexCase;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Hex case for emitted colors (upper or lower)
    #[arg(long, value_name = "CASE")]
    hex_case: Option<String>,

    /// Default lab background color
    #[arg(long, value_name = "COLOR")]
    background: Option<String>,

    /// Default lab text color
    #[arg(long, value_name = "COLOR")]
    text: Option<String>,

    /// Default export format (css, scss, tailwind, json, markdown)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Directory used by `export --save`
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

fn parse_hex_case(value: &str) -> CliResult<HexCase> {
    match value.to_lowercase().as_str() {
        "upper" => Ok(HexCase::Upper),
        "lower" => Ok(HexCase::Lower),
        _ => Err(CliError::validation(
            "Invalid hex case. Must be 'upper' or 'lower'",
        )),
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.hex_case.is_none()
            && self.background.is_none()
            && self.text.is_none()
            && self.format.is_none()
            && self.output_dir.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --hex-case, --background, --text, --format, or --output-dir",
            ));
        }

        let mut config = load_config()?;

        if let Some(value) = &self.hex_case {
            config.palette.hex_case = parse_hex_case(value)?;
        }
        if let Some(color) = &self.background {
            config.lab.background = parse_color(color)?;
        }
        if let Some(color) = &self.text {
            config.lab.text = parse_color(color)?;
        }
        if let Some(name) = &self.format {
            config.export.format = name
                .parse::<ExportFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(path) = &self.output_dir {
            config.export.output_dir.clone_from(path);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("UNIVASSIST Configuration");
    println!("========================");
    println!();

    println!("Palette:");
    let case = match config.palette.hex_case {
        HexCase::Upper => "upper",
        HexCase::Lower => "lower",
    };
    println!("  Hex Case: {case}");
    println!();

    println!("Lab:");
    println!("  Background: {}", config.lab.background);
    println!("  Text:       {}", config.lab.text);
    println!();

    println!("Export:");
    println!("  Format:           {}", config.export.format);
    println!("  Output Directory: {}", config.export.output_dir.display());
}
