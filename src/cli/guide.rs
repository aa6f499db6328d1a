//! Validation of saved color guide responses.

use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::accessibility::AccessiblePair;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::pair::print_pair;
use crate::services::suggestion::{parse_guide_response, ColorSystem, Typography};

/// Validate a saved color guide response
#[derive(Debug, Args)]
pub struct GuideArgs {
    /// JSON file holding the guide response (code fences allowed)
    #[arg(short, long, value_name = "FILE")]
    pub response: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GuideOutput<'a> {
    color_system: &'a ColorSystem,
    typography: &'a Typography,
    claimed_ratio: Option<f64>,
    accessibility: AccessiblePair,
}

impl GuideArgs {
    /// Execute the guide command.
    pub fn execute(&self) -> CliResult<()> {
        let body = fs::read_to_string(&self.response).map_err(|e| {
            CliError::io(format!(
                "Failed to read guide response {}: {e}",
                self.response.display()
            ))
        })?;

        let guide = parse_guide_response(&body)
            .map_err(|e| CliError::validation(format!("Invalid guide response: {e}")))?;
        let pair = guide.accessible_pair();

        let output = GuideOutput {
            color_system: &guide.color_system,
            typography: &guide.typography,
            claimed_ratio: guide.accessibility.contrast_ratio,
            accessibility: pair,
        };

        if self.json {
            return print_json(&output);
        }

        let colors = output.color_system;
        println!("Color system");
        println!(
            "  Primary:   {} (light {}, dark {})",
            colors.primary.main, colors.primary.light, colors.primary.dark
        );
        println!(
            "  Secondary: {} (light {}, dark {})",
            colors.secondary.main, colors.secondary.light, colors.secondary.dark
        );
        println!("Typography");
        println!("  Body:     {}", output.typography.body_size);
        println!("  Headline: {}", output.typography.headline_size);
        println!("  Line:     {}", output.typography.line_height);
        println!();
        print_pair(&pair, true);
        Ok(())
    }
}
