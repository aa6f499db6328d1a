//! Complementary color command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::models::RgbColor;

/// Print the complementary color (hue rotated by 180°)
#[derive(Debug, Args)]
pub struct ComplementArgs {
    /// Color to complement
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ComplementOutput {
    color: RgbColor,
    complement: RgbColor,
}

impl ComplementArgs {
    /// Execute the complement command.
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let output = ComplementOutput {
            color,
            complement: color.complementary(),
        };

        if self.json {
            return print_json(&output);
        }

        println!("{} -> {}", output.color, output.complement);
        Ok(())
    }
}
