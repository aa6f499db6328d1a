//! Shade ladder command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, parse_color, print_json, CliResult};
use crate::models::{HexCase, ShadeLadder};

/// Generate the 50-900 shade ladder for a base color
#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Base color, placed at level 500
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit lowercase hex regardless of the configured case
    #[arg(long)]
    pub lowercase: bool,
}

#[derive(Debug, Serialize)]
struct ShadeOutput {
    level: String,
    hex: String,
}

#[derive(Debug, Serialize)]
struct PaletteOutput {
    base: String,
    shades: Vec<ShadeOutput>,
}

impl PaletteArgs {
    /// Execute the palette command.
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color(&self.base)?;
        let case = if self.lowercase {
            HexCase::Lower
        } else {
            load_config()?.palette.hex_case
        };

        let ladder = ShadeLadder::generate(base);
        let output = PaletteOutput {
            base: base.to_hex_case(case),
            shades: ladder
                .iter()
                .map(|shade| ShadeOutput {
                    level: shade.label(),
                    hex: shade.color.to_hex_case(case),
                })
                .collect(),
        };

        if self.json {
            return print_json(&output);
        }

        println!("Shade ladder for {}", output.base);
        for shade in &output.shades {
            println!("  {:>3}  {}", shade.level, shade.hex);
        }
        Ok(())
    }
}
