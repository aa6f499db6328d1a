//! Contrast ratio command.

use clap::Args;
use serde::Serialize;

use crate::accessibility::{contrast_ratio, relative_luminance, ComplianceLevel};
use crate::cli::common::{mark, parse_color, print_json, CliError, CliResult};
use crate::models::{FontSize, RgbColor};

/// Measure the WCAG contrast ratio of two colors
#[derive(Debug, Args)]
pub struct ContrastArgs {
    /// Background color (#RGB or #RRGGBB)
    #[arg(value_name = "BG")]
    pub background: String,

    /// Foreground (text) color
    #[arg(value_name = "FG")]
    pub foreground: String,

    /// Also convert a font size in points to px, rem and sp
    #[arg(long, value_name = "PT")]
    pub font_pt: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ContrastOutput {
    background: RgbColor,
    foreground: RgbColor,
    background_luminance: f64,
    foreground_luminance: f64,
    ratio: f64,
    level: ComplianceLevel,
    passes_aa: bool,
    passes_aaa: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<FontSize>,
}

impl ContrastArgs {
    /// Execute the contrast command.
    pub fn execute(&self) -> CliResult<()> {
        let background = parse_color(&self.background)?;
        let foreground = parse_color(&self.foreground)?;
        let ratio = contrast_ratio(&background, &foreground);
        let font_size = self
            .font_pt
            .map(|pt| {
                FontSize::new(pt).ok_or_else(|| {
                    CliError::validation(format!(
                        "Font size must be a positive number of points, got {pt}"
                    ))
                })
            })
            .transpose()?;

        let output = ContrastOutput {
            background,
            foreground,
            background_luminance: relative_luminance(&background),
            foreground_luminance: relative_luminance(&foreground),
            ratio: ratio.truncated(),
            level: ratio.level(),
            passes_aa: ratio.passes_aa(),
            passes_aaa: ratio.passes_aaa(),
            font_size,
        };

        if self.json {
            return print_json(&output);
        }

        println!("{background} on {foreground}");
        println!("Contrast: {ratio}");
        println!("Level:    {}", output.level);
        println!("  {} AA  (4.5:1)", mark(output.passes_aa));
        println!("  {} AAA (7:1)", mark(output.passes_aaa));
        if let Some(size) = font_size {
            println!(
                "Font size: {}pt = {} / {} / {}",
                size.pt(),
                size.px_label(),
                size.rem_label(),
                size.sp_label()
            );
        }
        Ok(())
    }
}
