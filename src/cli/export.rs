//! Design system export command.

use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::common::{load_config, parse_color, CliError, CliResult};
use crate::export::{self, ExportFormat};
use crate::models::{DesignSession, DesignSystem};
use crate::services::suggestion::{
    parse_font_response, parse_guide_response, FontRecommendation, GuideResponse,
};

/// Export a design system as CSS, SCSS, Tailwind, JSON or Markdown
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Primary brand color
    #[arg(long, value_name = "COLOR")]
    pub primary: String,

    /// Saved font recommendation response (defaults to Playfair Display / Inter / Noto Sans KR)
    #[arg(long, value_name = "FILE")]
    pub fonts: Option<PathBuf>,

    /// Saved color guide response; its text color is validated against primary-500
    #[arg(long, value_name = "FILE")]
    pub guide: Option<PathBuf>,

    /// Service purpose
    #[arg(long, default_value = "")]
    pub service: String,

    /// Target platform
    #[arg(long, default_value = "")]
    pub platform: String,

    /// Mood keyword
    #[arg(long, default_value = "")]
    pub keyword: String,

    /// Lab background color (defaults to the configured one)
    #[arg(long, value_name = "COLOR")]
    pub background: Option<String>,

    /// Lab text color (defaults to the configured one)
    #[arg(long, value_name = "COLOR")]
    pub text: Option<String>,

    /// Output format: css, scss, tailwind, json, markdown (defaults to the configured one)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output file path (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write to the configured output directory as design-system.<ext>
    #[arg(long)]
    pub save: bool,
}

fn read_file(path: &Path, what: &str) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {what} {}: {e}", path.display())))
}

impl ExportArgs {
    /// Execute the export command.
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let primary = parse_color(&self.primary)?;
        let background = match &self.background {
            Some(color) => parse_color(color)?,
            None => config.lab.background,
        };
        let text = match &self.text {
            Some(color) => parse_color(color)?,
            None => config.lab.text,
        };
        let format = match &self.format {
            Some(name) => name
                .parse::<ExportFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.export.format,
        };

        let fonts = match &self.fonts {
            Some(path) => parse_font_response(&read_file(path, "font response")?)
                .map_err(|e| CliError::validation(format!("Invalid font response: {e}")))?,
            None => FontRecommendation::default(),
        };
        let guide: Option<GuideResponse> = match &self.guide {
            Some(path) => Some(
                parse_guide_response(&read_file(path, "guide response")?)
                    .map_err(|e| CliError::validation(format!("Invalid guide response: {e}")))?,
            ),
            None => None,
        };

        let session = DesignSession::new()
            .with_service(self.service.as_str())
            .with_platform(self.platform.as_str())
            .with_keyword(self.keyword.as_str())
            .with_primary_color(primary)
            .with_lab_colors(background, text);
        let system = DesignSystem::build(session, fonts, guide.as_ref());

        let content = export::render(&system, format, config.palette.hex_case, Utc::now())
            .map_err(|e| CliError::io(format!("Failed to render {format} export: {e:#}")))?;

        let destination = if self.save {
            Some(
                config
                    .export
                    .output_dir
                    .join(format!("design-system.{}", format.extension())),
            )
        } else {
            self.output.clone()
        };

        match destination {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        CliError::io(format!(
                            "Failed to create output directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                fs::write(&path, content).map_err(|e| {
                    CliError::io(format!("Failed to write output file {}: {e}", path.display()))
                })?;
                eprintln!("✓ Exported {format} to {}", path.display());
            }
            None => print!("{content}"),
        }

        Ok(())
    }
}
