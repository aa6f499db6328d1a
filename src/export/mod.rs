//! Export functionality for design systems.
//!
//! Every exporter is a pure serialization of a [`DesignSystem`]: CSS custom
//! properties, SCSS variables, a Tailwind theme extension, a JSON snapshot,
//! and a Markdown report for sharing with people rather than build tools.

pub mod css;
pub mod json;
pub mod report;
pub mod scss;
pub mod tailwind;

pub use css::generate_css_variables;
pub use json::generate_json_snapshot;
pub use report::generate_report;
pub use scss::generate_scss_variables;
pub use tailwind::generate_tailwind_config;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{DesignSystem, HexCase, ShadeLadder};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `:root { --primary-500: ... }`
    #[default]
    Css,
    /// `$primary-500: ...;`
    Scss,
    /// `tailwind.config.js` theme extension
    Tailwind,
    /// Machine-readable snapshot
    Json,
    /// Human-readable report
    Markdown,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Css,
        Self::Scss,
        Self::Tailwind,
        Self::Json,
        Self::Markdown,
    ];

    /// Conventional file extension for the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "js",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }

    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "md" => Ok(Self::Markdown),
            "js" => Ok(Self::Tailwind),
            _ => Self::ALL
                .into_iter()
                .find(|format| format.name() == lower)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid export format '{s}'. Must be one of: css, scss, tailwind, json, markdown"
                    )
                }),
        }
    }
}

/// Renders `system` in the requested format.
///
/// `generated` stamps the JSON and Markdown outputs. `case` applies to hex in the
/// code and report outputs; the JSON snapshot always carries canonical
/// uppercase hex.
pub fn render(
    system: &DesignSystem,
    format: ExportFormat,
    case: HexCase,
    generated: DateTime<Utc>,
) -> Result<String> {
    let output = match format {
        ExportFormat::Css => generate_css_variables(system, case),
        ExportFormat::Scss => generate_scss_variables(system, case),
        ExportFormat::Tailwind => generate_tailwind_config(system, case),
        ExportFormat::Json => generate_json_snapshot(system, generated)?,
        ExportFormat::Markdown => generate_report(system, case, generated),
    };
    Ok(output)
}

/// Yields `(label, hex)` for each shade of a ladder.
fn ladder_entries(ladder: &ShadeLadder, case: HexCase) -> impl Iterator<Item = (String, String)> + '_ {
    ladder
        .iter()
        .map(move |shade| (shade.label(), shade.color.to_hex_case(case)))
}
