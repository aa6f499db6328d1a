//! JSON snapshot export.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::accessibility::ComplianceLevel;
use crate::models::{DesignSystem, RgbColor, ShadeLadder};
use crate::services::suggestion::FontRecommendation;

#[derive(Serialize)]
struct Metadata<'a> {
    generated: String,
    service: &'a str,
    platform: &'a str,
    keyword: &'a str,
}

#[derive(Serialize)]
struct Colors<'a> {
    primary: &'a ShadeLadder,
    secondary: &'a ShadeLadder,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Accessibility {
    primary500: RgbColor,
    text_color: RgbColor,
    contrast_ratio: f64,
    level: ComplianceLevel,
    corrected: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Universal {
    background: RgbColor,
    text: RgbColor,
    contrast_ratio: f64,
    level: ComplianceLevel,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    metadata: Metadata<'a>,
    fonts: &'a FontRecommendation,
    colors: Colors<'a>,
    accessibility: Accessibility,
    universal: Universal,
}

/// Generates a pretty-printed JSON snapshot of the design system.
///
/// Hex values are always uppercase. Ratios are rounded to two decimals.
pub fn generate_json_snapshot(system: &DesignSystem, generated: DateTime<Utc>) -> Result<String> {
    let session = &system.session;
    let snapshot = Snapshot {
        metadata: Metadata {
            generated: generated.to_rfc3339_opts(SecondsFormat::Secs, true),
            service: &session.service,
            platform: &session.platform,
            keyword: &session.keyword,
        },
        fonts: &system.fonts,
        colors: Colors {
            primary: &system.primary,
            secondary: &system.secondary,
        },
        accessibility: Accessibility {
            primary500: system.accessibility.background,
            text_color: system.accessibility.text,
            contrast_ratio: system.accessibility.ratio.truncated(),
            level: system.accessibility.level,
            corrected: system.accessibility.corrected,
        },
        universal: Universal {
            background: system.universal.background,
            text: system.universal.text,
            contrast_ratio: system.universal.ratio.truncated(),
            level: system.universal.level,
        },
    };

    let mut json =
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize design system")?;
    json.push('\n');
    Ok(json)
}
