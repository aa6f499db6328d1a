//! Request and response contract of the external AI suggestion service.
//!
//! The service is a text-completion endpoint, so its answers are untrusted: they
//! may arrive wrapped in a Markdown code fence, omit fields, or carry colors that
//! fail contrast checks. Responses are parsed into strict types (missing fields
//! and invalid hex are errors, never defaults) and every suggested text color is
//! routed through [`choose`] before anything downstream sees it.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use crate::accessibility::{choose, AccessiblePair};
use crate::models::{DesignSession, Mood, RgbColor};

/// Errors raised while decoding a suggestion response.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// Body is not JSON of the expected shape (includes invalid color strings).
    #[error("Malformed suggestion response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A required text field was present but blank.
    #[error("Suggestion response field '{0}' is empty")]
    EmptyField(&'static str),
}

/// Body of a font recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontRequest {
    /// Service purpose
    pub service: String,
    /// Mood keyword
    pub keyword: String,
    /// Target platform
    pub platform: String,
    /// Mood slider positions
    pub mood: Mood,
}

impl FontRequest {
    /// Builds the request from the current session.
    #[must_use]
    pub fn from_session(session: &DesignSession) -> Self {
        Self {
            service: session.service.clone(),
            keyword: session.keyword.clone(),
            platform: session.platform.clone(),
            mood: session.mood,
        }
    }
}

/// Body of a color guide request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideRequest {
    /// Target platform
    pub platform: String,
    /// Service purpose
    pub service: String,
    /// Mood keyword
    pub keyword: String,
    /// Seed color for the guide
    pub primary_color: RgbColor,
}

impl GuideRequest {
    /// Builds the request from the current session.
    #[must_use]
    pub fn from_session(session: &DesignSession) -> Self {
        Self {
            platform: session.platform.clone(),
            service: session.service.clone(),
            keyword: session.keyword.clone(),
            primary_color: session.seed_color(),
        }
    }
}

/// Body of a text color request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColorRequest {
    /// Background the text will sit on
    pub background_color: RgbColor,
}

/// Heading, body and Korean font families suggested for the design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecommendation {
    /// Display/serif family for titles
    pub heading: String,
    /// Readable family for body copy
    pub body: String,
    /// Family with Hangul coverage
    pub korean: String,
    /// Free-form explanation from the service
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl FontRecommendation {
    fn validate(self) -> Result<Self, SuggestionError> {
        for (name, value) in [
            ("heading", &self.heading),
            ("body", &self.body),
            ("korean", &self.korean),
        ] {
            if value.trim().is_empty() {
                return Err(SuggestionError::EmptyField(name));
            }
        }
        Ok(self)
    }
}

impl Default for FontRecommendation {
    fn default() -> Self {
        Self {
            heading: "Playfair Display".to_string(),
            body: "Inter".to_string(),
            korean: "Noto Sans KR".to_string(),
            reasoning: None,
        }
    }
}

/// Main/light/dark variants of one guide color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSet {
    /// Main color
    pub main: RgbColor,
    /// Lighter variant
    pub light: RgbColor,
    /// Darker variant
    pub dark: RgbColor,
}

/// Primary and secondary colors of a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSystem {
    /// Primary brand color set
    pub primary: ToneSet,
    /// Secondary color set
    pub secondary: ToneSet,
}

/// A size given either as a bare number or with units ("16px").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    /// Unitless number
    Number(f64),
    /// Number with units, kept verbatim
    Text(String),
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Type sizes suggested for the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Body text size
    pub body_size: Measure,
    /// Headline size
    pub headline_size: Measure,
    /// Body line height
    pub line_height: Measure,
}

/// Accessibility block of a guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideAccessibility {
    /// Suggested text color on the primary main color
    pub text_color_on_primary: RgbColor,
    /// Ratio the service claims; informational only
    #[serde(default)]
    pub contrast_ratio: Option<f64>,
}

/// Color guide returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideResponse {
    /// Suggested color system
    pub color_system: ColorSystem,
    /// Suggested type sizes
    pub typography: Typography,
    /// Suggested text color and claimed ratio
    pub accessibility: GuideAccessibility,
}

impl GuideResponse {
    /// Text pair for the primary color, corrected when the suggestion is below AA.
    #[must_use]
    pub fn accessible_pair(&self) -> AccessiblePair {
        choose(
            self.color_system.primary.main,
            Some(self.accessibility.text_color_on_primary),
        )
    }
}

/// Text color answer for a single background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColorSuggestion {
    /// Suggested text color
    pub text_color: RgbColor,
    /// Ratio the service claims; informational only
    #[serde(default)]
    pub contrast_ratio: Option<f64>,
    /// Free-form explanation from the service
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl TextColorSuggestion {
    /// Validates the suggestion against `background`.
    #[must_use]
    pub fn apply(&self, background: RgbColor) -> AccessiblePair {
        choose(background, Some(self.text_color))
    }
}

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)\A\s*```[A-Za-z]*\s*(.*?)\s*```\s*\z").expect("fence pattern is valid")
    })
}

/// Removes a Markdown code fence wrapping the whole body, if any.
///
/// Backticks elsewhere, such as inside a JSON string, are left alone.
///
/// # Examples
///
/// ```
/// use univassist::services::suggestion::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
/// assert_eq!(strip_code_fence("{\"a\":\"```x```\"}"), "{\"a\":\"```x```\"}");
/// ```
#[must_use]
pub fn strip_code_fence(body: &str) -> &str {
    fence_regex()
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| body.trim(), |m| m.as_str())
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, SuggestionError> {
    Ok(serde_json::from_str(strip_code_fence(body))?)
}

/// Parses a font recommendation response.
pub fn parse_font_response(body: &str) -> Result<FontRecommendation, SuggestionError> {
    parse_body::<FontRecommendation>(body)?.validate()
}

/// Parses a color guide response.
pub fn parse_guide_response(body: &str) -> Result<GuideResponse, SuggestionError> {
    let guide: GuideResponse = parse_body(body)?;
    tracing::debug!(
        primary = %guide.color_system.primary.main,
        suggested_text = %guide.accessibility.text_color_on_primary,
        "Parsed guide response"
    );
    Ok(guide)
}

/// Parses a text color response.
pub fn parse_text_color_response(body: &str) -> Result<TextColorSuggestion, SuggestionError> {
    parse_body(body)
}
