//! Text-color selection and WCAG compliance classification.
//!
//! This is the single gate for externally suggested text colors: a suggestion is
//! accepted only when it reaches AA against its background, otherwise the better
//! of pure black and pure white is substituted and the substitution is flagged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::luminance::{contrast_ratio, ContrastRatio};
use crate::models::RgbColor;

/// Minimum ratio for WCAG AA, normal-size text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum ratio for WCAG AAA, normal-size text.
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceLevel {
    /// 7:1 or better
    #[serde(rename = "AAA")]
    Aaa,
    /// 4.5:1 up to 7:1
    #[serde(rename = "AA")]
    Aa,
    /// Below 4.5:1
    Fail,
}

impl ComplianceLevel {
    /// Whether the level is AA or better.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        };
        f.write_str(label)
    }
}

/// Classifies a ratio against the normal-text thresholds.
///
/// # Examples
///
/// ```
/// use univassist::accessibility::{classify, ComplianceLevel};
///
/// assert_eq!(classify(4.5), ComplianceLevel::Aa);
/// assert_eq!(classify(7.0), ComplianceLevel::Aaa);
/// assert_eq!(classify(4.499), ComplianceLevel::Fail);
/// ```
#[must_use]
pub fn classify(ratio: f64) -> ComplianceLevel {
    if ratio >= AAA_NORMAL_TEXT {
        ComplianceLevel::Aaa
    } else if ratio >= AA_NORMAL_TEXT {
        ComplianceLevel::Aa
    } else {
        ComplianceLevel::Fail
    }
}

/// A background/text pair with its measured contrast.
///
/// Pairs come from [`choose`] or [`AccessiblePair::evaluate`] only, so the
/// type serializes but never deserializes:
///
/// ```compile_fail
/// fn needs<T: serde::de::DeserializeOwned>() {}
/// needs::<univassist::accessibility::AccessiblePair>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessiblePair {
    /// Background color
    pub background: RgbColor,
    /// Text color drawn on the background
    pub text: RgbColor,
    /// Contrast between the two
    pub ratio: ContrastRatio,
    /// Compliance level of `ratio`
    pub level: ComplianceLevel,
    /// True when a suggested text color was rejected and replaced
    pub corrected: bool,
}

impl AccessiblePair {
    /// Measures a pair as-is, without any correction.
    #[must_use]
    pub fn evaluate(background: RgbColor, text: RgbColor) -> Self {
        let ratio = contrast_ratio(&background, &text);
        Self {
            background,
            text,
            ratio,
            level: ratio.level(),
            corrected: false,
        }
    }
}

/// Chooses the text color to draw on `background`.
///
/// A `suggested` color reaching 4.5:1 is kept. Otherwise both black and white are
/// measured and the higher ratio wins, ties going to
/// [`RgbColor::contrasting_text_color`]. `corrected` is set only when a
/// suggestion was discarded.
///
/// # Examples
///
/// ```
/// use univassist::accessibility::{choose, ComplianceLevel};
/// use univassist::models::RgbColor;
///
/// let bg = RgbColor::from_hex("#3B82F6").unwrap();
/// let pair = choose(bg, Some(RgbColor::WHITE));
/// assert!(pair.corrected);
/// assert_eq!(pair.text, RgbColor::BLACK);
/// assert_eq!(pair.level, ComplianceLevel::Aa);
/// ```
#[must_use]
pub fn choose(background: RgbColor, suggested: Option<RgbColor>) -> AccessiblePair {
    if let Some(text) = suggested {
        let pair = AccessiblePair::evaluate(background, text);
        if pair.ratio.passes_aa() {
            return pair;
        }
        tracing::warn!(
            background = %background,
            suggested = %text,
            ratio = %pair.ratio,
            "Suggested text color is below AA, substituting"
        );
    }

    let mut pair = best_extreme(background);
    pair.corrected = suggested.is_some();

    if !pair.level.is_pass() {
        tracing::warn!(background = %background, ratio = %pair.ratio, "No text color reaches AA");
    }

    pair
}

/// Measures black and white on `background` and keeps the better one.
fn best_extreme(background: RgbColor) -> AccessiblePair {
    let preferred = background.contrasting_text_color();
    let other = if preferred == RgbColor::BLACK {
        RgbColor::WHITE
    } else {
        RgbColor::BLACK
    };

    let preferred_pair = AccessiblePair::evaluate(background, preferred);
    let other_pair = AccessiblePair::evaluate(background, other);

    if other_pair.ratio > preferred_pair.ratio {
        other_pair
    } else {
        preferred_pair
    }
}
