//! WCAG relative luminance and contrast ratio.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::policy::{classify, ComplianceLevel, AAA_NORMAL_TEXT, AA_NORMAL_TEXT};
use crate::models::RgbColor;

/// Linearizes one sRGB channel using the WCAG 2.x breakpoint of 0.03928.
fn linear_channel(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculates WCAG relative luminance in 0.0 (black) to 1.0 (white).
///
/// `L = 0.2126 R + 0.7152 G + 0.0722 B` over gamma-corrected channels.
#[must_use]
pub fn relative_luminance(color: &RgbColor) -> f64 {
    0.2126 * linear_channel(color.r)
        + 0.7152 * linear_channel(color.g)
        + 0.0722 * linear_channel(color.b)
}

/// Calculates the WCAG contrast ratio between two colors.
///
/// The result is symmetric in its arguments and lies in 1.0-21.0.
///
/// # Examples
///
/// ```
/// use univassist::accessibility::contrast_ratio;
/// use univassist::models::RgbColor;
///
/// let ratio = contrast_ratio(&RgbColor::BLACK, &RgbColor::WHITE);
/// assert!((ratio.value() - 21.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn contrast_ratio(a: &RgbColor, b: &RgbColor) -> ContrastRatio {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ContrastRatio((lighter + 0.05) / (darker + 0.05))
}

/// A WCAG contrast ratio, `n:1` with `n` in 1.0-21.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContrastRatio(f64);

impl ContrastRatio {
    /// The ratio as a plain number.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Compliance level for normal-size text.
    #[must_use]
    pub fn level(self) -> ComplianceLevel {
        classify(self.0)
    }

    /// Whether the ratio meets WCAG AA for normal text (4.5:1).
    #[must_use]
    pub fn passes_aa(self) -> bool {
        self.0 >= AA_NORMAL_TEXT
    }

    /// Whether the ratio meets WCAG AAA for normal text (7:1).
    #[must_use]
    pub fn passes_aaa(self) -> bool {
        self.0 >= AAA_NORMAL_TEXT
    }

    /// Ratio cut to two decimals, as shown in reports.
    ///
    /// Truncates rather than rounds, so a shown value never reaches a
    /// threshold the exact ratio misses.
    ///
    /// ```
    /// use univassist::accessibility::contrast_ratio;
    /// use univassist::models::RgbColor;
    ///
    /// let green = RgbColor::from_hex("#118A11").unwrap();
    /// let ratio = contrast_ratio(&green, &RgbColor::WHITE);
    /// assert_eq!(ratio.truncated(), 4.49);
    /// assert!(!ratio.passes_aa());
    /// ```
    #[must_use]
    pub fn truncated(self) -> f64 {
        // epsilon keeps 20.999999... from showing as 20.99
        ((self.0 * 100.0) + 1e-6).floor() / 100.0
    }
}

impl fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.truncated())
    }
}
