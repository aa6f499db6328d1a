//! Red-green color-vision-deficiency simulation.
//!
//! The transform here is a coarse linear approximation of protanopia/deuteranopia,
//! not a calibrated Daltonization model. It shows when a pair that relies on hue
//! alone collapses.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::Serialize;

use super::luminance::{contrast_ratio, relative_luminance, ContrastRatio};
use super::policy::ComplianceLevel;
use crate::models::RgbColor;

/// Percentage used to push colors away from mid luminance.
const DEFICIENCY_TONE_PERCENT: u8 = 10;

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Approximates how `color` looks with reduced red-green discrimination.
///
/// # Examples
///
/// ```
/// use univassist::accessibility::simulate_red_green;
/// use univassist::models::RgbColor;
///
/// let red = simulate_red_green(&RgbColor::new(255, 0, 0));
/// let green = simulate_red_green(&RgbColor::new(0, 255, 0));
/// // Red and green land on neighbouring olive tones
/// assert!((i16::from(red.r) - i16::from(green.r)).abs() < 40);
/// ```
#[must_use]
pub fn simulate_red_green(color: &RgbColor) -> RgbColor {
    let r = f64::from(color.r);
    let g = f64::from(color.g);
    let b = f64::from(color.b);

    RgbColor::new(
        to_channel(0.567 * r + 0.433 * g),
        to_channel(0.558 * r + 0.442 * g),
        to_channel(0.242 * g + 0.758 * b),
    )
}

/// Pushes a color toward its nearer extreme so luminance carries the contrast.
///
/// Colors with relative luminance below 0.5 are darkened by 10%, the rest
/// lightened by 10%.
#[must_use]
pub fn optimize_for_deficiency(color: &RgbColor) -> RgbColor {
    if relative_luminance(color) < 0.5 {
        color.darken(DEFICIENCY_TONE_PERCENT)
    } else {
        color.lighten(DEFICIENCY_TONE_PERCENT)
    }
}

/// A pair as seen with typical vision and through the red-green simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulatedPair {
    /// Background as given
    pub background: RgbColor,
    /// Text as given
    pub text: RgbColor,
    /// Contrast with typical vision
    pub ratio: ContrastRatio,
    /// Compliance with typical vision
    pub level: ComplianceLevel,
    /// Background through the simulation
    pub simulated_background: RgbColor,
    /// Text through the simulation
    pub simulated_text: RgbColor,
    /// Contrast of the simulated colors
    pub simulated_ratio: ContrastRatio,
    /// Compliance of the simulated colors
    pub simulated_level: ComplianceLevel,
    /// Set when the simulated pair drops below AA and needs icons, weight or
    /// another cue besides color
    pub needs_non_color_cue: bool,
}

impl SimulatedPair {
    /// Runs both colors through the simulation and measures each view.
    #[must_use]
    pub fn analyze(background: RgbColor, text: RgbColor) -> Self {
        let ratio = contrast_ratio(&background, &text);
        let simulated_background = simulate_red_green(&background);
        let simulated_text = simulate_red_green(&text);
        let simulated_ratio = contrast_ratio(&simulated_background, &simulated_text);

        Self {
            background,
            text,
            ratio,
            level: ratio.level(),
            simulated_background,
            simulated_text,
            simulated_ratio,
            simulated_level: simulated_ratio.level(),
            needs_non_color_cue: !simulated_ratio.passes_aa(),
        }
    }
}

/// Universal (deficiency-aware) variant of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniversalPair {
    /// Background after [`optimize_for_deficiency`]
    pub background: RgbColor,
    /// Text after [`optimize_for_deficiency`]
    pub text: RgbColor,
    /// Contrast of the optimized pair
    pub ratio: ContrastRatio,
    /// Compliance of the optimized pair
    pub level: ComplianceLevel,
}

impl UniversalPair {
    /// Optimizes both colors of a pair.
    #[must_use]
    pub fn from_pair(background: RgbColor, text: RgbColor) -> Self {
        let background = optimize_for_deficiency(&background);
        let text = optimize_for_deficiency(&text);
        let ratio = contrast_ratio(&background, &text);

        Self {
            background,
            text,
            ratio,
            level: ratio.level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_matrix() {
        assert_eq!(simulate_red_green(&RgbColor::new(255, 0, 0)), RgbColor::new(145, 142, 0));
        assert_eq!(simulate_red_green(&RgbColor::new(0, 255, 0)), RgbColor::new(110, 113, 62));
        assert_eq!(simulate_red_green(&RgbColor::new(0, 0, 255)), RgbColor::new(0, 0, 193));
    }

    #[test]
    fn test_simulation_keeps_neutrals() {
        for v in [0u8, 51, 128, 200, 255] {
            let gray = RgbColor::new(v, v, v);
            assert_eq!(simulate_red_green(&gray), gray);
        }
    }

    #[test]
    fn test_red_green_confusion() {
        let red = RgbColor::new(255, 0, 0);
        let green = RgbColor::new(0, 255, 0);
        let seen = contrast_ratio(&red, &green).value();
        let simulated =
            contrast_ratio(&simulate_red_green(&red), &simulate_red_green(&green)).value();
        assert!(simulated < seen, "{simulated} should be below {seen}");
    }

    #[test]
    fn test_optimize_pushes_toward_extremes() {
        let dark = RgbColor::new(51, 51, 51);
        assert_eq!(optimize_for_deficiency(&dark), RgbColor::new(25, 25, 25));

        let light = RgbColor::new(245, 245, 245);
        assert_eq!(optimize_for_deficiency(&light), RgbColor::WHITE);
    }

    #[test]
    fn test_universal_pair_does_not_lose_contrast() {
        let pair = UniversalPair::from_pair(RgbColor::new(245, 245, 245), RgbColor::new(51, 51, 51));
        let original = contrast_ratio(&RgbColor::new(245, 245, 245), &RgbColor::new(51, 51, 51));
        assert!(pair.ratio >= original);
        assert_eq!(pair.level, ComplianceLevel::Aaa);
    }

    #[test]
    fn test_simulated_pair_flags_hue_only_contrast() {
        let report = SimulatedPair::analyze(RgbColor::new(0, 160, 0), RgbColor::new(230, 0, 0));
        assert!(report.needs_non_color_cue);
        assert_eq!(report.simulated_level, ComplianceLevel::Fail);

        let report = SimulatedPair::analyze(RgbColor::new(245, 245, 245), RgbColor::new(51, 51, 51));
        assert!(!report.needs_non_color_cue);
        assert_eq!(report.simulated_background, RgbColor::new(245, 245, 245));
    }
}
