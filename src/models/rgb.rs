//! RGB color handling with hex parsing, formatting and tone adjustment.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while decoding color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 3- or 6-digit hex color.
    #[error("Invalid hex color format '{input}'. Expected #RGB or #RRGGBB")]
    InvalidColorFormat {
        /// The rejected input, as given.
        input: String,
    },
}

/// Letter case used when formatting hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `#3B82F6`
    #[default]
    Upper,
    /// `#3b82f6`
    Lower,
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a `#RRGGBB` string so design tokens read naturally in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from wide intermediate channel values, clamping each to 0-255.
    #[must_use]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" in any letter case.
    /// Shorthand digits are doubled, so "#abc" is "#aabbcc".
    ///
    /// # Examples
    ///
    /// ```
    /// use univassist::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#3B82F6").unwrap();
    /// assert_eq!(color, RgbColor::new(59, 130, 246));
    ///
    /// let color = RgbColor::from_hex("abc").unwrap();
    /// assert_eq!(color, RgbColor::new(0xAA, 0xBB, 0xCC));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the string is not a valid hex color.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat {
            input: input.to_string(),
        };

        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use univassist::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_hex_case(HexCase::Upper)
    }

    /// Converts the color to a hex string using the requested letter case.
    #[must_use]
    pub fn to_hex_case(&self, case: HexCase) -> String {
        match case {
            HexCase::Upper => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            HexCase::Lower => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }

    /// Channel offset for a tone adjustment of `percent` (0-100).
    fn tone_step(percent: u8) -> i32 {
        let percent = percent.min(100);
        (2.55 * f64::from(percent)).round() as i32
    }

    /// Returns a lighter color, moving every channel toward 255.
    ///
    /// Each channel gains `round(2.55 * percent)` and is clamped at 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use univassist::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 100, 250);
    /// assert_eq!(color.lighten(10), RgbColor::new(26, 126, 255));
    /// ```
    #[must_use]
    pub fn lighten(&self, percent: u8) -> Self {
        let step = Self::tone_step(percent);
        Self::from_clamped(
            i32::from(self.r) + step,
            i32::from(self.g) + step,
            i32::from(self.b) + step,
        )
    }

    /// Returns a darker color, moving every channel toward 0 by `round(2.55 * percent)`.
    #[must_use]
    pub fn darken(&self, percent: u8) -> Self {
        let step = Self::tone_step(percent);
        Self::from_clamped(
            i32::from(self.r) - step,
            i32::from(self.g) - step,
            i32::from(self.b) - step,
        )
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, l)`, each in 0.0-1.0. Hue is expressed in turns
    /// (0.5 = 180 degrees) and is 0.0 for achromatic colors.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s, l)
    }

    /// Creates an `RgbColor` from HSL components.
    ///
    /// Hue is in turns and wraps; saturation and lightness are clamped to 0.0-1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use univassist::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(0.0, 1.0, 0.5), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(0.5, 1.0, 0.5), RgbColor::new(0, 255, 255));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Self {
            r: (r * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (g * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (b * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Returns the complementary color (hue rotated by 180 degrees).
    ///
    /// Saturation and lightness are preserved; achromatic colors map to themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use univassist::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).complementary(), RgbColor::new(0, 255, 255));
    /// assert_eq!(RgbColor::new(90, 90, 90).complementary(), RgbColor::new(90, 90, 90));
    /// ```
    #[must_use]
    pub fn complementary(&self) -> Self {
        let (h, s, l) = self.to_hsl();
        if s == 0.0 {
            return *self;
        }
        Self::from_hsl((h + 0.5) % 1.0, s, l)
    }

    /// Simple luma in 0.0-1.0 used for dark/light decisions.
    ///
    /// This is `(0.299 R + 0.587 G + 0.114 B) / 255`, not WCAG relative luminance.
    #[must_use]
    pub fn perceptual_brightness(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Returns whether the color reads as light (brightness above 0.5).
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.perceptual_brightness() > 0.5
    }

    /// Black on light colors, white on dark ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use univassist::models::RgbColor;
    ///
    /// let blue = RgbColor::from_hex("#3B82F6").unwrap();
    /// assert_eq!(blue.contrasting_text_color(), RgbColor::WHITE);
    /// ```
    #[must_use]
    pub fn contrasting_text_color(&self) -> Self {
        if self.is_light() {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}
