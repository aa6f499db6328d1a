//! Shade ladder derived from a single base color.
//!
//! A ladder follows the Tailwind CSS naming convention: ten levels from the very
//! light 50 to the very dark 900, with the base color itself at 500.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::RgbColor;

/// How each ladder level is derived from the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Lighten(u8),
    Base,
    Darken(u8),
}

/// Fixed level-to-tone mapping, lightest first. Must not be reordered.
const LADDER: [(u16, Tone); 10] = [
    (50, Tone::Lighten(90)),
    (100, Tone::Lighten(70)),
    (200, Tone::Lighten(50)),
    (300, Tone::Lighten(30)),
    (400, Tone::Lighten(10)),
    (500, Tone::Base),
    (600, Tone::Darken(15)),
    (700, Tone::Darken(30)),
    (800, Tone::Darken(45)),
    (900, Tone::Darken(60)),
];

/// Level of the base color within a ladder.
pub const BASE_LEVEL: u16 = 500;

/// A single shade of a ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    /// Shade level (50, 100, ..., 900).
    pub level: u16,
    /// Color at this level.
    pub color: RgbColor,
}

impl Shade {
    /// Level as the string label used in tokens ("50", "500", ...).
    #[must_use]
    pub fn label(&self) -> String {
        self.level.to_string()
    }
}

/// Ten shades of one base color, ordered from lightest (50) to darkest (900).
///
/// Ladders are immutable; pick a new base color to get a new ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeLadder {
    shades: Vec<Shade>,
}

impl ShadeLadder {
    /// Derives the full ladder from `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use univassist::models::{RgbColor, ShadeLadder};
    ///
    /// let base = RgbColor::from_hex("#3B82F6").unwrap();
    /// let ladder = ShadeLadder::generate(base);
    /// assert_eq!(ladder.get("500"), Some(base));
    /// assert_eq!(ladder.len(), 10);
    /// ```
    #[must_use]
    pub fn generate(base: RgbColor) -> Self {
        let shades = LADDER
            .iter()
            .map(|&(level, tone)| Shade {
                level,
                color: match tone {
                    Tone::Lighten(percent) => base.lighten(percent),
                    Tone::Base => base,
                    Tone::Darken(percent) => base.darken(percent),
                },
            })
            .collect();

        tracing::debug!(base = %base, "Generated shade ladder");
        Self { shades }
    }

    /// The seed color (level 500).
    #[must_use]
    pub fn base(&self) -> RgbColor {
        self.level(BASE_LEVEL).unwrap_or_default()
    }

    /// Looks up a shade by its label, e.g. `"700"`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<RgbColor> {
        label.parse().ok().and_then(|level| self.level(level))
    }

    /// Looks up a shade by its numeric level.
    #[must_use]
    pub fn level(&self, level: u16) -> Option<RgbColor> {
        self.shades
            .iter()
            .find(|s| s.level == level)
            .map(|s| s.color)
    }

    /// Iterates the shades from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = &Shade> {
        self.shades.iter()
    }

    /// Number of shades (always 10).
    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

impl Serialize for ShadeLadder {
    /// Serializes as an ordered `{"50": "#RRGGBB", ...}` map.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for shade in &self.shades {
            map.serialize_entry(&shade.label(), &shade.color)?;
        }
        map.end()
    }
}
