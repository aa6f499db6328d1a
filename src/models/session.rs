//! Design session state carried between wizard steps.
//!
//! A session is a plain value. Every step returns a new session instead of
//! editing a shared one, so each derived artifact can be traced to the inputs
//! it was built from.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Default background for the contrast lab.
pub const DEFAULT_LAB_BACKGROUND: RgbColor = RgbColor::new(0xF5, 0xF5, 0xF5);

/// Default text color for the contrast lab.
pub const DEFAULT_LAB_TEXT: RgbColor = RgbColor::new(0x33, 0x33, 0x33);

/// Mood slider positions, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    /// 0 = sharp, 100 = soft
    pub soft: u8,
    /// 0 = dynamic, 100 = static
    #[serde(rename = "static")]
    pub still: u8,
}

impl Mood {
    /// Creates a mood, capping both axes at 100.
    #[must_use]
    pub fn new(soft: u8, still: u8) -> Self {
        Self {
            soft: soft.min(100),
            still: still.min(100),
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::new(50, 50)
    }
}

/// Background/text pair picked in the contrast lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabColors {
    /// Lab background color
    pub background: RgbColor,
    /// Lab text color
    pub text: RgbColor,
}

impl Default for LabColors {
    fn default() -> Self {
        Self {
            background: DEFAULT_LAB_BACKGROUND,
            text: DEFAULT_LAB_TEXT,
        }
    }
}

/// Everything the user has chosen so far.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSession {
    /// Service purpose (e.g. "e-commerce")
    pub service: String,
    /// Target platform (e.g. "iOS", "Web")
    pub platform: String,
    /// Mood slider positions
    pub mood: Mood,
    /// Selected mood keyword
    pub keyword: String,
    /// Primary brand color, if one was picked
    pub primary_color: Option<RgbColor>,
    /// Contrast lab pair
    pub lab_colors: LabColors,
}

impl DesignSession {
    /// Starts an empty session with default lab colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a session with the service purpose set.
    #[must_use]
    pub fn with_service(self, service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..self
        }
    }

    /// Returns a session with the platform set.
    #[must_use]
    pub fn with_platform(self, platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            ..self
        }
    }

    /// Returns a session with new mood slider positions.
    #[must_use]
    pub fn with_mood(self, mood: Mood) -> Self {
        Self { mood, ..self }
    }

    /// Returns a session with the mood keyword set.
    #[must_use]
    pub fn with_keyword(self, keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..self
        }
    }

    /// Returns a session with the primary color set.
    #[must_use]
    pub fn with_primary_color(self, color: RgbColor) -> Self {
        Self {
            primary_color: Some(color),
            ..self
        }
    }

    /// Returns a session with a new lab pair.
    #[must_use]
    pub fn with_lab_colors(self, background: RgbColor, text: RgbColor) -> Self {
        Self {
            lab_colors: LabColors { background, text },
            ..self
        }
    }

    /// Color the design system is seeded from.
    ///
    /// Falls back to the lab background when no primary color was picked.
    #[must_use]
    pub fn seed_color(&self) -> RgbColor {
        self.primary_color.unwrap_or(self.lab_colors.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_return_new_sessions() {
        let start = DesignSession::new();
        let next = start
            .clone()
            .with_service("Portfolio")
            .with_platform("Web")
            .with_keyword("calm");

        assert_eq!(start.service, "");
        assert_eq!(next.service, "Portfolio");
        assert_eq!(next.platform, "Web");
        assert_eq!(next.keyword, "calm");
        assert_eq!(next.lab_colors, LabColors::default());
    }

    #[test]
    fn test_seed_color_falls_back_to_lab_background() {
        let session = DesignSession::new();
        assert_eq!(session.seed_color(), DEFAULT_LAB_BACKGROUND);

        let blue = RgbColor::new(59, 130, 246);
        assert_eq!(session.with_primary_color(blue).seed_color(), blue);
    }

    #[test]
    fn test_mood_is_capped() {
        let mood = Mood::new(150, 20);
        assert_eq!(mood.soft, 100);
        assert_eq!(mood.still, 20);
    }

    #[test]
    fn test_session_json_shape() {
        let session = DesignSession::new()
            .with_primary_color(RgbColor::new(59, 130, 246))
            .with_mood(Mood::new(30, 70));
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["primaryColor"], "#3B82F6");
        assert_eq!(json["mood"]["static"], 70);
        assert_eq!(json["labColors"]["background"], "#F5F5F5");
    }
}
