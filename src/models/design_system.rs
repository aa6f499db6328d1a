//! Complete design system assembled from a session.

use serde::Serialize;

use super::{DesignSession, RgbColor, ShadeLadder};
use crate::accessibility::{choose, AccessiblePair, SimulatedPair, UniversalPair};
use crate::services::suggestion::{FontRecommendation, GuideResponse};

/// Fonts, color ladders and accessibility data for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignSystem {
    /// Session the system was built from
    pub session: DesignSession,
    /// Font pairing
    pub fonts: FontRecommendation,
    /// Ladder seeded from the primary color
    pub primary: ShadeLadder,
    /// Ladder seeded from the complementary color
    pub secondary: ShadeLadder,
    /// Text color on primary-500, validated
    pub accessibility: AccessiblePair,
    /// Lab pair under the red-green simulation
    pub simulation: SimulatedPair,
    /// Lab pair optimized for color-vision deficiency
    pub universal: UniversalPair,
}

impl DesignSystem {
    /// Builds the design system.
    ///
    /// The primary ladder is seeded from [`DesignSession::seed_color`] and the
    /// secondary ladder from its complement. When a `guide` is given, its
    /// suggested text color is validated against primary-500; otherwise the
    /// better of black and white is used.
    #[must_use]
    pub fn build(
        session: DesignSession,
        fonts: FontRecommendation,
        guide: Option<&GuideResponse>,
    ) -> Self {
        let seed = session.seed_color();
        let primary = ShadeLadder::generate(seed);
        let secondary = ShadeLadder::generate(seed.complementary());

        let suggested = guide.map(|g| g.accessibility.text_color_on_primary);
        let accessibility = choose(primary.base(), suggested);

        let lab = session.lab_colors;
        let simulation = SimulatedPair::analyze(lab.background, lab.text);
        let universal = UniversalPair::from_pair(lab.background, lab.text);

        tracing::debug!(
            primary = %seed,
            secondary = %secondary.base(),
            text = %accessibility.text,
            corrected = accessibility.corrected,
            "Built design system"
        );

        Self {
            session,
            fonts,
            primary,
            secondary,
            accessibility,
            simulation,
            universal,
        }
    }

    /// Primary-500, the main brand color.
    #[must_use]
    pub fn primary_color(&self) -> RgbColor {
        self.primary.base()
    }

    /// Secondary-500.
    #[must_use]
    pub fn secondary_color(&self) -> RgbColor {
        self.secondary.base()
    }
}
