//! Font size expressed in points and converted to platform units.

use serde::Serialize;

/// CSS pixels per typographic point, as used by the lab preview.
pub const PX_PER_PT: f64 = 1.333;

/// Root font size in pixels that `rem` is measured against.
pub const ROOT_FONT_PX: f64 = 16.0;

/// Point size used when none is given.
pub const DEFAULT_FONT_PT: f64 = 12.0;

/// A font size in points with its web and Android equivalents.
///
/// # Examples
///
/// ```
/// use univassist::models::FontSize;
///
/// let size = FontSize::new(12.0).unwrap();
/// assert_eq!(size.px_label(), "16.0px");
/// assert_eq!(size.rem_label(), "1.00rem");
/// assert_eq!(size.sp(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize {
    pt: f64,
}

impl FontSize {
    /// Creates a font size, or `None` unless `pt` is finite and positive.
    #[must_use]
    pub fn new(pt: f64) -> Option<Self> {
        (pt.is_finite() && pt > 0.0).then_some(Self { pt })
    }

    #[must_use]
    pub const fn pt(self) -> f64 {
        self.pt
    }

    #[must_use]
    pub fn px(self) -> f64 {
        self.pt * PX_PER_PT
    }

    #[must_use]
    pub fn rem(self) -> f64 {
        self.px() / ROOT_FONT_PX
    }

    /// Android scale-independent pixels, rounded to a whole number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sp(self) -> u32 {
        self.px().round() as u32
    }

    /// Pixels with one decimal, e.g. `16.0px`.
    #[must_use]
    pub fn px_label(self) -> String {
        format!("{:.1}px", self.px())
    }

    /// Rem with two decimals, e.g. `1.00rem`.
    #[must_use]
    pub fn rem_label(self) -> String {
        format!("{:.2}rem", self.rem())
    }

    #[must_use]
    pub fn sp_label(self) -> String {
        format!("{}sp", self.sp())
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self { pt: DEFAULT_FONT_PT }
    }
}

/// Wire shape: every unit as a number.
impl Serialize for FontSize {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FontSize", 4)?;
        state.serialize_field("pt", &self.pt)?;
        state.serialize_field("px", &self.px())?;
        state.serialize_field("rem", &self.rem())?;
        state.serialize_field("sp", &self.sp())?;
        state.end()
    }
}
