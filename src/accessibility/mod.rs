//! Accessibility checks for color pairs.
//!
//! All contrast math lives here: WCAG luminance and ratios, compliance levels,
//! the text-color policy, and the red-green deficiency simulator.

pub mod cvd;
pub mod luminance;
pub mod policy;

pub use cvd::{optimize_for_deficiency, simulate_red_green, SimulatedPair, UniversalPair};
pub use luminance::{contrast_ratio, relative_luminance, ContrastRatio};
pub use policy::{
    choose, classify, AccessiblePair, ComplianceLevel, AAA_NORMAL_TEXT, AA_NORMAL_TEXT,
};
