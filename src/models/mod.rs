//! Data models for colors, shade ladders, sessions and design systems.
//!
//! Models are plain values: they are recomputed from their inputs and never
//! mutated in place.

pub mod design_system;
pub mod font_size;
pub mod rgb;
pub mod session;
pub mod shade_ladder;

// Re-export all model types
pub use design_system::DesignSystem;
pub use font_size::FontSize;
pub use rgb::{ColorError, HexCase, RgbColor};
pub use session::{DesignSession, LabColors, Mood};
pub use shade_ladder::{Shade, ShadeLadder, BASE_LEVEL};
