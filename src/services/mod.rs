//! Service layer for business logic.
//!
//! The suggestion module holds the contract of the external AI service and the
//! validation applied to its answers.

pub mod suggestion;

// Re-export commonly used types and functions
pub use suggestion::{
    parse_font_response, parse_guide_response, parse_text_color_response, FontRecommendation,
    GuideResponse, SuggestionError, TextColorSuggestion,
};
