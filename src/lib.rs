//! UNIVASSIST Library
//!
//! Color science behind the UNIVASSIST design-system assistant: hex decoding,
//! WCAG contrast, shade ladders, red-green deficiency simulation, and the
//! policy that keeps every emitted text color at AA or better. Exporters turn
//! the assembled design system into CSS, SCSS, Tailwind, JSON or Markdown.

// Module declarations
pub mod accessibility;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
