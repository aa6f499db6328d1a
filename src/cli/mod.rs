//! CLI command handlers for UNIVASSIST.
//!
//! Each command is a clap `Args` struct with an `execute` method returning
//! [`CliResult`]; `main` maps failures to an [`ExitCode`].

pub mod common;
pub mod complement;
pub mod config;
pub mod contrast;
pub mod export;
pub mod guide;
pub mod pair;
pub mod palette;
pub mod simulate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use complement::ComplementArgs;
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use export::ExportArgs;
pub use guide::GuideArgs;
pub use pair::PairArgs;
pub use palette::PaletteArgs;
pub use simulate::SimulateArgs;
