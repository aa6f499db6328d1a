//! UNIVASSIST - accessible design-system assistant
//!
//! Command-line front end for contrast checks, shade ladders, red-green
//! simulation, text color validation and design-system exports.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use univassist::cli::{
    CliError, ComplementArgs, ConfigArgs, ContrastArgs, ExportArgs, GuideArgs, PairArgs,
    PaletteArgs, SimulateArgs,
};
use univassist::constants::{APP_BINARY_NAME, APP_NAME};

/// UNIVASSIST - accessible color and type system assistant
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Measure the WCAG contrast ratio of two colors
    Contrast(ContrastArgs),
    /// Generate the 50-900 shade ladder for a base color
    Palette(PaletteArgs),
    /// Print the complementary color
    Complement(ComplementArgs),
    /// Simulate red-green deficiency for a color pair
    Simulate(SimulateArgs),
    /// Pick or validate a text color for a background
    Pair(PairArgs),
    /// Validate a saved color guide response
    Guide(GuideArgs),
    /// Export a design system
    Export(ExportArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Contrast(args) => args.execute(),
            Self::Palette(args) => args.execute(),
            Self::Complement(args) => args.execute(),
            Self::Simulate(args) => args.execute(),
            Self::Pair(args) => args.execute(),
            Self::Guide(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}
