//! Red-green deficiency simulation command.

use clap::Args;
use serde::Serialize;

use crate::accessibility::{SimulatedPair, UniversalPair};
use crate::cli::common::{mark, parse_color, print_json, CliResult};

/// Show how a pair looks under red-green deficiency and its universal variant
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Background color
    #[arg(value_name = "BG")]
    pub background: String,

    /// Text color
    #[arg(value_name = "FG")]
    pub foreground: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SimulateOutput {
    simulation: SimulatedPair,
    universal: UniversalPair,
}

impl SimulateArgs {
    /// Execute the simulate command.
    pub fn execute(&self) -> CliResult<()> {
        let background = parse_color(&self.background)?;
        let foreground = parse_color(&self.foreground)?;

        let output = SimulateOutput {
            simulation: SimulatedPair::analyze(background, foreground),
            universal: UniversalPair::from_pair(background, foreground),
        };

        if self.json {
            return print_json(&output);
        }

        let sim = &output.simulation;
        println!("Typical vision");
        println!("  {} on {}: {} ({})", sim.text, sim.background, sim.ratio, sim.level);
        println!("Red-green deficiency");
        println!(
            "  {} on {}: {} ({})",
            sim.simulated_text, sim.simulated_background, sim.simulated_ratio, sim.simulated_level
        );
        if sim.needs_non_color_cue {
            println!("  {} Pair drops below AA; pair color with icons or labels", mark(false));
        } else {
            println!("  {} Pair stays readable", mark(true));
        }

        let universal = &output.universal;
        println!("Universal pair");
        println!(
            "  {} on {}: {} ({})",
            universal.text, universal.background, universal.ratio, universal.level
        );
        Ok(())
    }
}
