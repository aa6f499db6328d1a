//! Accessible text color command.

use clap::Args;

use crate::accessibility::{choose, AccessiblePair};
use crate::cli::common::{mark, parse_color, print_json, CliResult};

/// Pick an AA-compliant text color for a background
#[derive(Debug, Args)]
pub struct PairArgs {
    /// Background color
    #[arg(value_name = "BG")]
    pub background: String,

    /// Suggested text color to validate
    #[arg(long, value_name = "FG")]
    pub suggested: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PairArgs {
    /// Execute the pair command.
    pub fn execute(&self) -> CliResult<()> {
        let background = parse_color(&self.background)?;
        let suggested = self.suggested.as_deref().map(parse_color).transpose()?;

        let pair = choose(background, suggested);

        if self.json {
            return print_json(&pair);
        }

        print_pair(&pair, suggested.is_some());
        Ok(())
    }
}

/// Prints a policy outcome in human-readable form.
pub(crate) fn print_pair(pair: &AccessiblePair, had_suggestion: bool) {
    println!("Background: {}", pair.background);
    println!("Text:       {}", pair.text);
    println!("Contrast:   {} ({})", pair.ratio, pair.level);
    println!("  {} AA  (4.5:1)", mark(pair.ratio.passes_aa()));
    if pair.corrected {
        println!("Suggested text color failed AA and was replaced");
    } else if had_suggestion {
        println!("Suggested text color accepted");
    }
}
