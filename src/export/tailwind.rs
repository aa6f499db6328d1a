//! Tailwind CSS config export.

use std::fmt::Write as _;

use super::ladder_entries;
use crate::models::{DesignSystem, HexCase, ShadeLadder};

fn write_palette(config: &mut String, name: &str, ladder: &ShadeLadder, case: HexCase) {
    let _ = writeln!(config, "        {name}: {{");
    for (label, hex) in ladder_entries(ladder, case) {
        let _ = writeln!(config, "          {label}: '{hex}',");
    }
    config.push_str("        },\n");
}

/// Generates a `tailwind.config.js` extending colors and font families.
pub fn generate_tailwind_config(system: &DesignSystem, case: HexCase) -> String {
    let mut config = String::from("module.exports = {\n");
    config.push_str("  theme: {\n");
    config.push_str("    extend: {\n");
    config.push_str("      colors: {\n");
    write_palette(&mut config, "primary", &system.primary, case);
    write_palette(&mut config, "secondary", &system.secondary, case);
    let _ = writeln!(
        config,
        "        'on-primary': '{}',",
        system.accessibility.text.to_hex_case(case)
    );
    config.push_str("      },\n");
    config.push_str("      fontFamily: {\n");
    let _ = writeln!(config, "        heading: ['{}', 'serif'],", system.fonts.heading);
    let _ = writeln!(config, "        body: ['{}', 'sans-serif'],", system.fonts.body);
    let _ = writeln!(config, "        korean: ['{}', 'sans-serif'],", system.fonts.korean);
    config.push_str("      },\n");
    config.push_str("    },\n");
    config.push_str("  },\n");
    config.push_str("}\n");
    config
}
