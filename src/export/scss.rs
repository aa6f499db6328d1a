//! SCSS variable export.

use std::fmt::Write as _;

use super::ladder_entries;
use crate::models::{DesignSystem, HexCase};

/// Generates `$primary-*`, `$secondary-*` and `$font-*` variables.
pub fn generate_scss_variables(system: &DesignSystem, case: HexCase) -> String {
    let mut scss = String::from("// Primary Colors\n");
    for (label, hex) in ladder_entries(&system.primary, case) {
        let _ = writeln!(scss, "$primary-{label}: {hex};");
    }

    scss.push_str("\n// Secondary Colors\n");
    for (label, hex) in ladder_entries(&system.secondary, case) {
        let _ = writeln!(scss, "$secondary-{label}: {hex};");
    }

    scss.push_str("\n// Accessibility\n");
    let _ = writeln!(
        scss,
        "$text-on-primary: {};",
        system.accessibility.text.to_hex_case(case)
    );

    scss.push_str("\n// Typography\n");
    let _ = writeln!(scss, "$font-heading: '{}', serif;", system.fonts.heading);
    let _ = writeln!(scss, "$font-body: '{}', sans-serif;", system.fonts.body);
    let _ = writeln!(scss, "$font-korean: '{}', sans-serif;", system.fonts.korean);

    scss.push_str("\n// Usage Example\n");
    scss.push_str(".button-primary {\n");
    scss.push_str("  background: $primary-500;\n");
    scss.push_str("  color: $text-on-primary;\n");
    scss.push_str("  font-family: $font-body;\n");
    scss.push_str("}\n");

    scss
}
