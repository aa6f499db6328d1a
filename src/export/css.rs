//! CSS custom property export.

use std::fmt::Write as _;

use super::ladder_entries;
use crate::models::{DesignSystem, HexCase};

/// Generates a `:root` block with color and font custom properties.
///
/// The trailing usage example pairs primary-500 with its validated text color.
pub fn generate_css_variables(system: &DesignSystem, case: HexCase) -> String {
    let mut css = String::from(":root {\n");

    css.push_str("  /* Primary Colors */\n");
    for (label, hex) in ladder_entries(&system.primary, case) {
        let _ = writeln!(css, "  --primary-{label}: {hex};");
    }

    css.push_str("\n  /* Secondary Colors */\n");
    for (label, hex) in ladder_entries(&system.secondary, case) {
        let _ = writeln!(css, "  --secondary-{label}: {hex};");
    }

    css.push_str("\n  /* Accessibility */\n");
    let _ = writeln!(
        css,
        "  --text-on-primary: {};",
        system.accessibility.text.to_hex_case(case)
    );

    css.push_str("\n  /* Typography */\n");
    let _ = writeln!(css, "  --font-heading: '{}', serif;", system.fonts.heading);
    let _ = writeln!(css, "  --font-body: '{}', sans-serif;", system.fonts.body);
    let _ = writeln!(css, "  --font-korean: '{}', sans-serif;", system.fonts.korean);
    css.push_str("}\n\n");

    css.push_str("/* Usage Example */\n");
    css.push_str(".button-primary {\n");
    css.push_str("  background: var(--primary-500);\n");
    css.push_str("  color: var(--text-on-primary);\n");
    css.push_str("  font-family: var(--font-body);\n");
    css.push_str("}\n");

    css
}
