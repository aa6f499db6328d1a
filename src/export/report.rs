//! Markdown design-system report.
//!
//! A shareable document summarizing the fonts, both shade ladders, and the
//! accessibility outcome of the design system.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::accessibility::AA_NORMAL_TEXT;
use crate::models::{DesignSystem, HexCase, ShadeLadder};

fn google_fonts_link(family: &str) -> String {
    format!(
        "https://fonts.google.com/specimen/{}",
        family.trim().replace(' ', "+")
    )
}

fn write_ladder_table(report: &mut String, title: &str, ladder: &ShadeLadder, case: HexCase) {
    let _ = writeln!(report, "### {title}\n");
    report.push_str("| Shade | Hex |\n");
    report.push_str("|-------|-----|\n");
    for shade in ladder.iter() {
        let _ = writeln!(
            report,
            "| {} | `{}` |",
            shade.label(),
            shade.color.to_hex_case(case)
        );
    }
    report.push('\n');
}

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not set)"
    } else {
        value
    }
}

/// Generates the Markdown report.
pub fn generate_report(system: &DesignSystem, case: HexCase, generated: DateTime<Utc>) -> String {
    let mut report = String::new();
    let session = &system.session;

    report.push_str("# Design System Guide\n\n");
    let _ = writeln!(report, "Generated: {}\n", generated.format("%Y-%m-%d"));
    let _ = writeln!(report, "- Service: {}", or_unset(&session.service));
    let _ = writeln!(report, "- Platform: {}", or_unset(&session.platform));
    let _ = writeln!(report, "- Keyword: {}\n", or_unset(&session.keyword));

    report.push_str("## 1. Typography\n\n");
    for (role, family) in [
        ("Headings, titles, emphasis", &system.fonts.heading),
        ("Body copy, paragraphs", &system.fonts.body),
        ("Korean headings and body", &system.fonts.korean),
    ] {
        let _ = writeln!(
            report,
            "- **{role}**: {family} ([Google Fonts]({}))",
            google_fonts_link(family)
        );
    }
    if let Some(reasoning) = system.fonts.reasoning.as_deref() {
        let _ = writeln!(report, "\n> {}", reasoning.trim());
    }
    report.push('\n');

    report.push_str("## 2. Color Palette\n\n");
    write_ladder_table(&mut report, "Primary Shades", &system.primary, case);
    write_ladder_table(&mut report, "Secondary Shades", &system.secondary, case);

    report.push_str("### Color Usage Guide\n\n");
    report.push_str("- Primary 500: main buttons, links, highlighted elements\n");
    report.push_str("- Primary 100-300: backgrounds, cards, subtle areas\n");
    report.push_str("- Primary 600-900: hover states, strong text\n");
    report.push_str("- Secondary: secondary buttons, accents, dividers\n\n");

    let pair = &system.accessibility;
    report.push_str("## 3. Accessibility\n\n");
    let _ = writeln!(report, "- Background (Primary 500): `{}`", pair.background.to_hex_case(case));
    let _ = writeln!(report, "- Text: `{}`", pair.text.to_hex_case(case));
    let _ = writeln!(
        report,
        "- Contrast: {} (WCAG AA {})",
        pair.ratio,
        if pair.ratio.value() >= AA_NORMAL_TEXT {
            "pass"
        } else {
            "needs improvement"
        }
    );
    let _ = writeln!(report, "- Level: {}", pair.level);
    if pair.corrected {
        report.push_str("- The suggested text color failed AA and was replaced.\n");
    }
    report.push('\n');

    let universal = &system.universal;
    let simulation = &system.simulation;
    report.push_str("## 4. Universal Color System\n\n");
    report.push_str("### Typical vision\n\n");
    let _ = writeln!(report, "- Background: `{}`", simulation.background.to_hex_case(case));
    let _ = writeln!(report, "- Text: `{}`", simulation.text.to_hex_case(case));
    let _ = writeln!(report, "- Contrast: {}\n", simulation.ratio);
    report.push_str("### Color-vision deficiency\n\n");
    let _ = writeln!(report, "- Background: `{}`", universal.background.to_hex_case(case));
    let _ = writeln!(report, "- Text: `{}`", universal.text.to_hex_case(case));
    let _ = writeln!(report, "- Contrast: {} ({})", universal.ratio, universal.level);
    if simulation.needs_non_color_cue {
        report.push_str(
            "- Under red-green simulation the pair drops below AA; add icons, \
             patterns or labels alongside color.\n",
        );
    }

    report
}
