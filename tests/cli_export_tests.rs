//! End-to-end tests for `univassist export`.

mod fixtures;
use fixtures::*;

use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_css_to_stdout() {
    let config_dir = TempDir::new().unwrap();
    let output = run(
        &["export", "--primary", "#3B82F6", "--format", "css"],
        config_dir.path(),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(":root {"));
    assert!(stdout.contains("--primary-500: #3B82F6;"));
    assert!(stdout.contains("--primary-400: #559CFF;"));
    assert!(stdout.contains("--text-on-primary: #000000;"));
    assert!(stdout.contains("--font-heading: 'Playfair Display', serif;"));
}

#[test]
fn test_export_json_snapshot_with_fonts_and_guide() {
    let config_dir = TempDir::new().unwrap();
    let fonts = write_file(config_dir.path(), "fonts.json", FONT_RESPONSE);
    let guide = write_file(config_dir.path(), "guide.json", GUIDE_RESPONSE);

    let output = run(
        &[
            "export",
            "--primary",
            "#3B82F6",
            "--fonts",
            fonts.to_str().unwrap(),
            "--guide",
            guide.to_str().unwrap(),
            "--service",
            "Blog",
            "--platform",
            "Web",
            "--keyword",
            "calm",
            "--format",
            "json",
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);

    assert_eq!(result["metadata"]["service"], "Blog");
    assert_eq!(result["metadata"]["platform"], "Web");
    assert_eq!(result["metadata"]["keyword"], "calm");
    assert!(result["metadata"]["generated"].as_str().unwrap().ends_with('Z'));

    assert_eq!(result["fonts"]["heading"], "Merriweather");
    assert_eq!(result["fonts"]["korean"], "Nanum Gothic");

    assert_eq!(result["colors"]["primary"]["500"], "#3B82F6");
    assert_eq!(result["colors"]["primary"]["50"], "#FFFFFF");
    assert_eq!(result["colors"]["primary"]["900"], "#00005D");

    assert_eq!(result["accessibility"]["textColor"], "#000000");
    assert_eq!(result["accessibility"]["contrastRatio"], 5.7);
    assert_eq!(result["accessibility"]["corrected"], true);
    assert_eq!(result["universal"]["background"], "#FFFFFF");
}

#[test]
fn test_export_markdown_to_file() {
    let config_dir = TempDir::new().unwrap();
    let out_file = config_dir.path().join("reports").join("guide.md");

    let output = run(
        &[
            "export",
            "--primary",
            "#1E293B",
            "--format",
            "markdown",
            "--output",
            out_file.to_str().unwrap(),
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let content = fs::read_to_string(&out_file).expect("Report should be written");
    assert!(content.starts_with("# Design System Guide"));
    assert!(content.contains("| 500 | `#1E293B` |"));
    assert!(content.contains("- Text: `#FFFFFF`"));
}

#[test]
fn test_export_save_uses_configured_defaults() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = config_dir.path().join("exports");

    let set = run(
        &[
            "config",
            "set",
            "--format",
            "tailwind",
            "--hex-case",
            "lower",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_eq!(set.status.code(), Some(0));

    let output = run(&["export", "--primary", "#3B82F6", "--save"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(out_dir.join("design-system.js")).unwrap();
    assert!(content.starts_with("module.exports = {"));
    assert!(content.contains("500: '#3b82f6',"));
}

#[test]
fn test_export_invalid_format_exits_1() {
    let config_dir = TempDir::new().unwrap();
    let output = run(
        &["export", "--primary", "#3B82F6", "--format", "docx"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("docx"));
}

#[test]
fn test_export_empty_font_field_exits_1() {
    let config_dir = TempDir::new().unwrap();
    let fonts = write_file(
        config_dir.path(),
        "fonts.json",
        r#"{"heading": "Merriweather", "body": " ", "korean": "Nanum Gothic"}"#,
    );

    let output = run(
        &["export", "--primary", "#3B82F6", "--fonts", fonts.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("body"));
}
