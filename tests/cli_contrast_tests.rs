//! End-to-end tests for `univassist contrast`, `complement` and `palette`.

mod fixtures;
use fixtures::*;

use tempfile::TempDir;

#[test]
fn test_contrast_black_on_white() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["contrast", "#FFFFFF", "#000000", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["ratio"], 21.0);
    assert_eq!(result["level"], "AAA");
    assert_eq!(result["passes_aa"], true);
    assert_eq!(result["passes_aaa"], true);
    assert_eq!(result["background_luminance"], 1.0);
}

#[test]
fn test_contrast_gray_passes_aa_only() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["contrast", "#FFF", "#767676", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["ratio"], 4.54);
    assert_eq!(result["level"], "AA");
    assert_eq!(result["passes_aa"], true);
    assert_eq!(result["passes_aaa"], false);
}

#[test]
fn test_contrast_human_output() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["contrast", "3B82F6", "FFFFFF"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Contrast: 3.67:1"), "stdout: {stdout}");
    assert!(stdout.contains("Level:    Fail"));
    assert!(stdout.contains("✗ AA"));
}

#[test]
fn test_contrast_invalid_color_exits_1() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["contrast", "#GGGGGG", "#000000"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("#GGGGGG"),
        "Error should name the rejected input. stderr: {stderr}"
    );
}

#[test]
fn test_complement_json() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["complement", "#FF0000", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["color"], "#FF0000");
    assert_eq!(result["complement"], "#00FFFF");
}

#[test]
fn test_complement_of_gray_is_unchanged() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["complement", "#808080"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "#808080 -> #808080");
}

#[test]
fn test_palette_json_ladder() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["palette", "#1E293B", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    let shades = result["shades"].as_array().expect("shades array");
    let levels: Vec<&str> = shades
        .iter()
        .map(|s| s["level"].as_str().unwrap())
        .collect();
    assert_eq!(
        levels,
        ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]
    );

    let hexes: Vec<&str> = shades.iter().map(|s| s["hex"].as_str().unwrap()).collect();
    assert_eq!(
        hexes,
        [
            "#FFFFFF", "#D1DCEE", "#9DA8BA", "#6B7688", "#384355", "#1E293B", "#000315",
            "#000000", "#000000", "#000000"
        ]
    );
}

#[test]
fn test_palette_lowercase_flag() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["palette", "#3B82F6", "--lowercase"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("500  #3b82f6"), "stdout: {stdout}");
    assert!(stdout.contains("400  #559cff"));
}

#[test]
fn test_palette_respects_configured_case() {
    let config_dir = TempDir::new().unwrap();
    let set = run(&["config", "set", "--hex-case", "lower"], config_dir.path());
    assert_eq!(set.status.code(), Some(0));

    let output = run(&["palette", "#3B82F6", "--json"], config_dir.path());
    let result = stdout_json(&output);
    assert_eq!(result["base"], "#3b82f6");
}

#[test]
fn test_contrast_font_size_conversion() {
    let config_dir = TempDir::new().unwrap();
    let output = run(
        &["contrast", "#FFFFFF", "#333333", "--font-pt", "12"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Font size: 12pt = 16.0px / 1.00rem / 16sp"),
        "stdout: {stdout}"
    );

    let output = run(
        &["contrast", "#FFFFFF", "#333333", "--font-pt", "12", "--json"],
        config_dir.path(),
    );
    let result = stdout_json(&output);
    assert_eq!(result["font_size"]["pt"], 12.0);
    assert_eq!(result["font_size"]["sp"], 16);
}

#[test]
fn test_contrast_without_font_size_omits_field() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["contrast", "#FFFFFF", "#333333", "--json"], config_dir.path());

    let result = stdout_json(&output);
    assert!(result.get("font_size").is_none());
}

#[test]
fn test_contrast_invalid_font_size_exits_1() {
    let config_dir = TempDir::new().unwrap();
    let output = run(
        &["contrast", "#FFFFFF", "#333333", "--font-pt", "0"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Font size"));
}
