//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::export::ExportFormat;
use crate::models::session::{DEFAULT_LAB_BACKGROUND, DEFAULT_LAB_TEXT};
use crate::models::{HexCase, LabColors, RgbColor};

/// Palette output preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaletteConfig {
    /// Case of emitted hex strings
    #[serde(default)]
    pub hex_case: HexCase,
}

/// Default contrast lab colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabConfig {
    /// Lab background color
    #[serde(default = "default_lab_background")]
    pub background: RgbColor,
    /// Lab text color
    #[serde(default = "default_lab_text")]
    pub text: RgbColor,
}

fn default_lab_background() -> RgbColor {
    DEFAULT_LAB_BACKGROUND
}

fn default_lab_text() -> RgbColor {
    DEFAULT_LAB_TEXT
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            background: default_lab_background(),
            text: default_lab_text(),
        }
    }
}

impl LabConfig {
    /// Lab pair as session colors.
    #[must_use]
    pub const fn colors(&self) -> LabColors {
        LabColors {
            background: self.background,
            text: self.text,
        }
    }
}

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Format used when `export` is run without `--format`
    #[serde(default)]
    pub format: ExportFormat,
    /// Directory exports are written to when no output file is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/UNIVASSIST/config.toml`
/// - macOS: `~/Library/Application Support/UNIVASSIST/config.toml`
/// - Windows: `%APPDATA%\UNIVASSIST\config.toml`
///
/// Setting `UNIVASSIST_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - lab background and text must differ
/// - `output_dir` must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Palette output preferences
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Contrast lab defaults
    #[serde(default)]
    pub lab: LabConfig,
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: PaletteConfig::default(),
            lab: LabConfig::default(),
            export: ExportConfig::default(),
        }
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/UNIVASSIST/`
    /// - macOS: `~/Library/Application Support/UNIVASSIST/`
    /// - Windows: `%APPDATA%\UNIVASSIST\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "Saved config");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.lab.background == self.lab.text {
            anyhow::bail!(
                "Lab background and text are both {}; text would be invisible",
                self.lab.background
            );
        }

        if self.export.output_dir.as_os_str().is_empty() {
            anyhow::bail!("Export output_dir must not be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.palette.hex_case, HexCase::Upper);
        assert_eq!(config.lab.background.to_hex(), "#F5F5F5");
        assert_eq!(config.lab.text.to_hex(), "#333333");
        assert_eq!(config.export.format, ExportFormat::Css);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_identical_lab_colors() {
        let mut config = Config::new();
        config.lab.text = config.lab.background;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.palette.hex_case = HexCase::Lower;
        config.lab.background = RgbColor::new(0x1E, 0x29, 0x3B);
        config.export.format = ExportFormat::Tailwind;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[palette]\nhex_case = \"lower\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.palette.hex_case, HexCase::Lower);
        assert_eq!(loaded.lab, LabConfig::default());
        assert_eq!(loaded.export, ExportConfig::default());
    }

    #[test]
    fn test_invalid_color_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[lab]\nbackground = \"#GGGGGG\"\n").unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
