//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_GROUP_NAME, DEFAULT_UNIT_SPACING_MM};
use crate::models::Spacing;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "KLEPLACER_CONFIG_DIR";

/// Default physical spacing per keyboard unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingConfig {
    /// Horizontal spacing in mm per unit
    #[serde(default = "default_unit_spacing")]
    pub horizontal: f64,
    /// Vertical spacing in mm per unit
    #[serde(default = "default_unit_spacing")]
    pub vertical: f64,
}

fn default_unit_spacing() -> f64 {
    DEFAULT_UNIT_SPACING_MM
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_UNIT_SPACING_MM,
            vertical: DEFAULT_UNIT_SPACING_MM,
        }
    }
}

impl From<SpacingConfig> for Spacing {
    fn from(config: SpacingConfig) -> Self {
        Self::new(config.horizontal, config.vertical)
    }
}

/// Placement output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Name of the container grouping placed footprints
    #[serde(default = "default_group_name")]
    pub group_name: String,
    /// Hide the original footprint after placing copies
    #[serde(default = "default_hide_template")]
    pub hide_template: bool,
}

fn default_group_name() -> String {
    DEFAULT_GROUP_NAME.to_string()
}

const fn default_hide_template() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            group_name: default_group_name(),
            hide_template: default_hide_template(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KlePlacer/config.toml`
/// - macOS: `~/Library/Application Support/KlePlacer/config.toml`
/// - Windows: `%APPDATA%\KlePlacer\config.toml`
///
/// `KLEPLACER_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - spacing values must be finite (zero and negative are allowed)
/// - `group_name` must not be blank
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default spacing
    #[serde(default)]
    pub spacing: SpacingConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("KlePlacer");

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

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
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

    /// Saves configuration to the config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using atomic write.
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

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.horizontal.is_finite() || !self.spacing.vertical.is_finite() {
            anyhow::bail!(
                "Spacing must be a finite number, got {} x {}",
                self.spacing.horizontal,
                self.spacing.vertical
            );
        }

        if self.output.group_name.trim().is_empty() {
            anyhow::bail!("Group name must not be empty");
        }

        Ok(())
    }

    /// Spacing to use when none is given on the command line.
    #[must_use]
    pub fn spacing(&self) -> Spacing {
        self.spacing.into()
    }
}
