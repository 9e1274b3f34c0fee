//! Configuration file support for canvasboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/canvasboard/config.toml`.
//! Settings cover the surface dimensions and stroke styling.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::Style;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 1000
/// height = 700
///
/// [drawing]
/// stroke_width = 1.0
/// rectangle_color = "yellow"
/// line_color = "blue"
/// preview_color = "gray"
/// fallback_color = "red"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Logical dimensions of the drawing surface
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Stroke styling and shape limits
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 0.5 - 20.0
    /// - `surface.width` / `surface.height`: at least 1
    fn validate_and_clamp(&mut self) {
        if !(0.5..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(0.5, 20.0);
        }

        if self.surface.width == 0 {
            log::warn!("Invalid surface width 0, using 1");
            self.surface.width = 1;
        }
        if self.surface.height == 0 {
            log::warn!("Invalid surface height 0, using 1");
            self.surface.height = 1;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/canvasboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("canvasboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from an explicit path, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Builds the render-pass style from the drawing settings.
    pub fn style(&self) -> Style {
        Style {
            stroke_width: self.drawing.stroke_width,
            fallback: self.drawing.fallback_color.to_color(),
            preview: self.drawing.preview_color.to_color(),
        }
    }
}
