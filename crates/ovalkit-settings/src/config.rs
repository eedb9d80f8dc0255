//! Control configuration.
//!
//! A [`ControlConfig`] carries every tunable the ellipse control reads:
//! - Hit-testing radius for handles
//! - The ellipse size used before the host sets one
//! - Overlay decoration metrics (center dot, tick arcs, diagonal markers)
//!
//! Configs can be stored as JSON or TOML; the format is picked from the file
//! extension. Missing keys fall back to the defaults in
//! [`ovalkit_core::constants`].

use std::fmt;
use std::path::Path;

use ovalkit_core::constants::{
    CENTER_DOT_SIZE, DEFAULT_RADIUS_X, DEFAULT_RADIUS_Y, MIN_TOUCH_DIST, TICK_HALF_SWEEP,
    TICK_OFFSET,
};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// On-disk format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(SettingsError::UnsupportedFormat(other.to_string())),
            None => Err(SettingsError::UnsupportedFormat("<none>".to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// Tunables for the ellipse control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Maximum touch-to-handle distance that still picks the handle (pixels)
    pub min_touch_dist: f64,
    /// Horizontal radius before the host sets one
    pub default_radius_x: f64,
    /// Vertical radius before the host sets one
    pub default_radius_y: f64,
    /// Radius of the center dot
    pub center_dot_size: f64,
    /// Distance of the tick arcs from the outline
    pub tick_offset: f64,
    /// Half the angular sweep of a tick arc, in degrees
    pub tick_half_sweep: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            min_touch_dist: MIN_TOUCH_DIST,
            default_radius_x: DEFAULT_RADIUS_X,
            default_radius_y: DEFAULT_RADIUS_Y,
            center_dot_size: CENTER_DOT_SIZE,
            tick_offset: TICK_OFFSET,
            tick_half_sweep: TICK_HALF_SWEEP,
        }
    }
}

impl ControlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with a different touch radius.
    pub fn with_min_touch_dist(mut self, dist: f64) -> Self {
        self.min_touch_dist = dist;
        self
    }

    /// Squared touch radius, compared against squared handle distances by
    /// the control's hit-test.
    pub fn touch_threshold_squared(&self) -> f64 {
        self.min_touch_dist * self.min_touch_dist
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config = Self::from_str_with_format(&content, format)?;
        tracing::debug!(path = %path.display(), %format, "Loaded control config");
        Ok(config)
    }

    /// Parses and validates config text in the given format.
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.min_touch_dist.is_finite() || self.min_touch_dist <= 0.0 {
            return Err(SettingsError::invalid("min_touch_dist", "must be > 0"));
        }

        if !self.default_radius_x.is_finite() || self.default_radius_x < 0.0 {
            return Err(SettingsError::invalid("default_radius_x", "must be >= 0"));
        }

        if !self.default_radius_y.is_finite() || self.default_radius_y < 0.0 {
            return Err(SettingsError::invalid("default_radius_y", "must be >= 0"));
        }

        if !self.center_dot_size.is_finite() || self.center_dot_size <= 0.0 {
            return Err(SettingsError::invalid("center_dot_size", "must be > 0"));
        }

        if !self.tick_offset.is_finite() || self.tick_offset < 0.0 {
            return Err(SettingsError::invalid("tick_offset", "must be >= 0"));
        }

        if !(0.0..=45.0).contains(&self.tick_half_sweep) {
            return Err(SettingsError::invalid(
                "tick_half_sweep",
                "must be between 0 and 45 degrees",
            ));
        }

        Ok(())
    }
}
