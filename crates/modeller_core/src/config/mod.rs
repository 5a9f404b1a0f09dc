//! Configuration system
//!
//! [`Config`] loads and saves any serde-enabled settings type as TOML or RON,
//! chosen by file extension. [`SceneConfig`] holds the scene's tunables.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Color;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Check loaded values before they are used
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        let config: Self = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        log::debug!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Camera-space distance at which new shapes are anchored
pub const DEFAULT_PLACE_DEPTH: f32 = 15.0;

/// Tunables of a [`Scene`](crate::scene::Scene)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Distance along the cursor ray at which `place` puts new shapes
    pub place_depth: f32,

    /// Color given to every placed shape
    pub default_color: Color,

    /// Scale factor applied by `scale_selected(true)`
    pub scale_up: f32,

    /// Scale factor applied by `scale_selected(false)`
    pub scale_down: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            place_depth: DEFAULT_PLACE_DEPTH,
            default_color: Color::PLACEMENT_GREY,
            scale_up: 1.1,
            scale_down: 0.9,
        }
    }
}

impl SceneConfig {
    /// Override the placement depth
    pub fn with_place_depth(mut self, depth: f32) -> Self {
        self.place_depth = depth;
        self
    }

    /// Override the color of placed shapes
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }
}

fn positive_finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive and finite, got {value}")))
    }
}

impl Config for SceneConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive_finite("place_depth", self.place_depth)?;
        positive_finite("scale_up", self.scale_up)?;
        positive_finite("scale_down", self.scale_down)?;
        if !self.default_color.is_finite() {
            return Err(ConfigError::Invalid("default_color must be finite".to_string()));
        }
        Ok(())
    }
}
