//! Configuration system

use crate::foundation::math::radians;
use crate::scene::ClampRange;
use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
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

    /// Unsupported file format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Rig construction parameters.
///
/// The defaults reproduce the stock rig exactly; loading a file only makes
/// sense for tweaking object names or the scale factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Upper clamp bound for the scale-to-distance mapping, on both the
    /// scale input and the translation output (lower bound is 0)
    pub mapping_max: f32,

    /// Camera and light tilt around X, in degrees, aligning the default
    /// "looks down -Z" convention with scene up
    pub camera_tilt_deg: f32,

    /// Light controller scale relative to its parent
    pub controller_scale: f32,

    /// Area light scale relative to the light controller
    pub light_scale: f32,

    /// Name for camera pivot objects
    pub pivot_name: String,

    /// Name for camera objects
    pub camera_name: String,

    /// Name for light controller objects
    pub controller_name: String,

    /// Name for area light objects
    pub light_name: String,

    /// Base name for the per-rig camera collection
    pub camera_collection_name: String,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            mapping_max: 100_000.0,
            camera_tilt_deg: 90.0,
            controller_scale: 0.8,
            light_scale: 4.0,
            pivot_name: "Camera Pivot".to_owned(),
            camera_name: "Camera".to_owned(),
            controller_name: "Light Controller".to_owned(),
            light_name: "Light".to_owned(),
            camera_collection_name: "Camera Controller".to_owned(),
        }
    }
}

impl Config for RigConfig {}

impl RigConfig {
    /// Clamp range used on both ends of the scale-to-distance mapping
    #[must_use]
    pub const fn mapping_range(&self) -> ClampRange {
        ClampRange::new(0.0, self.mapping_max)
    }

    /// Camera tilt in radians
    #[must_use]
    pub fn camera_tilt(&self) -> f32 {
        radians(self.camera_tilt_deg)
    }
}
