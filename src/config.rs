// config.rs - Tunable camera and input parameters
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SPEED: f32 = 2.0;
pub const DEFAULT_DEGREES_PER_PIXEL: f32 = 0.5;
pub const DEFAULT_POLE_EPSILON: f32 = 1e-6;

/// Parameters of the free-look controller itself
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial keyboard translation speed
    pub speed: f32,
    /// Rotation applied per pixel of pointer drag, in degrees
    pub degrees_per_pixel: f32,
    /// Below this length the lateral axis counts as undefined (looking along world up)
    pub pole_epsilon: f32,
}

impl CameraConfig {
    pub fn radians_per_pixel(&self) -> f32 {
        self.degrees_per_pixel.to_radians()
    }

    /// Reject values that would disable the pole fallback
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.pole_epsilon.is_finite() && self.pole_epsilon > 0.0,
            "camera.pole_epsilon must be finite and positive, got {}",
            self.pole_epsilon
        );
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            degrees_per_pixel: DEFAULT_DEGREES_PER_PIXEL,
            pole_epsilon: DEFAULT_POLE_EPSILON,
        }
    }
}

/// Parameters of the window input bridge
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Passed as `speed_scale` with every character key
    pub key_speed_scale: f32,
    /// Analog axis travel at full deflection
    pub analog_units_per_second: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_speed_scale: 1.0,
            analog_units_per_second: 4.0,
        }
    }
}

/// Everything read from a settings file
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub camera: CameraConfig,
    pub input: InputConfig,
}

impl Settings {
    /// Parse settings from JSON text. Missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text).context("Invalid settings JSON")?;
        settings.camera.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        let settings = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))?;
        log::debug!("Loaded settings from {:?}: {:?}", path, settings);
        Ok(settings)
    }

    /// Defaults when no file is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
