//! Configuration system
//!
//! Renderer and camera settings, loadable from TOML or RON files.

use crate::foundation::math::{Coordinate2D, Rotation3D, Vec3};
use crate::render::camera::{compute_calibration, CameraParameters};
pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

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
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
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

    /// A value is out of its valid range
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// # Camera Configuration
///
/// Physical calibration inputs. Pixel sizes are in micrometers, the focal length
/// in millimeters. Using a taller pixel than it is wide compensates for terminal
/// character cells not being square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Pixel size in the x direction [um]
    pub pixel_size_x: f64,
    /// Pixel size in the y direction [um]
    pub pixel_size_y: f64,
    /// Focal length [mm]
    pub focal_length_mm: f64,
    /// Optical center [pixels], defaults to the middle of the screen
    pub optical_center: Option<[f64; 2]>,
    /// Camera position in the world [m]
    pub translation: Vec3,
    /// Camera orientation in the world [rad]
    pub rotation: Rotation3D,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pixel_size_x: 9.0,
            pixel_size_y: 20.0,
            focal_length_mm: 1.0,
            optical_center: None,
            translation: Vec3::zeros(),
            rotation: Rotation3D::default(),
        }
    }
}

/// # Renderer Configuration
///
/// Screen geometry, frame rate and the camera looking at the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Width of the character grid
    pub screen_width: usize,
    /// Height of the character grid
    pub screen_height: usize,
    /// Target frame rate [frames / s]
    pub target_fps: f64,
    /// Camera calibration inputs
    pub camera: CameraConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            screen_width: 100,
            screen_height: 50,
            target_fps: 30.0,
            camera: CameraConfig::default(),
        }
    }
}

impl RendererConfig {
    /// Set the screen size
    #[must_use]
    pub fn with_screen_size(mut self, width: usize, height: usize) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Set the target frame rate
    #[must_use]
    pub fn with_target_fps(mut self, fps: f64) -> Self {
        self.target_fps = fps;
        self
    }

    /// Optical center in pixels, resolving the screen-center default
    pub fn optical_center(&self) -> Coordinate2D {
        self.camera.optical_center.map_or_else(
            || Coordinate2D::new(self.screen_width as f64 / 2.0, self.screen_height as f64 / 2.0),
            |[x, y]| Coordinate2D::new(x, y),
        )
    }

    /// Derive the camera calibration from the physical inputs
    pub fn calibration(&self) -> CameraParameters {
        compute_calibration(
            self.camera.pixel_size_x,
            self.camera.pixel_size_y,
            self.camera.focal_length_mm,
            self.optical_center(),
            self.camera.translation,
            self.camera.rotation,
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Validation(format!(
                "screen must be at least 1x1, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }

        if !(self.target_fps.is_finite() && self.target_fps > 0.0) {
            return Err(ConfigError::Validation(format!(
                "target fps must be positive, got {}",
                self.target_fps
            )));
        }

        let camera = &self.camera;
        for (name, value) in [
            ("pixel_size_x", camera.pixel_size_x),
            ("pixel_size_y", camera.pixel_size_y),
            ("focal_length_mm", camera.focal_length_mm),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be finite and nonzero, got {value}"
                )));
            }
        }

        Ok(())
    }
}

impl Config for RendererConfig {}
