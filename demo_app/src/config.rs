//! Demo configuration
//!
//! Everything the session needs in one file: the renderer setup, the scene
//! layout and how many frames to draw.

use crate::scene::SceneConfig;
use ascii_engine::config::{Config, ConfigError, RendererConfig};
use serde::{Deserialize, Serialize};

/// Number of frames rendered when nothing else is requested
pub const DEFAULT_STEPS: usize = 500;

/// # Demo Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Frames to render before exiting
    pub steps: usize,
    /// Screen, frame rate and camera
    pub renderer: RendererConfig,
    /// Objects, their motion and the light
    pub scene: SceneConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            renderer: RendererConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.renderer.validate()?;
        self.scene.validate()
    }
}

impl Config for DemoConfig {}
