//! # Rendering System
//!
//! The per-frame pipeline that turns placed point clouds into a character grid.
//!
//! ## Architecture
//!
//! - **Camera**: Calibration and the cached 3x4 camera matrix
//! - **Transform**: Euler rotations, rigid transforms and the perspective projection
//! - **Lighting**: Point light shading in `[0, 1]`
//! - **Glyph**: Mapping shading levels onto characters
//! - **Renderer**: Frame/depth buffers, occlusion and output to the display sink
//!
//! Each frame runs synchronously on the calling thread: reset the buffers,
//! rasterize every placement, pace to the target frame rate, then flush.

pub mod camera;
pub mod glyph;
pub mod lighting;
pub mod object;
pub mod renderer;
pub mod transform;

#[cfg(test)]
mod pipeline_tests;

pub use camera::{CameraParameters, ExtrinsicParameters, IntrinsicParameters};
pub use lighting::PointLight;
pub use object::{Object, ObjectPlacement};
pub use renderer::{FrameStats, Renderer};
pub use transform::Projection;

use crate::config::ConfigError;
use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The character grid has no cells
    #[error("Invalid screen dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// The target frame rate is not a positive number
    #[error("Invalid frame rate: {0} fps")]
    InvalidFrameRate(f64),

    /// An object has a different number of points and normals
    #[error("Object has {points} points but {normals} surface normals")]
    MismatchedNormals {
        /// Number of points
        points: usize,
        /// Number of normals
        normals: usize,
    },

    /// Invalid geometry generator parameters
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Renderer configuration failed validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The display sink refused a write
    #[error("Display error: {0}")]
    Io(#[from] std::io::Error),
}
