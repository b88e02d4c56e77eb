//! # ASCII Engine
//!
//! A small real-time renderer that projects point clouds onto a character grid.
//!
//! ## Features
//!
//! - **Pinhole Camera**: Calibration from physical sensor parameters into a 3x4 camera matrix
//! - **Depth Buffering**: Nearest-wins occlusion per character cell
//! - **Lambertian Shading**: Single point light mapped onto a fixed glyph palette
//! - **Frame Pacing**: Sleep-based synchronizer targeting a fixed frame rate
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ascii_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RendererConfig::default();
//!     let mut renderer = Renderer::from_config(&config, std::io::stdout())?;
//!
//!     let sphere = geometry::sphere(0.2, geometry::DEFAULT_RESOLUTION)?;
//!     let placement = ObjectPlacement::new(&sphere, Vec3::new(0.0, 0.0, 3.0), Rotation3D::default());
//!     let light = PointLight::new(Vec3::new(-1.0, 1.0, 1.0));
//!
//!     renderer.render_frame(&light, &[placement])?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod geometry;
pub mod render;

pub use render::{RenderError, Renderer};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CameraConfig, Config, ConfigError, RendererConfig},
        foundation::{
            math::{Coordinate2D, Coordinate3D, Rotation3D, Vec3},
            time::FrameSynchronizer,
        },
        geometry,
        render::{
            CameraParameters, FrameStats, Object, ObjectPlacement, PointLight, RenderError,
            Renderer,
        },
    };
}
