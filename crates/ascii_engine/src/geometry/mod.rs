//! Procedural point-cloud generators
//!
//! Surfaces are sampled on a regular angular grid covering `[0, 2*pi)` along
//! both parameters, producing one point and one outward normal per sample.

mod sphere;
mod torus;

pub use sphere::sphere;
pub use torus::torus;

use crate::foundation::math::constants::TAU;
use crate::render::RenderError;

/// Default angular step between samples [rad]
pub const DEFAULT_RESOLUTION: f64 = 0.01;

/// Number of samples along one full turn at `resolution`
fn steps_per_turn(resolution: f64) -> Result<usize, RenderError> {
    if !(resolution.is_finite() && resolution > 0.0 && resolution <= TAU) {
        return Err(RenderError::InvalidGeometry(format!(
            "resolution must be in (0, 2*pi], got {resolution}"
        )));
    }

    Ok((TAU / resolution) as usize)
}
