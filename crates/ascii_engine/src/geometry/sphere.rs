//! Sphere generator

use super::steps_per_turn;
use crate::foundation::math::Vec3;
use crate::render::{Object, RenderError};

/// Generate a sphere of `radius` centred on the local origin
///
/// Normals point radially outwards and have unit length.
pub fn sphere(radius: f64, resolution: f64) -> Result<Object, RenderError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(RenderError::InvalidGeometry(format!(
            "sphere radius must be positive, got {radius}"
        )));
    }

    let steps = steps_per_turn(resolution)?;
    let mut points = Vec::with_capacity(steps * steps);
    let mut normals = Vec::with_capacity(steps * steps);

    for i in 0..steps {
        let (sin_phi, cos_phi) = (i as f64 * resolution).sin_cos();

        for j in 0..steps {
            let (sin_theta, cos_theta) = (j as f64 * resolution).sin_cos();
            let normal = Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi);

            points.push(normal * radius);
            normals.push(normal);
        }
    }

    log::debug!("Generated sphere with {} points (radius {radius})", points.len());
    Object::new(points, normals)
}
