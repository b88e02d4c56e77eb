//! Torus generator

use super::steps_per_turn;
use crate::foundation::math::{Rotation3D, Vec3};
use crate::render::transform::{linear_transform, rotation_matrix};
use crate::render::{Object, RenderError};

/// Generate a torus around the local y axis
///
/// A circle of radius `inner_radius`, centred `outer_radius` away from the
/// origin in the xy plane, is swept a full turn around the y axis.
pub fn torus(inner_radius: f64, outer_radius: f64, resolution: f64) -> Result<Object, RenderError> {
    if !(inner_radius > 0.0 && outer_radius > inner_radius && outer_radius.is_finite()) {
        return Err(RenderError::InvalidGeometry(format!(
            "torus needs 0 < inner radius < outer radius, got {inner_radius} and {outer_radius}"
        )));
    }

    let steps = steps_per_turn(resolution)?;
    let mut points = Vec::with_capacity(steps * steps);
    let mut normals = Vec::with_capacity(steps * steps);

    for i in 0..steps {
        let sweep = rotation_matrix(&Rotation3D::new(0.0, i as f64 * resolution, 0.0));

        for j in 0..steps {
            let (sin_beta, cos_beta) = (j as f64 * resolution).sin_cos();

            let circle_point = Vec3::new(outer_radius + inner_radius * cos_beta, inner_radius * sin_beta, 0.0);
            let circle_normal = Vec3::new(cos_beta, sin_beta, 0.0);

            points.push(linear_transform(&circle_point, &sweep));
            normals.push(linear_transform(&circle_normal, &sweep));
        }
    }

    log::debug!(
        "Generated torus with {} points (radii {inner_radius}, {outer_radius})",
        points.len()
    );
    Object::new(points, normals)
}
