//! Lighting system
//!
//! A single point light with Lambertian-style shading.

use crate::foundation::math::{utils, Coordinate3D, Vec3};
use serde::{Deserialize, Serialize};

/// Point light source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
}

impl PointLight {
    /// Create a point light at `position`
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Illumination of a surface by this light, see [`illuminate`]
    pub fn illuminate(&self, surface_position: &Coordinate3D, surface_normal: &Coordinate3D) -> f64 {
        illuminate(&self.position, surface_position, surface_normal)
    }
}

/// Calculate the illumination of a surface point in `[0, 1]`
///
/// A normal pointing straight back at the light reflects everything (1.0), a
/// normal pointing straight away reflects nothing (0.0), and a normal
/// perpendicular to the light ray lands in the middle (0.5).
///
/// A surface coinciding with the light, or a zero-length normal, has no
/// defined direction and gets no light.
pub fn illuminate(light_source: &Coordinate3D, surface_position: &Coordinate3D, surface_normal: &Coordinate3D) -> f64 {
    let light_ray = surface_position - light_source;

    let (Some(light_ray), Some(normal)) = (
        light_ray.try_normalize(f64::EPSILON),
        surface_normal.try_normalize(f64::EPSILON),
    ) else {
        return 0.0;
    };

    // Negated: the ray travels from the light to the surface
    let reflection = -light_ray.dot(&normal);
    utils::clamp((reflection + 1.0) / 2.0, 0.0, 1.0)
}
