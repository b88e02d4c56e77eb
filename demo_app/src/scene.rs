//! The animated demo scene
//!
//! A sphere orbiting a spinning torus, both centered on a point in front of
//! the camera and lit by a single point light.

use ascii_engine::prelude::*;
use serde::{Deserialize, Serialize};

/// # Scene Configuration
///
/// Angular velocities are per second; the scene turns them into per-frame
/// increments from the target frame rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Point light position
    pub light_position: Vec3,
    /// Point both objects are centered on
    pub center: Vec3,
    /// Sphere radius
    pub sphere_radius: f64,
    /// Radius of the sphere's circular path around `center`, in the x-z plane
    pub orbit_radius: f64,
    /// Angular velocity of the sphere along its path [rad / s]
    pub orbit_angular_velocity: f64,
    /// Radius of the torus tube
    pub torus_inner_radius: f64,
    /// Distance from the torus center to the middle of the tube
    pub torus_outer_radius: f64,
    /// Angular velocity of the torus [rad / s]
    pub torus_angular_velocity: Rotation3D,
    /// Angular step used to sample both surfaces [rad]
    pub resolution: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            light_position: Vec3::new(-1.0, 1.0, 1.0),
            center: Vec3::new(0.0, 0.0, 3.0),
            sphere_radius: 0.2,
            orbit_radius: 1.0,
            orbit_angular_velocity: 1.2,
            torus_inner_radius: 0.15,
            torus_outer_radius: 0.4,
            torus_angular_velocity: Rotation3D::new(0.8, 0.4, 0.0),
            resolution: geometry::DEFAULT_RESOLUTION,
        }
    }
}

impl SceneConfig {
    /// Check the values the geometry generators do not
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.orbit_radius.is_finite() || self.orbit_radius < 0.0 {
            return Err(ConfigError::Validation(format!(
                "orbit radius must be non-negative, got {}",
                self.orbit_radius
            )));
        }

        Ok(())
    }
}

/// Scene state advanced once per frame
pub struct Scene {
    sphere: Object,
    torus: Object,
    light: PointLight,
    center: Vec3,
    orbit_radius: f64,
    orbit_angle: f64,
    orbit_step: f64,
    torus_rotation: Rotation3D,
    torus_step: Rotation3D,
}

impl Scene {
    /// Build the objects and derive per-frame increments for `fps`
    pub fn new(config: &SceneConfig, fps: f64) -> Result<Self, RenderError> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(RenderError::InvalidFrameRate(fps));
        }

        let sphere = geometry::sphere(config.sphere_radius, config.resolution)?;
        let torus = geometry::torus(config.torus_inner_radius, config.torus_outer_radius, config.resolution)?;

        log::info!(
            "Scene built: sphere with {} points, torus with {} points",
            sphere.len(),
            torus.len()
        );

        Ok(Self {
            sphere,
            torus,
            light: PointLight::new(config.light_position),
            center: config.center,
            orbit_radius: config.orbit_radius,
            orbit_angle: 0.0,
            orbit_step: config.orbit_angular_velocity / fps,
            torus_rotation: Rotation3D::default(),
            torus_step: config.torus_angular_velocity.scaled(1.0 / fps),
        })
    }

    /// Light illuminating the scene
    pub const fn light(&self) -> &PointLight {
        &self.light
    }

    /// Current sphere position on its path
    pub fn sphere_position(&self) -> Vec3 {
        let (sin, cos) = self.orbit_angle.sin_cos();
        self.center + Vec3::new(self.orbit_radius * cos, 0.0, self.orbit_radius * sin)
    }

    /// Current torus orientation
    pub const fn torus_rotation(&self) -> Rotation3D {
        self.torus_rotation
    }

    /// Placements for the current frame
    pub fn placements(&self) -> [ObjectPlacement<'_>; 2] {
        [
            ObjectPlacement::new(&self.sphere, self.sphere_position(), Rotation3D::default()),
            ObjectPlacement::new(&self.torus, self.center, self.torus_rotation),
        ]
    }

    /// Move everything forward by one frame
    pub fn advance(&mut self) {
        self.orbit_angle += self.orbit_step;
        self.torus_rotation += self.torus_step;
    }
}
