//! Math utilities and types
//!
//! Provides the concrete linear algebra types used by the rendering pipeline.
//! Everything runs at `f64` precision: calibrated focal lengths are expressed in
//! pixels and easily reach the tens of thousands.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

pub use nalgebra::{DMatrix, Matrix3, Matrix3x4, Matrix4, Point2, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 4D vector type (homogeneous world coordinates)
pub type Vec4 = Vector4<f64>;

/// 3x3 matrix type (rotations)
pub type Mat3 = Matrix3<f64>;

/// 4x4 matrix type (rigid poses)
pub type Mat4 = Matrix4<f64>;

/// 3x4 matrix type (intrinsic and camera matrices)
pub type Mat3x4 = Matrix3x4<f64>;

/// A point on the image plane, in pixels
pub type Coordinate2D = Point2<f64>;

/// A point or direction in 3-space
pub type Coordinate3D = Vec3;

/// Orientation expressed as Euler angles in radians
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation3D {
    /// Rotation around the x-axis
    pub pitch: f64,
    /// Rotation around the y-axis
    pub yaw: f64,
    /// Rotation around the z-axis
    pub roll: f64,
}

impl Rotation3D {
    /// Create a rotation from its three Euler angles
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation with every angle multiplied by `factor`
    ///
    /// Handy for turning an angular velocity into a per-frame increment.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            pitch: self.pitch * factor,
            yaw: self.yaw * factor,
            roll: self.roll * factor,
        }
    }
}

impl Add for Rotation3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            pitch: self.pitch + other.pitch,
            yaw: self.yaw + other.yaw,
            roll: self.roll + other.roll,
        }
    }
}

impl AddAssign for Rotation3D {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = 2.0 * PI;

    /// Millimeters to micrometers
    pub const MM_TO_UM: f64 = 1000.0;
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    ///
    /// NaN collapses to `max`.
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        value.min(max).max(min)
    }
}
