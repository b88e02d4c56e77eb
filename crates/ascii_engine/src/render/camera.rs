//! # Pinhole Camera Model
//!
//! Turns physical calibration inputs into the matrices that map homogeneous
//! world coordinates onto homogeneous image coordinates.
//!
//! ## Conventions
//! - World space is right-handed; the camera looks along +z.
//! - Image space has its origin at the top-left of the character grid with y
//!   growing downwards, which is why the intrinsic matrix negates `fy`.

use crate::foundation::math::{constants::MM_TO_UM, Coordinate2D, Coordinate3D, Mat3x4, Mat4, Rotation3D};
use crate::render::transform::rotation_matrix;
use serde::{Deserialize, Serialize};

/// Intrinsic camera parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicParameters {
    /// Focal length in the x direction [pixels]
    pub focal_length_x: f64,
    /// Focal length in the y direction [pixels]
    pub focal_length_y: f64,
    /// Optical center, also known as the principal point [pixels]
    pub optical_center: Coordinate2D,
}

/// Extrinsic camera parameters, i.e. the camera pose in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrinsicParameters {
    /// Camera position in the world [m]
    pub translation: Coordinate3D,
    /// Camera orientation in the world [rad]
    pub rotation: Rotation3D,
}

impl Default for ExtrinsicParameters {
    /// Camera at the world origin looking along +z
    fn default() -> Self {
        Self {
            translation: Coordinate3D::zeros(),
            rotation: Rotation3D::default(),
        }
    }
}

/// Camera parameters, also known as calibration parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParameters {
    /// Intrinsic parameters
    pub intrinsic: IntrinsicParameters,
    /// Extrinsic parameters
    pub extrinsic: ExtrinsicParameters,
}

/// Derive the camera calibration from physical sensor properties
///
/// # Arguments
/// * `pixel_size_x` - Pixel size in the x direction [um]
/// * `pixel_size_y` - Pixel size in the y direction [um]
/// * `focal_length_mm` - Focal length [mm]
/// * `optical_center` - Optical center [pixels]
/// * `translation` - Camera position in the world [m]
/// * `rotation` - Camera orientation in the world [rad]
pub fn compute_calibration(
    pixel_size_x: f64,
    pixel_size_y: f64,
    focal_length_mm: f64,
    optical_center: Coordinate2D,
    translation: Coordinate3D,
    rotation: Rotation3D,
) -> CameraParameters {
    let focal_length_um = focal_length_mm * MM_TO_UM;

    CameraParameters {
        intrinsic: IntrinsicParameters {
            focal_length_x: focal_length_um / pixel_size_x,
            focal_length_y: focal_length_um / pixel_size_y,
            optical_center,
        },
        extrinsic: ExtrinsicParameters { translation, rotation },
    }
}

/// Build the 3x4 intrinsic matrix
pub fn intrinsic_matrix(intrinsic: &IntrinsicParameters) -> Mat3x4 {
    let fx = intrinsic.focal_length_x;
    let fy = intrinsic.focal_length_y;
    let cx = intrinsic.optical_center.x;
    let cy = intrinsic.optical_center.y;

    #[rustfmt::skip]
    let matrix = Mat3x4::new(
         fx, 0.0,  cx, 0.0,
        0.0, -fy,  cy, 0.0,
        0.0, 0.0, 1.0, 0.0,
    );

    matrix
}

/// Build the 4x4 extrinsic matrix (world to camera frame)
///
/// This is the inverse of the camera pose `[R | t; 0 | 1]`. Since `R` is
/// orthonormal the inverse is `[R^T | R^T * -t; 0 | 1]`.
pub fn extrinsic_matrix(extrinsic: &ExtrinsicParameters) -> Mat4 {
    let rotation_transposed = rotation_matrix(&extrinsic.rotation).transpose();
    let translation = rotation_transposed * -extrinsic.translation;

    let mut matrix = Mat4::identity();
    matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation_transposed);
    matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
    matrix
}

/// Build the camera matrix `intrinsic * extrinsic`
///
/// Maps a homogeneous world coordinate straight to a homogeneous image coordinate.
pub fn camera_matrix(calibration: &CameraParameters) -> Mat3x4 {
    let matrix = intrinsic_matrix(&calibration.intrinsic) * extrinsic_matrix(&calibration.extrinsic);
    log::trace!("Camera matrix built: {matrix}");
    matrix
}
