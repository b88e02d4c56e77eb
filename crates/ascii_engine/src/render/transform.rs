//! Coordinate system transformations
//!
//! Rotations from Euler angles, rigid transforms of local-frame points, and the
//! projection of world points onto the image plane through a camera matrix.

use crate::foundation::math::{Coordinate2D, Coordinate3D, Mat3, Mat3x4, Rotation3D, Vec4};

/// A world point projected onto the image plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Image coordinate in pixels, after the perspective divide
    pub image: Coordinate2D,
    /// Homogeneous scale component, i.e. the depth in front of the camera
    pub depth: f64,
}

/// Build the extrinsic rotation matrix for `rotation`
///
/// The elementary rotations are composed as `roll * yaw * pitch`, so pitch is
/// applied first to a column vector and roll last. Changing this order changes
/// the orientation of everything in the scene.
pub fn rotation_matrix(rotation: &Rotation3D) -> Mat3 {
    let (sa, ca) = rotation.pitch.sin_cos();
    let (sb, cb) = rotation.yaw.sin_cos();
    let (sg, cg) = rotation.roll.sin_cos();

    #[rustfmt::skip]
    let pitch = Mat3::new(
        1.0, 0.0, 0.0,
        0.0,  ca, -sa,
        0.0,  sa,  ca,
    );

    #[rustfmt::skip]
    let yaw = Mat3::new(
         cb, 0.0,  sb,
        0.0, 1.0, 0.0,
        -sb, 0.0,  cb,
    );

    #[rustfmt::skip]
    let roll = Mat3::new(
         cg, -sg, 0.0,
         sg,  cg, 0.0,
        0.0, 0.0, 1.0,
    );

    roll * yaw * pitch
}

/// Apply a linear transformation (no translation) to a point or direction
pub fn linear_transform(point: &Coordinate3D, matrix: &Mat3) -> Coordinate3D {
    matrix * point
}

/// Apply an affine transformation: `matrix * point + translation`
pub fn affine_transform(point: &Coordinate3D, matrix: &Mat3, translation: &Coordinate3D) -> Coordinate3D {
    matrix * point + translation
}

/// Project a world point through a 3x4 camera matrix
///
/// Returns `None` when the point lies behind or on the camera plane, where the
/// perspective divide is meaningless.
pub fn project(world: &Coordinate3D, camera_matrix: &Mat3x4) -> Option<Projection> {
    let homogeneous_world = Vec4::new(world.x, world.y, world.z, 1.0);
    let homogeneous_image = camera_matrix * homogeneous_world;

    let depth = homogeneous_image.z;
    if depth <= 0.0 || depth.is_nan() {
        return None;
    }

    Some(Projection {
        image: Coordinate2D::new(homogeneous_image.x / depth, homogeneous_image.y / depth),
        depth,
    })
}

/// Convert a world coordinate to an image coordinate
///
/// `None` means the point is not visible (behind or on the camera plane).
pub fn world_to_image(world: &Coordinate3D, camera_matrix: &Mat3x4) -> Option<Coordinate2D> {
    project(world, camera_matrix).map(|projection| projection.image)
}
