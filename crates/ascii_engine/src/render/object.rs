//! Renderable point-cloud objects and their per-frame placement

use crate::foundation::math::{Coordinate3D, Rotation3D};
use crate::render::RenderError;

/// A 3D object made of surface points
///
/// Points and normals are expressed in the object's own coordinate frame; the
/// object knows nothing about where in the world it is or how it is rotated.
/// Every point has exactly one surface normal at the same index.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    points: Vec<Coordinate3D>,
    normals: Vec<Coordinate3D>,
}

impl Object {
    /// Create an object from parallel point and normal sequences
    ///
    /// Normals need not be unit length.
    pub fn new(points: Vec<Coordinate3D>, normals: Vec<Coordinate3D>) -> Result<Self, RenderError> {
        if points.len() != normals.len() {
            return Err(RenderError::MismatchedNormals {
                points: points.len(),
                normals: normals.len(),
            });
        }

        Ok(Self { points, normals })
    }

    /// Surface points in the local frame
    pub fn points(&self) -> &[Coordinate3D] {
        &self.points
    }

    /// Surface normals in the local frame
    pub fn normals(&self) -> &[Coordinate3D] {
        &self.normals
    }

    /// Number of surface points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the object has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(point, normal)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Coordinate3D, &Coordinate3D)> {
        self.points.iter().zip(&self.normals)
    }
}

/// An object placed in the world for one frame
#[derive(Debug, Clone, Copy)]
pub struct ObjectPlacement<'a> {
    /// The placed object
    pub object: &'a Object,
    /// World position of the object's origin
    pub position: Coordinate3D,
    /// World orientation of the object
    pub rotation: Rotation3D,
}

impl<'a> ObjectPlacement<'a> {
    /// Place `object` at `position` with `rotation`
    pub const fn new(object: &'a Object, position: Coordinate3D, rotation: Rotation3D) -> Self {
        Self {
            object,
            position,
            rotation,
        }
    }
}
