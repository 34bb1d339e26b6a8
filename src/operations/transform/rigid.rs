use crate::error::{OperationError, Result};
use crate::math::{Point3, UnitQuaternion, Vector3, TOLERANCE};
use crate::tessellation::TriangleMesh;

/// A rigid placement: rotation followed by translation.
///
/// Applied to a point `p` as `rotation * p + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Orientation.
    pub rotation: UnitQuaternion,
    /// Position.
    pub translation: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation,
        }
    }

    /// A rotation from Euler angles in radians, applied in XYZ order
    /// (the combined matrix is `Rx * Ry * Rz`).
    #[must_use]
    pub fn from_euler_xyz(x: f64, y: f64, z: f64) -> Self {
        let rx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), x);
        let ry = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), y);
        let rz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), z);
        Self {
            rotation: rx * ry * rz,
            translation: Vector3::zeros(),
        }
    }

    /// A rotation by `angle` radians around an axis through the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Result<Self> {
        if axis.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let axis = nalgebra::Unit::new_normalize(*axis);
        Ok(Self {
            rotation: UnitQuaternion::from_axis_angle(&axis, angle),
            translation: Vector3::zeros(),
        })
    }

    /// Returns this transform with its translation replaced.
    #[must_use]
    pub fn with_translation(mut self, translation: Vector3) -> Self {
        self.translation = translation;
        self
    }

    /// Composes `self` (parent) with `child`: the result applies `child`
    /// first, then `self`.
    #[must_use]
    pub fn then(&self, child: &Transform) -> Transform {
        Transform {
            rotation: self.rotation * child.rotation,
            translation: self.rotation * child.translation + self.translation,
        }
    }

    /// Places a point.
    #[must_use]
    pub fn transform_point(&self, p: &Point3) -> Point3 {
        self.rotation * p + self.translation
    }

    /// Rotates a direction; translation does not apply.
    #[must_use]
    pub fn transform_vector(&self, v: &Vector3) -> Vector3 {
        self.rotation * v
    }

    /// Returns a copy of `mesh` with positions placed and normals rotated.
    #[must_use]
    pub fn apply_to_mesh(&self, mesh: &TriangleMesh) -> TriangleMesh {
        TriangleMesh {
            vertices: mesh
                .vertices
                .iter()
                .map(|p| self.transform_point(p))
                .collect(),
            normals: mesh
                .normals
                .iter()
                .map(|n| self.transform_vector(n))
                .collect(),
            uvs: mesh.uvs.clone(),
            indices: mesh.indices.clone(),
        }
    }
}
