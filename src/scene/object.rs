use crate::operations::transform::Transform;
use crate::tessellation::TriangleMesh;

use super::Material;

/// A named, renderable mesh with its material and local placement.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshObject {
    /// Human-readable name, used for lookups.
    pub name: String,
    /// Geometry in the object's local frame.
    pub mesh: TriangleMesh,
    /// Surface description.
    pub material: Material,
    /// Placement relative to the parent node.
    pub transform: Transform,
}

impl MeshObject {
    /// Creates an object at the identity placement.
    #[must_use]
    pub fn new(name: impl Into<String>, mesh: TriangleMesh, material: Material) -> Self {
        Self {
            name: name.into(),
            mesh,
            material,
            transform: Transform::identity(),
        }
    }

    /// Returns the object with its placement replaced.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}
