use crate::error::{OperationError, Result};
use crate::tessellation::TriangleMesh;

/// Computes the enclosed volume of a closed triangle mesh.
///
/// Uses the signed tetrahedron method: for each triangle, sums
/// `(1/6) * v0 . (v1 x v2)`. Triangles are expected to be wound
/// counter-clockwise when seen from outside.
pub struct Volume<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the volume (absolute value).
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the mesh has no triangles.
    pub fn execute(&self) -> Result<f64> {
        if self.mesh.is_empty() {
            return Err(OperationError::InvalidInput("mesh has no triangles".into()).into());
        }

        let mut signed_volume = 0.0;
        for i in 0..self.mesh.triangle_count() {
            let [v0, v1, v2] = self.mesh.triangle(i);
            signed_volume += v0.coords.dot(&v1.coords.cross(&v2.coords));
        }
        Ok((signed_volume / 6.0).abs())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::creation::{BoxParams, MakeBox};

    #[test]
    fn box_volume() {
        let params = BoxParams {
            width: 2.0,
            height: 3.0,
            depth: 4.0,
        };
        let mesh = MakeBox::new(params).execute().unwrap();
        assert_relative_eq!(
            Volume::new(&mesh).execute().unwrap(),
            24.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn empty_mesh_is_an_error() {
        assert!(Volume::new(&TriangleMesh::default()).execute().is_err());
    }
}
