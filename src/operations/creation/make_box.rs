use crate::error::{OperationError, Result};
use crate::math::{Point2, Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Dimensions of an axis-aligned box centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxParams {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
    /// Extent along Z.
    pub depth: f64,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

/// Creates a flat-shaded box mesh centered at the origin.
pub struct MakeBox {
    params: BoxParams,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(params: BoxParams) -> Self {
        Self { params }
    }

    /// Executes the operation: 6 faces, 4 vertices and 2 triangles each.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any dimension is not
    /// positive and finite.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let BoxParams {
            width,
            height,
            depth,
        } = self.params;
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "box {name} must be positive, got {value}"
                ))
                .into());
            }
        }

        let half = Vector3::new(width, height, depth) * 0.5;
        let (x, y, z) = (Vector3::x(), Vector3::y(), Vector3::z());
        // (normal, u, v) with u × v = normal
        let faces = [(x, y, z), (-x, z, y), (y, z, x), (-y, x, z), (z, x, y), (-z, y, x)];

        let mut mesh = TriangleMesh::default();
        for (normal, u, v) in faces {
            let center = normal.component_mul(&half);
            let du = u.component_mul(&half);
            let dv = v.component_mul(&half);
            let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
            let ids = corners.map(|(su, sv)| {
                let p = Point3::from(center + du * su + dv * sv);
                mesh.push_vertex(p, normal, Point2::new((su + 1.0) * 0.5, (sv + 1.0) * 0.5))
            });
            mesh.indices.push([ids[0], ids[1], ids[2]]);
            mesh.indices.push([ids[0], ids[2], ids[3]]);
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_counts() {
        let mesh = MakeBox::new(BoxParams::default()).execute().unwrap();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn faces_wind_with_their_normals() {
        let mesh = MakeBox::new(BoxParams::default()).execute().unwrap();
        for (i, tri) in mesh.indices.iter().enumerate() {
            let [a, b, c] = mesh.triangle(i);
            let n = mesh.normals[tri[0] as usize];
            assert!((b - a).cross(&(c - a)).dot(&n) > 0.0, "triangle {i} is inverted");
        }
    }

    #[test]
    fn non_positive_dimension_is_rejected() {
        let params = BoxParams {
            height: 0.0,
            ..BoxParams::default()
        };
        assert!(MakeBox::new(params).execute().is_err());
    }
}
