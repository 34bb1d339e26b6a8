use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};
use crate::operations::transform::Transform;
use crate::tessellation::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Builds the tightest box around `points`, or `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut aabb = Self {
            min: first,
            max: first,
        };
        for p in iter {
            aabb.include(p);
        }
        Some(aabb)
    }

    /// Grows the box to contain `p`.
    pub fn include(&mut self, p: &Point3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Extent of the box along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a mesh, optionally after
/// placing it with a transform.
pub struct BoundingBox<'a> {
    mesh: &'a TriangleMesh,
    transform: Transform,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query in the mesh's local frame.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self {
            mesh,
            transform: Transform::identity(),
        }
    }

    /// Measures the mesh as placed by `transform`.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the mesh has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        let placed: Vec<Point3> = self
            .mesh
            .vertices
            .iter()
            .map(|p| self.transform.transform_point(p))
            .collect();
        Aabb::from_points(&placed)
            .ok_or_else(|| OperationError::InvalidInput("mesh has no vertices".into()).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::operations::creation::{BoxParams, MakeBox};

    #[test]
    fn unit_box_bounds() {
        let mesh = MakeBox::new(BoxParams::default()).execute().unwrap();
        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert_abs_diff_eq!(aabb.min, Point3::new(-0.5, -0.5, -0.5));
        assert_abs_diff_eq!(aabb.max, Point3::new(0.5, 0.5, 0.5));
        assert_abs_diff_eq!(aabb.center(), Point3::origin());
    }

    #[test]
    fn transformed_bounds_follow_rotation() {
        let params = BoxParams {
            width: 4.0,
            height: 2.0,
            depth: 1.0,
        };
        let mesh = MakeBox::new(params).execute().unwrap();
        let rot = Transform::from_euler_xyz(0.0, 0.0, FRAC_PI_2);
        let size = BoundingBox::new(&mesh)
            .with_transform(rot)
            .execute()
            .unwrap()
            .size();
        assert_abs_diff_eq!(size, Vector3::new(2.0, 4.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn empty_mesh_is_an_error() {
        let empty = TriangleMesh::default();
        assert!(BoundingBox::new(&empty).execute().is_err());
    }

    #[test]
    fn union_covers_both() {
        let a = Aabb::from_points(&[Point3::origin()]).unwrap();
        let b = Aabb::from_points(&[Point3::new(1.0, -1.0, 2.0)]).unwrap();
        let u = a.union(&b);
        assert_eq!(u.min, Point3::new(0.0, -1.0, 0.0));
        assert_eq!(u.max, Point3::new(1.0, 0.0, 2.0));
    }
}
