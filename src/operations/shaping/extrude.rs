use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Shape;
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::{triangulate_polygon, Outline, TessellationParams, TriangleMesh};

/// Linearly extrudes a closed shape along +Z into a triangle mesh.
///
/// The base cap sits at `z = 0` facing −Z, the top cap at `z = depth` facing
/// +Z, and the side wall follows the outline. There is no bevel and a single
/// step along the depth.
pub struct Extrude<'a> {
    shape: &'a Shape,
    depth: f64,
    params: TessellationParams,
}

impl<'a> Extrude<'a> {
    /// Creates a new `Extrude` operation with default tessellation parameters.
    #[must_use]
    pub fn new(shape: &'a Shape, depth: f64) -> Self {
        Self {
            shape,
            depth,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom tessellation parameters for the outline arcs.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the depth is not positive and
    /// finite, a topology error if the shape is open, and a tessellation error
    /// if the outline is degenerate or intersects itself.
    pub fn execute(&self) -> Result<TriangleMesh> {
        if !self.depth.is_finite() || self.depth < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "extrude depth must be positive, got {}",
                self.depth
            ))
            .into());
        }

        let mut outline = Outline::from_shape(self.shape, &self.params)?;
        let area = outline.signed_area();
        let extent = extent(&outline.ring());
        if area.abs() <= TOLERANCE * extent * extent {
            return Err(OperationError::Failed("outline encloses no area".into()).into());
        }
        // Caps and walls below assume a counter-clockwise outline.
        if area < 0.0 {
            debug!("re-orienting clockwise outline");
            outline = outline.reversed();
        }

        let ring = outline.ring();
        let triangles = triangulate_polygon(&ring)?;

        let mut mesh = TriangleMesh::default();
        push_cap(&mut mesh, &ring, &triangles, 0.0, false);
        push_cap(&mut mesh, &ring, &triangles, self.depth, true);
        push_wall(&mut mesh, &outline, self.depth);

        debug!(
            segments = self.shape.segments().len(),
            outline_points = ring.len(),
            vertices = mesh.vertices.len(),
            triangles = mesh.triangle_count(),
            depth = self.depth,
            "extruded shape"
        );
        Ok(mesh)
    }
}

/// Largest side of the bounding rectangle of `points`.
fn extent(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (min, max) = points
        .iter()
        .fold((*first, *first), |(min, max), p| (min.inf(p), max.sup(p)));
    (max - min).amax()
}

/// Adds a flat cap at height `z`. Top caps face +Z, bottom caps −Z.
fn push_cap(mesh: &mut TriangleMesh, ring: &[Point2], triangles: &[[usize; 3]], z: f64, top: bool) {
    let normal = if top { Vector3::z() } else { -Vector3::z() };
    let base: Vec<u32> = ring
        .iter()
        .map(|p| mesh.push_vertex(Point3::new(p.x, p.y, z), normal, *p))
        .collect();

    for &[a, b, c] in triangles {
        if top {
            mesh.indices.push([base[a], base[b], base[c]]);
        } else {
            mesh.indices.push([base[a], base[c], base[b]]);
        }
    }
}

/// Adds the side wall, one quad per sampled outline edge.
///
/// Normals are the outward perpendicular of the outline tangent, so arcs
/// shade smoothly while straight edges stay flat. `u` runs along the
/// perimeter and `v` up the wall.
fn push_wall(mesh: &mut TriangleMesh, outline: &Outline, depth: f64) {
    let mut distance = 0.0;
    for segment in outline.segments() {
        let mut column = Vec::with_capacity(segment.points.len());
        for (i, (p, t)) in segment.points.iter().zip(&segment.tangents).enumerate() {
            if i > 0 {
                distance += (*p - segment.points[i - 1]).norm();
            }
            let normal = Vector3::new(t.y, -t.x, 0.0);
            let bottom = mesh.push_vertex(
                Point3::new(p.x, p.y, 0.0),
                normal,
                Point2::new(distance, 0.0),
            );
            let top = mesh.push_vertex(
                Point3::new(p.x, p.y, depth),
                normal,
                Point2::new(distance, depth),
            );
            column.push((bottom, top));
        }

        for pair in column.windows(2) {
            let (b0, t0) = pair[0];
            let (b1, t1) = pair[1];
            mesh.indices.push([b0, b1, t1]);
            mesh.indices.push([b0, t1, t0]);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::CobblerError;
    use crate::operations::query::{Area, BoundingBox, IsWatertight, Volume};

    fn rect(w: f64, h: f64) -> Shape {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(w, 0.0).unwrap();
        shape.line_to(w, h).unwrap();
        shape.line_to(0.0, h).unwrap();
        shape.close_path().unwrap();
        shape
    }

    // ── Box from a rectangle ───────────────────────────────────

    #[test]
    fn rectangle_gives_12_triangles() {
        let mesh = Extrude::new(&rect(1.0, 1.0), 1.0).execute().unwrap();
        // 2 caps × 2 triangles + 4 sides × 2 triangles
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        assert_eq!(mesh.vertices.len(), mesh.uvs.len());
    }

    #[test]
    fn extrusion_is_closed_and_has_expected_volume() {
        let shape = rect(2.0, 3.0);
        let mesh = Extrude::new(&shape, 0.5).execute().unwrap();
        assert!(IsWatertight::new(&mesh).execute());
        let volume = Volume::new(&mesh).execute().unwrap();
        let area = Area::new(&shape).execute().unwrap();
        assert_relative_eq!(volume, area * 0.5, max_relative = 1e-12);
    }

    #[test]
    fn z_span_equals_depth() {
        let mesh = Extrude::new(&rect(1.0, 1.0), 0.3).execute().unwrap();
        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert_abs_diff_eq!(aabb.min.z, 0.0);
        assert_abs_diff_eq!(aabb.max.z, 0.3);
    }

    #[test]
    fn tiny_outline_is_not_degenerate() {
        let shape = rect(1e-6, 2e-6);
        let mesh = Extrude::new(&shape, 1e-6).execute().unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert!(IsWatertight::new(&mesh).execute());
        assert_relative_eq!(
            Volume::new(&mesh).execute().unwrap(),
            2e-18,
            max_relative = 1e-9
        );
    }

    // ── Normals point outward ──────────────────────────────────

    #[test]
    fn triangle_winding_agrees_with_normals() {
        let mesh = Extrude::new(&rect(2.0, 1.0), 1.0).execute().unwrap();
        for (i, tri) in mesh.indices.iter().enumerate() {
            let [a, b, c] = mesh.triangle(i);
            let geometric = (b - a).cross(&(c - a));
            let stored = mesh.normals[tri[0] as usize];
            assert!(
                geometric.dot(&stored) > 0.0,
                "triangle {i} winding disagrees with its normal {stored:?}"
            );
        }
    }

    #[test]
    fn clockwise_shape_is_reoriented() {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(0.0, 1.0).unwrap();
        shape.line_to(1.0, 1.0).unwrap();
        shape.line_to(1.0, 0.0).unwrap();
        shape.close_path().unwrap();

        let mesh = Extrude::new(&shape, 1.0).execute().unwrap();
        assert!(IsWatertight::new(&mesh).execute());
        assert_relative_eq!(
            Volume::new(&mesh).execute().unwrap(),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn disc_wall_normals_are_radial() {
        let mut shape = Shape::new();
        shape.absarc(0.0, 0.0, 2.0, 0.0, std::f64::consts::TAU, false).unwrap();
        shape.close_path().unwrap();
        let mesh = Extrude::new(&shape, 1.0).execute().unwrap();

        for (p, n) in mesh.vertices.iter().zip(&mesh.normals) {
            if n.z.abs() > 0.5 {
                continue;
            }
            let radial = Vector3::new(p.x, p.y, 0.0).normalize();
            assert_abs_diff_eq!(radial.dot(n), 1.0, epsilon = 1e-9);
        }
    }

    // ── Error cases ────────────────────────────────────────────

    #[test]
    fn non_positive_depth_returns_error() {
        let shape = rect(1.0, 1.0);
        assert!(Extrude::new(&shape, 0.0).execute().is_err());
        assert!(Extrude::new(&shape, -1.0).execute().is_err());
        assert!(Extrude::new(&shape, f64::NAN).execute().is_err());
    }

    #[test]
    fn open_shape_returns_error() {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(1.0, 0.0).unwrap();
        shape.line_to(1.0, 1.0).unwrap();
        assert!(Extrude::new(&shape, 1.0).execute().is_err());
    }

    #[test]
    fn collinear_outline_encloses_no_area() {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(1.0, 0.0).unwrap();
        shape.line_to(2.0, 0.0).unwrap();
        shape.close_path().unwrap();
        let err = Extrude::new(&shape, 1.0).execute().unwrap_err();
        assert!(matches!(err, CobblerError::Operation(OperationError::Failed(_))));
    }

    #[test]
    fn bowtie_returns_error() {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(1.0, 1.0).unwrap();
        shape.line_to(1.0, 0.0).unwrap();
        shape.line_to(0.0, 1.0).unwrap();
        shape.close_path().unwrap();
        assert!(Extrude::new(&shape, 1.0).execute().is_err());
    }
}
