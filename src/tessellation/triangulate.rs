use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::FixedFaceHandle;
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::math::polygon_2d::is_simple_polygon;
use crate::math::Point2;

/// Triangulates a simple polygon with a constrained Delaunay triangulation.
///
/// Returns triangles as indices into `ring`, each wound counter-clockwise.
/// No extra vertices are introduced.
///
/// # Errors
///
/// Returns [`TessellationError::Failed`] if the ring has fewer than three
/// points, intersects itself, or a point cannot be inserted.
pub fn triangulate_polygon(ring: &[Point2]) -> Result<Vec<[usize; 3]>> {
    if ring.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }
    if !is_simple_polygon(ring) {
        return Err(TessellationError::Failed("polygon intersects itself".into()).into());
    }

    let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
    let mut handle_to_ring: HashMap<usize, usize> = HashMap::with_capacity(ring.len());
    let mut handles = Vec::with_capacity(ring.len());
    for (i, p) in ring.iter().enumerate() {
        let h = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handle_to_ring.insert(h.index(), i);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    let interior = classify_interior_faces(&cdt);
    let mut triangles = Vec::with_capacity(interior.len());
    for face in cdt.inner_faces() {
        if !interior.contains(&face.fix().index()) {
            continue;
        }
        let mut tri = [0usize; 3];
        for (slot, vh) in face.vertices().iter().enumerate() {
            tri[slot] = *handle_to_ring.get(&vh.fix().index()).ok_or_else(|| {
                TessellationError::Failed("triangulation produced an unknown vertex".into())
            })?;
        }
        let (a, b, c) = (&ring[tri[0]], &ring[tri[1]], &ring[tri[2]]);
        let orient = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        if orient < 0.0 {
            tri.swap(1, 2);
        }
        triangles.push(tri);
    }

    Ok(triangles)
}

/// Classifies which inner faces of the CDT are inside the polygon using flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each time
/// a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(
    cdt: &ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<spade::handles::InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        let Some(inner) = edge.rev().face().as_inner() else {
            continue;
        };
        let idx = inner.fix().index();
        if depth_map.contains_key(&idx) {
            continue;
        }
        let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
        depth_map.insert(idx, depth);
        if depth % 2 == 1 {
            interior.insert(idx);
        }
        queue.push_back((inner.fix(), depth));
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                depth + 1
            } else {
                depth
            };
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::polygon_2d::signed_area_2d;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn area_of(ring: &[Point2], tris: &[[usize; 3]]) -> f64 {
        tris.iter()
            .map(|t| signed_area_2d(&[ring[t[0]], ring[t[1]], ring[t[2]]]))
            .sum()
    }

    #[test]
    fn square_gives_two_triangles() {
        let ring = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let tris = triangulate_polygon(&ring).unwrap();
        assert_eq!(tris.len(), 2);
        assert_abs_diff_eq!(area_of(&ring, &tris), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn concave_l_shape_excludes_notch() {
        let ring = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        let tris = triangulate_polygon(&ring).unwrap();
        assert_eq!(tris.len(), 4);
        assert_abs_diff_eq!(area_of(&ring, &tris), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn triangles_are_counter_clockwise_for_cw_input() {
        let ring = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let tris = triangulate_polygon(&ring).unwrap();
        for t in &tris {
            assert!(signed_area_2d(&[ring[t[0]], ring[t[1]], ring[t[2]]]) > 0.0);
        }
    }

    #[test]
    fn self_intersecting_ring_is_rejected() {
        let ring = vec![p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(triangulate_polygon(&ring).is_err());
    }

    #[test]
    fn too_few_points_is_rejected() {
        assert!(triangulate_polygon(&[p(0.0, 0.0), p(1.0, 0.0)]).is_err());
    }
}
