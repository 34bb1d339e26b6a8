use std::collections::HashMap;

use crate::math::Point3;
use crate::tessellation::TriangleMesh;

/// Welding grid for positions; vertices closer than this are the same point.
const WELD_TOLERANCE: f64 = 1e-9;

/// Checks that a triangle mesh bounds a closed, consistently oriented volume.
///
/// Vertices are welded by position first, since flat-shaded meshes duplicate
/// corners with different normals. The mesh is watertight when every directed
/// edge occurs exactly once and its reverse occurs exactly once.
pub struct IsWatertight<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> IsWatertight<'a> {
    /// Creates a new `IsWatertight` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        if self.mesh.is_empty() {
            return false;
        }

        let mut welded: HashMap<(i64, i64, i64), usize> = HashMap::new();
        let ids: Vec<usize> = self
            .mesh
            .vertices
            .iter()
            .map(|p| {
                let next = welded.len();
                *welded.entry(weld_key(p)).or_insert(next)
            })
            .collect();

        let mut directed: HashMap<(usize, usize), u32> = HashMap::new();
        for tri in &self.mesh.indices {
            let [a, b, c] = tri.map(|i| ids[i as usize]);
            if a == b || b == c || c == a {
                return false;
            }
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }

        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn weld_key(p: &Point3) -> (i64, i64, i64) {
    (
        (p.x / WELD_TOLERANCE).round() as i64,
        (p.y / WELD_TOLERANCE).round() as i64,
        (p.z / WELD_TOLERANCE).round() as i64,
    )
}
