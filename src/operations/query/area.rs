use crate::error::{Result, TopologyError};
use crate::geometry::{Curve2, Shape, ShapeSegment};

/// Computes the exact signed area enclosed by a closed shape.
///
/// Integrates `(x dy - y dx) / 2` over every segment analytically, so arcs
/// contribute their true area rather than a chord approximation. The result
/// is positive for counter-clockwise outlines.
pub struct Area<'a> {
    shape: &'a Shape,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(shape: &'a Shape) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the signed area.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] if the shape is open.
    pub fn execute(&self) -> Result<f64> {
        if !self.shape.is_closed() {
            return Err(TopologyError::WireNotClosed.into());
        }

        let mut twice_area = 0.0;
        for segment in self.shape.segments() {
            twice_area += match segment {
                ShapeSegment::Line(line) => {
                    let (a, b) = (line.start_point(), line.end_point());
                    a.x * b.y - b.x * a.y
                }
                ShapeSegment::Arc(arc) => {
                    let (c, r) = (arc.center(), arc.radius());
                    let (t0, t1) = (arc.start_angle(), arc.end_angle());
                    r * r * arc.sweep() + c.x * r * (t1.sin() - t0.sin())
                        - c.y * r * (t1.cos() - t0.cos())
                }
            };
        }
        Ok(twice_area * 0.5)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn offset_disc_area_is_exact() {
        let mut shape = Shape::new();
        shape.absarc(5.0, -2.0, 1.5, 0.0, 2.0 * PI, false).unwrap();
        shape.close_path().unwrap();
        assert_relative_eq!(
            Area::new(&shape).execute().unwrap(),
            PI * 2.25,
            max_relative = 1e-12
        );
    }

    #[test]
    fn clockwise_triangle_is_negative() {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(0.0, 2.0).unwrap();
        shape.line_to(2.0, 0.0).unwrap();
        shape.close_path().unwrap();
        assert_relative_eq!(Area::new(&shape).execute().unwrap(), -2.0);
    }

    #[test]
    fn open_shape_is_an_error() {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(1.0, 0.0).unwrap();
        assert!(Area::new(&shape).execute().is_err());
    }
}
