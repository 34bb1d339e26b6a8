use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::Curve2;

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = start + t * (end - start)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns an error if both endpoints coincide.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { start, end })
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }
}

impl Curve2 for LineSegment {
    fn evaluate(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    fn tangent(&self, _t: f64) -> Result<Vector2> {
        Ok(self.direction())
    }

    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    fn sample_parameters(&self, _params: &TessellationParams) -> Vec<f64> {
        vec![0.0, 1.0]
    }

    fn start_point(&self) -> Point2 {
        self.start
    }

    fn end_point(&self) -> Point2 {
        self.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn midpoint_and_length() {
        let seg = LineSegment::new(Point2::new(-2.5, -1.5), Point2::new(2.5, -1.5)).unwrap();
        let mid = seg.evaluate(0.5);
        assert_abs_diff_eq!(mid.x, 0.0);
        assert_abs_diff_eq!(mid.y, -1.5);
        assert_abs_diff_eq!(seg.length(), 5.0);
    }

    #[test]
    fn zero_length_is_rejected() {
        let p = Point2::new(1.0, 1.0);
        assert!(LineSegment::new(p, p).is_err());
    }

    #[test]
    fn lines_are_never_subdivided() {
        let seg = LineSegment::new(Point2::origin(), Point2::new(100.0, 0.0)).unwrap();
        let ts = seg.sample_parameters(&TessellationParams::default());
        assert_eq!(ts, vec![0.0, 1.0]);
    }
}
