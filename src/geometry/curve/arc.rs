use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_point_at, arc_subdivision_count};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::Curve2;

/// A circular arc in the XY plane.
///
/// Defined by a center, a radius, a start angle and a signed sweep (both in
/// radians). A positive sweep runs counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Start angle in radians
    /// * `sweep` - Signed sweep in radians, `|sweep| ≤ 2π`
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the sweep is zero, or
    /// any value is not finite.
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        if !start_angle.is_finite() || !sweep.is_finite() {
            return Err(GeometryError::Degenerate("arc angles must be finite".into()).into());
        }
        if sweep.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be non-zero".into()).into());
        }
        if sweep.abs() > std::f64::consts::TAU + TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep exceeds a full turn".into()).into());
        }

        Ok(Self {
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns the end angle (`start_angle + sweep`).
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }
}

impl Curve2 for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        let (x, y) = arc_point_at(
            self.center.x,
            self.center.y,
            self.radius,
            self.start_angle,
            self.sweep,
            t,
        );
        Point2::new(x, y)
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let angle = self.start_angle + self.sweep * t;
        let dir = self.sweep.signum();
        Ok(Vector2::new(-angle.sin() * dir, angle.cos() * dir))
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn sample_parameters(&self, params: &TessellationParams) -> Vec<f64> {
        let n = arc_subdivision_count(self.radius, self.sweep.abs(), params.tolerance);
        let min = params.min_segments.max(1);
        let max = params.max_segments.max(1);
        let n = (n as usize).clamp(min, max);
        (0..=n).map(|i| i as f64 / n as f64).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn toe_arc() -> Arc {
        Arc::new(Point2::new(2.5, 0.0), 1.5, -FRAC_PI_2, PI).unwrap()
    }

    #[test]
    fn endpoints_of_semicircle() {
        let arc = toe_arc();
        let s = arc.start_point();
        let e = arc.end_point();
        assert_abs_diff_eq!(s.x, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.y, -1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(e.x, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(e.y, 1.5, epsilon = 1e-12);
        // Midpoint is the tip of the toe.
        let m = arc.evaluate(0.5);
        assert_abs_diff_eq!(m.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn tangent_follows_direction_of_travel() {
        let arc = toe_arc();
        let t0 = arc.tangent(0.0).unwrap();
        assert_abs_diff_eq!(t0.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t0.y, 0.0, epsilon = 1e-12);

        let cw = Arc::new(Point2::origin(), 1.0, FRAC_PI_2, -PI).unwrap();
        let t0 = cw.tangent(0.0).unwrap();
        assert_abs_diff_eq!(t0.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn length_of_semicircle() {
        assert_abs_diff_eq!(toe_arc().length(), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn samples_respect_segment_limits() {
        let params = TessellationParams {
            tolerance: 10.0,
            min_segments: 4,
            max_segments: 8,
        };
        let ts = toe_arc().sample_parameters(&params);
        assert_eq!(ts.len(), 5);
        assert_abs_diff_eq!(ts[0], 0.0);
        assert_abs_diff_eq!(*ts.last().unwrap(), 1.0);
    }

    #[test]
    fn invalid_arcs_are_rejected() {
        assert!(Arc::new(Point2::origin(), 0.0, 0.0, PI).is_err());
        assert!(Arc::new(Point2::origin(), 1.0, 0.0, 0.0).is_err());
        assert!(Arc::new(Point2::origin(), 1.0, 0.0, f64::NAN).is_err());
        assert!(Arc::new(Point2::origin(), 1.0, 0.0, 7.0).is_err());
    }
}
