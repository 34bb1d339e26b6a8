mod arc;
mod line;

pub use arc::Arc;
pub use line::LineSegment;

use crate::error::Result;
use crate::math::{Point2, Vector2};
use crate::tessellation::TessellationParams;

/// Trait for bounded parametric curves in the XY plane.
///
/// Curves are parameterized over `t ∈ [0, 1]`, start to end.
pub trait Curve2 {
    /// Evaluates the curve at normalized parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Computes the unit tangent at normalized parameter `t`, in the direction of travel.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the arc length of the curve.
    fn length(&self) -> f64;

    /// Returns the parameters at which the curve should be sampled, `0.0` and
    /// `1.0` included.
    fn sample_parameters(&self, params: &TessellationParams) -> Vec<f64>;

    /// Returns the start point of the curve.
    fn start_point(&self) -> Point2 {
        self.evaluate(0.0)
    }

    /// Returns the end point of the curve.
    fn end_point(&self) -> Point2 {
        self.evaluate(1.0)
    }
}
