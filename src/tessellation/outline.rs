use tracing::trace;

use crate::error::{Result, TessellationError, TopologyError};
use crate::geometry::Shape;
use crate::math::polygon_2d::{is_simple_polygon, signed_area_2d};
use crate::math::{Point2, Vector2};

use super::TessellationParams;

/// Sampled points of one shape segment.
///
/// Consecutive segments share their joint point exactly, so the sampled
/// outline has no cracks.
#[derive(Debug, Clone)]
pub struct SampledSegment {
    /// Sample positions, start and end included.
    pub points: Vec<Point2>,
    /// Unit tangents at each sample, in the direction of travel.
    pub tangents: Vec<Vector2>,
}

/// A closed shape sampled into polyline pieces, one per segment.
#[derive(Debug, Clone)]
pub struct Outline {
    segments: Vec<SampledSegment>,
}

impl Outline {
    /// Samples a closed shape.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] if the shape is open,
    /// [`TessellationError::InvalidParameters`] for unusable parameters, and
    /// [`TessellationError::Failed`] if fewer than three distinct points result.
    pub fn from_shape(shape: &Shape, params: &TessellationParams) -> Result<Self> {
        params.validate()?;
        if !shape.is_closed() {
            return Err(TopologyError::WireNotClosed.into());
        }
        let Some(start) = shape.start_point() else {
            return Err(TopologyError::WireNotClosed.into());
        };

        let mut segments = Vec::with_capacity(shape.segments().len());
        let mut joint = start;
        for segment in shape.segments() {
            let curve = segment.as_curve();
            let ts = curve.sample_parameters(params);
            let mut points: Vec<Point2> = ts.iter().map(|&t| curve.evaluate(t)).collect();
            let tangents = ts
                .iter()
                .map(|&t| curve.tangent(t))
                .collect::<Result<Vec<_>>>()?;
            points[0] = joint;
            joint = points[points.len() - 1];
            segments.push(SampledSegment { points, tangents });
        }

        if let Some(last) = segments.last_mut() {
            let n = last.points.len();
            last.points[n - 1] = start;
        }

        let outline = Self { segments };
        let ring_len = outline.ring().len();
        trace!(segments = outline.segments.len(), ring_len, "sampled outline");
        if ring_len < 3 {
            return Err(TessellationError::Failed(format!(
                "outline needs at least 3 points, got {ring_len}"
            ))
            .into());
        }
        Ok(outline)
    }

    /// Returns the sampled segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[SampledSegment] {
        &self.segments
    }

    /// Returns the closed point ring (the closing point is not repeated).
    #[must_use]
    pub fn ring(&self) -> Vec<Point2> {
        self.segments
            .iter()
            .flat_map(|s| s.points[..s.points.len() - 1].iter().copied())
            .collect()
    }

    /// Signed area of the sampled ring, positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.ring())
    }

    /// Returns `true` if the sampled ring does not intersect itself.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        is_simple_polygon(&self.ring())
    }

    /// Returns the same outline traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let segments = self
            .segments
            .iter()
            .rev()
            .map(|s| SampledSegment {
                points: s.points.iter().rev().copied().collect(),
                tangents: s.tangents.iter().rev().map(|t| -t).collect(),
            })
            .collect();
        Self { segments }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    fn disc(radius: f64) -> Shape {
        let mut shape = Shape::new();
        shape.absarc(0.0, 0.0, radius, 0.0, 2.0 * PI, false).unwrap();
        shape.close_path().unwrap();
        shape
    }

    #[test]
    fn open_shape_is_rejected() {
        let mut shape = Shape::new();
        shape.move_to(0.0, 0.0).unwrap();
        shape.line_to(1.0, 0.0).unwrap();
        let err = Outline::from_shape(&shape, &TessellationParams::default());
        assert!(err.is_err());
    }

    #[test]
    fn segments_share_joints() {
        let mut shape = Shape::new();
        shape.move_to(0.0, -1.0).unwrap();
        shape.absarc(0.0, 0.0, 1.0, -PI / 2.0, PI / 2.0, false).unwrap();
        shape.close_path().unwrap();

        let outline = Outline::from_shape(&shape, &TessellationParams::default()).unwrap();
        let segs = outline.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].points.last(), segs[1].points.first());
        assert_eq!(segs[1].points.last(), segs[0].points.first());
    }

    #[test]
    fn disc_area_converges() {
        let outline = Outline::from_shape(&disc(2.0), &TessellationParams::default()).unwrap();
        assert_relative_eq!(outline.signed_area(), PI * 4.0, max_relative = 1e-2);
        assert!(outline.is_simple());
    }

    #[test]
    fn reversal_flips_area_sign() {
        let outline = Outline::from_shape(&disc(1.0), &TessellationParams::default()).unwrap();
        let rev = outline.reversed();
        assert_relative_eq!(rev.signed_area(), -outline.signed_area(), epsilon = 1e-12);
        assert_eq!(rev.ring().len(), outline.ring().len());
    }
}
