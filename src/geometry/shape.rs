use tracing::trace;

use crate::error::{Result, ShapeError, TopologyError};
use crate::math::arc_2d::resolve_sweep;
use crate::math::{Point2, TOLERANCE};

use super::curve::{Arc, Curve2, LineSegment};

/// One segment of a [`Shape`] outline.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSegment {
    /// A straight edge.
    Line(LineSegment),
    /// A circular arc.
    Arc(Arc),
}

impl ShapeSegment {
    /// Returns the segment as a generic curve.
    #[must_use]
    pub fn as_curve(&self) -> &dyn Curve2 {
        match self {
            Self::Line(line) => line,
            Self::Arc(arc) => arc,
        }
    }

    /// Returns the arc if this segment is one.
    #[must_use]
    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Line(_) => None,
        }
    }
}

/// A planar outline built from straight edges and circular arcs.
///
/// The path is described with pen-style commands (`move_to`, `line_to`,
/// `absarc`, `close_path`). A single contour is supported; once closed the
/// shape is frozen.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    start: Option<Point2>,
    current: Point2,
    segments: Vec<ShapeSegment>,
    closed: bool,
}

impl Shape {
    /// Creates a new, empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the pen to `(x, y)` without drawing, starting the contour there.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::AlreadyClosed`] if the path is closed, or
    /// [`TopologyError::InvalidTopology`] if segments were already drawn
    /// (only one contour per shape).
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        self.ensure_open()?;
        if !self.segments.is_empty() {
            return Err(TopologyError::InvalidTopology(
                "a shape holds a single contour; move_to after drawing is not supported".into(),
            )
            .into());
        }
        let p = Point2::new(x, y);
        self.start = Some(p);
        self.current = p;
        Ok(self)
    }

    /// Draws a straight edge from the current point to `(x, y)`.
    ///
    /// Drawing to the current point is a no-op. Without a prior `move_to` the
    /// contour starts at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::AlreadyClosed`] if the path is closed.
    pub fn line_to(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        self.ensure_open()?;
        self.begin_at(Point2::origin());
        self.push_line(Point2::new(x, y))?;
        Ok(self)
    }

    /// Draws a circular arc with an absolute center.
    ///
    /// The sweep runs from `start_angle` to `end_angle` (radians),
    /// counter-clockwise unless `clockwise` is set. When the current point
    /// differs from the arc start, a connecting straight edge is drawn first.
    /// An arc whose start and end angles are identical draws nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::AlreadyClosed`] if the path is closed, or
    /// [`ShapeError::InvalidParameter`] if the radius is not positive and finite.
    pub fn absarc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<&mut Self> {
        self.ensure_open()?;
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(ShapeError::InvalidParameter {
                parameter: "radius",
                value: radius,
                reason: "must be positive and finite",
            }
            .into());
        }

        let sweep = resolve_sweep(start_angle, end_angle, clockwise);
        if sweep.abs() < TOLERANCE {
            trace!(start_angle, end_angle, "skipping zero-sweep arc");
            return Ok(self);
        }

        let arc = Arc::new(Point2::new(cx, cy), radius, start_angle, sweep)?;
        let arc_start = arc.start_point();
        self.begin_at(arc_start);
        self.push_line(arc_start)?;
        self.current = arc.end_point();
        self.segments.push(ShapeSegment::Arc(arc));
        Ok(self)
    }

    /// Closes the contour, drawing a straight edge back to the start if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::AlreadyClosed`] if the path is already closed, or
    /// [`TopologyError::InvalidTopology`] if nothing has been drawn.
    pub fn close_path(&mut self) -> Result<&mut Self> {
        self.ensure_open()?;
        let Some(start) = self.start else {
            return Err(TopologyError::InvalidTopology("cannot close an empty path".into()).into());
        };
        if self.segments.is_empty() {
            return Err(TopologyError::InvalidTopology("cannot close an empty path".into()).into());
        }
        self.push_line(start)?;
        // Snap away floating-point drift from the last arc.
        self.current = start;
        self.closed = true;
        Ok(self)
    }

    /// Returns the segments of the outline in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[ShapeSegment] {
        &self.segments
    }

    /// Returns the first point of the contour, if any.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        self.start
    }

    /// Returns the current pen position (the end of the last segment).
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        self.start.map(|_| self.current)
    }

    /// Returns `true` once `close_path` has been called.
    ///
    /// A closed shape always ends where it starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(ShapeError::AlreadyClosed.into());
        }
        Ok(())
    }

    fn begin_at(&mut self, p: Point2) {
        if self.start.is_none() {
            self.start = Some(p);
            self.current = p;
        }
    }

    fn push_line(&mut self, to: Point2) -> Result<()> {
        if (to - self.current).norm() < TOLERANCE {
            return Ok(());
        }
        let line = LineSegment::new(self.current, to)?;
        self.segments.push(ShapeSegment::Line(line));
        self.current = to;
        Ok(())
    }
}
