pub mod curve;
pub mod shape;

pub use curve::{Arc, Curve2, LineSegment};
pub use shape::{Shape, ShapeSegment};
