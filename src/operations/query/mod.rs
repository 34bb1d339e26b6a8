mod area;
mod bounding_box;
mod is_watertight;
mod volume;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use is_watertight::IsWatertight;
pub use volume::Volume;
