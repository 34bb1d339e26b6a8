pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;

pub use error::{CobblerError, Result};
pub use operations::creation::{create_outsole, MakeOutsole, OutsoleParams};
pub use scene::{build_shoe_scene, Scene};
