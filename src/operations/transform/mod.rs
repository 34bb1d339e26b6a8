mod rigid;

pub use rigid::Transform;
