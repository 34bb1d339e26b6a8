mod make_box;
mod make_outsole;

pub use make_box::{BoxParams, MakeBox};
pub use make_outsole::{create_outsole, MakeOutsole, OutsoleParams};
