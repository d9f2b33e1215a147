pub mod io;
pub mod math;
pub mod render;
