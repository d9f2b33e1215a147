pub mod obj;
pub mod png;

pub use obj::*;
pub use png::*;
