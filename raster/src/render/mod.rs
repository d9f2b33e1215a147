pub mod buffer;
pub mod camera;
pub mod error;
pub mod fragment;
pub mod framebuffer;
pub mod mesh;
pub mod pipeline;
pub mod rasterizer;
pub mod rgba;
pub mod vertex;

pub use buffer::*;
pub use camera::*;
pub use error::*;
pub use fragment::*;
pub use framebuffer::*;
pub use mesh::*;
pub use pipeline::*;
pub use rasterizer::*;
pub use rgba::*;
pub use vertex::*;
