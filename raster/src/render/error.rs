/// Errors detected while assembling a [`Mesh`](super::Mesh) from raw attribute buffers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotMultipleOfThree(usize),

    #[error("index #{position} refers to vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange { position: usize, index: u32, vertex_count: usize },

    #[error("mesh has {positions} positions but {normals} normals")]
    AttributeLengthMismatch { positions: usize, normals: usize },
}

/// Precondition violations reported by the vertex stage and the rasterizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: usize, height: usize },

    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotMultipleOfThree(usize),

    #[error("index #{position} refers to vertex {index}, but only {available} are available")]
    IndexOutOfRange { position: usize, index: u32, available: usize },

    #[error("{buffer} buffer holds {actual} elements, expected {expected}")]
    BufferSizeMismatch { buffer: &'static str, expected: usize, actual: usize },
}
