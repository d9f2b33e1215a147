use super::*;
use crate::math::*;

/// Vertex stage output, parallel to the mesh's vertex sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformedMesh {
    /// NDC positions: x, y, z divided by w, w kept as is
    pub positions: Vec<Vec4>,

    /// Normals multiplied by the normal matrix, not divided
    pub normals: Vec<Vec4>,
}

/// Transforms every position and normal of `mesh` into freshly allocated buffers.
pub fn run_vertex_stage(camera: &Camera, mesh: &Mesh) -> TransformedMesh {
    let mut transformed = TransformedMesh {
        positions: vec![Vec4::ZERO; mesh.vertex_count()],
        normals: vec![Vec4::ZERO; mesh.vertex_count()],
    };
    transform_positions(camera, mesh.positions(), &mut transformed.positions);
    transform_normals(camera, mesh.normals(), &mut transformed.normals);
    transformed
}

/// Fills pre-sized output buffers, one element per mesh vertex.
pub fn run_vertex_stage_into(
    camera: &Camera,
    mesh: &Mesh,
    positions: &mut [Vec4],
    normals: &mut [Vec4],
) -> Result<(), RenderError> {
    check_len("transformed vertex", mesh.vertex_count(), positions.len())?;
    check_len("transformed normal", mesh.normals().len(), normals.len())?;
    transform_positions(camera, mesh.positions(), positions);
    transform_normals(camera, mesh.normals(), normals);
    Ok(())
}

fn check_len(buffer: &'static str, expected: usize, actual: usize) -> Result<(), RenderError> {
    if expected != actual {
        return Err(RenderError::BufferSizeMismatch { buffer, expected, actual });
    }
    Ok(())
}

fn transform_positions(camera: &Camera, input: &[Vec3], output: &mut [Vec4]) {
    let mvp = camera.model_view_projection();
    for (out, position) in output.iter_mut().zip(input) {
        *out = perspective_divide(mvp * position.as_point4());
    }
}

fn transform_normals(camera: &Camera, input: &[Vec3], output: &mut [Vec4]) {
    let normal_matrix = camera.normal_matrix;
    for (out, normal) in output.iter_mut().zip(input) {
        *out = normal_matrix * normal.as_point4();
    }
}

/// Divides x, y and z by w. Unlike a GPU, w itself survives untouched.
pub fn perspective_divide(v: Vec4) -> Vec4 {
    Vec4::new(v.x / v.w, v.y / v.w, v.z / v.w, v.w)
}
