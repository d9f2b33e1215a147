use super::*;
use crate::math::*;

/// Runs the whole pipeline on `mesh` and returns a fresh framebuffer with the image.
///
/// The vertex stage fills its own buffers, the rasterizer shades every covered pixel that
/// wins the depth test, and the framebuffer comes back ready for encoding.
pub fn render(
    mesh: &Mesh,
    camera: &Camera,
    width: usize,
    height: usize,
    options: RasterizerOptions,
) -> Result<Framebuffer, RenderError> {
    let mut framebuffer = Framebuffer::new(width, height)?;

    let mut transformed = TransformedMesh {
        positions: vec![Vec4::ZERO; mesh.vertex_count()],
        normals: vec![Vec4::ZERO; mesh.normals().len()],
    };
    run_vertex_stage_into(camera, mesh, &mut transformed.positions, &mut transformed.normals)?;
    log::debug!("vertex stage transformed {} vertices", mesh.vertex_count());

    let command = RasterizationCommand::new(&transformed, mesh);
    Rasterizer::new(options).draw(&command, &mut framebuffer)?;
    Ok(framebuffer)
}
