use crate::math::*;
use super::*;
use rayon::prelude::*;

/// Which pixels are tested against each triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Every pixel of the image is tested against every triangle.
    #[default]
    Exhaustive,

    /// Only pixels inside the triangle's screen-space bounding box are tested.
    /// Produces exactly the same image as `Exhaustive`.
    BoundingBox,
}

/// How the image is distributed over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// One thread walks triangles, then pixels.
    #[default]
    Serial,

    /// The image is split into disjoint bands of [`Rasterizer::BAND_HEIGHT`] rows.
    /// Every band walks all triangles in index order, so each cell sees the same
    /// sequence of depth tests as in `Serial` and the result is identical.
    RowBands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterizerOptions {
    pub traversal: Traversal,
    pub parallelism: Parallelism,
}

/// Vertex stage output plus the mesh's triangle indices.
#[derive(Debug, Clone, Copy)]
pub struct RasterizationCommand<'a> {
    /// NDC positions after the perspective divide
    pub positions: &'a [Vec4],

    /// Transformed normals, parallel to `positions`
    pub normals: &'a [Vec4],

    /// Triangle indices: [t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...].
    pub indices: &'a [u32],
}

impl<'a> RasterizationCommand<'a> {
    pub fn new(transformed: &'a TransformedMesh, mesh: &'a Mesh) -> Self {
        Self { positions: &transformed.positions, normals: &transformed.normals, indices: mesh.indices() }
    }
}

/// A triangle with its vertices already mapped to pixel coordinates.
#[derive(Debug, Clone, Copy)]
struct ScreenTriangle {
    vertices: [Vec4; 3],
    normals: [Vec4; 3],
}

/// Inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelBounds {
    xmin: usize,
    xmax: usize,
    ymin: usize,
    ymax: usize,
}

pub struct Rasterizer {
    options: RasterizerOptions,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(RasterizerOptions::default())
    }
}

impl Rasterizer {
    pub const BAND_HEIGHT: usize = 64;

    pub fn new(options: RasterizerOptions) -> Self {
        Rasterizer { options }
    }

    pub fn options(&self) -> RasterizerOptions {
        self.options
    }

    /// Rasterizes every triangle of `command` into `framebuffer`, nearest fragment wins.
    ///
    /// Preconditions are checked up front; once drawing starts it cannot fail.
    pub fn draw(&self, command: &RasterizationCommand, framebuffer: &mut Framebuffer) -> Result<(), RenderError> {
        validate(command)?;

        let width = framebuffer.width();
        let height = framebuffer.height();
        let triangles = setup_triangles(command, width, height);
        log::debug!(
            "rasterising {} triangles into {}x{} ({:?}, {:?})",
            triangles.len(),
            width,
            height,
            self.options.traversal,
            self.options.parallelism
        );

        match self.options.parallelism {
            Parallelism::Serial => {
                let mut band = framebuffer.full_band();
                self.draw_band(&mut band, &triangles, height);
            }
            Parallelism::RowBands => {
                framebuffer.bands_mut(Self::BAND_HEIGHT).into_par_iter().for_each(|mut band| {
                    self.draw_band(&mut band, &triangles, height);
                });
            }
        }
        Ok(())
    }

    fn draw_band(&self, band: &mut FramebufferBand, triangles: &[ScreenTriangle], height: usize) {
        let width = band.width;
        let rows = band.rows();
        for (triangle_index, triangle) in triangles.iter().enumerate() {
            if rows.start == 0 {
                log::trace!("rasterising triangle {}/{}", triangle_index + 1, triangles.len());
            }

            let bounds = match self.options.traversal {
                Traversal::Exhaustive => PixelBounds::full(width, height),
                Traversal::BoundingBox => match triangle.bounds(width, height) {
                    Some(bounds) => bounds,
                    None => continue,
                },
            };
            let ymin = bounds.ymin.max(rows.start);
            let ymax = bounds.ymax.min(rows.end - 1);
            if ymin > ymax {
                continue;
            }

            let [v0, v1, v2] = triangle.vertices;
            for y in ymin..=ymax {
                for x in bounds.xmin..=bounds.xmax {
                    let weights = barycentric_weights(v0, v1, v2, Vec2::new(x as f32, y as f32));
                    if !covers(weights) {
                        continue;
                    }
                    let depth = interpolate_depth(triangle.vertices, weights);
                    if !in_depth_range(depth) {
                        continue;
                    }
                    band.test_and_set(x, y, depth, || shade(interpolate_normal(triangle.normals, weights)));
                }
            }
        }
    }
}

fn validate(command: &RasterizationCommand) -> Result<(), RenderError> {
    if command.indices.len() % 3 != 0 {
        return Err(RenderError::IndexCountNotMultipleOfThree(command.indices.len()));
    }
    if command.normals.len() != command.positions.len() {
        return Err(RenderError::BufferSizeMismatch {
            buffer: "transformed normal",
            expected: command.positions.len(),
            actual: command.normals.len(),
        });
    }
    let available = command.positions.len();
    if let Some((position, &index)) = command.indices.iter().enumerate().find(|&(_, &i)| i as usize >= available) {
        return Err(RenderError::IndexOutOfRange { position, index, available });
    }
    Ok(())
}

fn setup_triangles(command: &RasterizationCommand, width: usize, height: usize) -> Vec<ScreenTriangle> {
    command
        .indices
        .chunks_exact(3)
        .map(|tri| {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            ScreenTriangle {
                vertices: [
                    to_screen_space(command.positions[i0], width, height),
                    to_screen_space(command.positions[i1], width, height),
                    to_screen_space(command.positions[i2], width, height),
                ],
                normals: [command.normals[i0], command.normals[i1], command.normals[i2]],
            }
        })
        .collect()
}

impl ScreenTriangle {
    /// Screen coordinates beyond this multiple of the image size are too coarse to bound.
    const FAR_COORDINATE_FACTOR: f32 = 4.0;

    /// Pixel rectangle that can contain covered pixels, padded by one pixel and clamped
    /// to the image.
    ///
    /// Coverage is decided by the weights alone, so the box must never be tighter than
    /// what the weights accept. With a vertex far outside the viewport, f32 cancellation
    /// in [`barycentric_weights`] can accept pixels well outside the true triangle; such
    /// triangles, and ones with non-finite coordinates, get the whole image.
    fn bounds(&self, width: usize, height: usize) -> Option<PixelBounds> {
        let [v0, v1, v2] = self.vertices;
        let xs = [v0.x, v1.x, v2.x];
        let ys = [v0.y, v1.y, v2.y];
        let limit = Self::FAR_COORDINATE_FACTOR * width.max(height) as f32;
        if xs.iter().chain(ys.iter()).any(|c| !c.is_finite() || c.abs() > limit) {
            return Some(PixelBounds::full(width, height));
        }
        let min = |c: [f32; 3]| c[0].min(c[1]).min(c[2]).floor() - 1.0;
        let max = |c: [f32; 3]| c[0].max(c[1]).max(c[2]).ceil() + 1.0;
        let (xmin, xmax, ymin, ymax) = (min(xs), max(xs), min(ys), max(ys));
        if xmax < 0.0 || ymax < 0.0 || xmin > (width - 1) as f32 || ymin > (height - 1) as f32 {
            return None;
        }
        Some(PixelBounds {
            xmin: xmin.max(0.0) as usize,
            xmax: (xmax as usize).min(width - 1),
            ymin: ymin.max(0.0) as usize,
            ymax: (ymax as usize).min(height - 1),
        })
    }
}

impl PixelBounds {
    fn full(width: usize, height: usize) -> Self {
        PixelBounds { xmin: 0, xmax: width - 1, ymin: 0, ymax: height - 1 }
    }
}

/// Maps NDC x, y in [-0.5, 0.5] onto [0, width] x [0, height]; z and w pass through.
pub fn to_screen_space(ndc: Vec4, width: usize, height: usize) -> Vec4 {
    Vec4::new((ndc.x + 0.5) * width as f32, (ndc.y + 0.5) * height as f32, ndc.z, ndc.w)
}

/// Barycentric weights (w0, w1, w2) of point `p` relative to the triangle's screen-space xy.
///
/// Each weight is a signed sub-triangle area over the whole area, and w2 = 1 - w0 - w1.
/// A zero-area triangle divides by zero; the resulting non-finite weights never pass [`covers`].
pub fn barycentric_weights(v0: Vec4, v1: Vec4, v2: Vec4, p: Vec2) -> Vec3 {
    let area = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    let w0 = ((v1.y - v2.y) * (p.x - v2.x) + (v2.x - v1.x) * (p.y - v2.y)) / area;
    let w1 = ((v2.y - v0.y) * (p.x - v2.x) + (v0.x - v2.x) * (p.y - v2.y)) / area;
    Vec3::new(w0, w1, 1.0 - w0 - w1)
}

/// Edge-inclusive coverage: all weights finite and non-negative.
pub fn covers(weights: Vec3) -> bool {
    weights.is_finite() && weights.x >= 0.0 && weights.y >= 0.0 && weights.z >= 0.0
}

pub fn interpolate_depth(vertices: [Vec4; 3], weights: Vec3) -> f32 {
    weights.x * vertices[0].z + weights.y * vertices[1].z + weights.z * vertices[2].z
}

/// Fragments outside [-1, 1] are clipped regardless of coverage.
pub fn in_depth_range(depth: f32) -> bool {
    (-1.0..=1.0).contains(&depth)
}
