use super::*;

/// Color and depth targets of one render, allocated together at the target resolution.
pub struct Framebuffer {
    pub color_buffer: Buffer<RGBA>,
    pub depth_buffer: Buffer<f32>,
}

/// A horizontal strip of rows borrowed from both buffers of a [`Framebuffer`].
///
/// Bands of the same framebuffer never overlap, so each can be written from its own thread.
pub struct FramebufferBand<'a> {
    /// Width of the band in pixels, equal to the framebuffer width
    pub width: usize,

    /// Index of the band's first row inside the framebuffer
    pub origin_y: usize,

    /// Number of rows in the band
    pub height: usize,

    color: &'a mut [RGBA],
    depth: &'a mut [f32],
}

impl Framebuffer {
    /// Depth of the far plane; every cell of a fresh depth buffer holds it.
    pub const FAR_DEPTH: f32 = 1.0;

    pub fn new(width: usize, height: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyViewport { width, height });
        }
        Ok(Self {
            color_buffer: Buffer::new_filled(width, height, RGBA::BLACK),
            depth_buffer: Buffer::new_filled(width, height, Self::FAR_DEPTH),
        })
    }

    pub fn width(&self) -> usize {
        self.color_buffer.width
    }

    pub fn height(&self) -> usize {
        self.color_buffer.height
    }

    pub fn color_at(&self, x: usize, y: usize) -> RGBA {
        self.color_buffer.at(x, y)
    }

    pub fn depth_at(&self, x: usize, y: usize) -> f32 {
        self.depth_buffer.at(x, y)
    }

    /// Row-major RGBA bytes, `width * height * 4` of them.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.color_buffer.as_u8_slice()
    }

    /// The whole framebuffer as a single band.
    pub fn full_band(&mut self) -> FramebufferBand<'_> {
        FramebufferBand {
            width: self.color_buffer.width,
            origin_y: 0,
            height: self.color_buffer.height,
            color: &mut self.color_buffer.elems,
            depth: &mut self.depth_buffer.elems,
        }
    }

    /// Splits the framebuffer into disjoint bands of `rows` rows; the last one may be shorter.
    pub fn bands_mut(&mut self, rows: usize) -> Vec<FramebufferBand<'_>> {
        let width = self.color_buffer.width;
        let rows = rows.max(1);
        let chunk = self.color_buffer.stride * rows;
        debug_assert_eq!(self.color_buffer.stride, self.depth_buffer.stride);
        self.color_buffer
            .elems
            .chunks_mut(chunk)
            .zip(self.depth_buffer.elems.chunks_mut(chunk))
            .enumerate()
            .map(|(index, (color, depth))| FramebufferBand {
                width,
                origin_y: index * rows,
                height: color.len() / width,
                color,
                depth,
            })
            .collect()
    }
}

impl FramebufferBand<'_> {
    /// Rows of the framebuffer covered by this band, in framebuffer coordinates.
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.origin_y..self.origin_y + self.height
    }

    /// Writes `color` and `depth` at (x, y) if `depth` is strictly nearer than the stored one.
    /// Returns whether the write happened. `y` is in framebuffer coordinates.
    pub fn test_and_set(&mut self, x: usize, y: usize, depth: f32, color: impl FnOnce() -> RGBA) -> bool {
        debug_assert!(x < self.width && self.rows().contains(&y));
        let index = (y - self.origin_y) * self.width + x;
        if depth < self.depth[index] {
            self.depth[index] = depth;
            self.color[index] = color();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer_is_cleared() {
        let framebuffer = Framebuffer::new(3, 2).unwrap();
        assert_eq!(framebuffer.as_rgba_bytes().len(), 3 * 2 * 4);
        for chunk in framebuffer.as_rgba_bytes().chunks(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
        assert!(framebuffer.depth_buffer.elems.iter().all(|&d| d == 1.0));
    }

    #[test]
    fn test_empty_viewport_is_rejected() {
        assert_eq!(Framebuffer::new(0, 4).err(), Some(RenderError::EmptyViewport { width: 0, height: 4 }));
        assert_eq!(Framebuffer::new(4, 0).err(), Some(RenderError::EmptyViewport { width: 4, height: 0 }));
    }

    #[test]
    fn test_bands_cover_every_row_once() {
        let mut framebuffer = Framebuffer::new(5, 10).unwrap();
        let bands = framebuffer.bands_mut(4);
        let rows: Vec<_> = bands.iter().map(|b| b.rows()).collect();
        assert_eq!(rows, vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_depth_test_is_strict() {
        let mut framebuffer = Framebuffer::new(2, 2).unwrap();
        {
            let mut band = framebuffer.full_band();
            assert!(band.test_and_set(1, 1, 0.5, || RGBA::gray(10)));
            assert!(!band.test_and_set(1, 1, 0.5, || RGBA::gray(20)));
            assert!(!band.test_and_set(1, 1, 0.7, || RGBA::gray(30)));
            assert!(band.test_and_set(1, 1, 0.2, || RGBA::gray(40)));
        }
        assert_eq!(framebuffer.color_at(1, 1), RGBA::gray(40));
        assert_eq!(framebuffer.depth_at(1, 1), 0.2);
        assert_eq!(framebuffer.color_at(0, 0), RGBA::BLACK);
    }

    #[test]
    fn test_band_writes_land_in_framebuffer_rows() {
        let mut framebuffer = Framebuffer::new(2, 4).unwrap();
        for mut band in framebuffer.bands_mut(2) {
            let y = band.origin_y + 1;
            band.test_and_set(0, y, 0.0, || RGBA::gray(255));
        }
        assert_eq!(framebuffer.color_at(0, 1), RGBA::gray(255));
        assert_eq!(framebuffer.color_at(0, 3), RGBA::gray(255));
        assert_eq!(framebuffer.color_at(0, 0), RGBA::BLACK);
        assert_eq!(framebuffer.color_at(0, 2), RGBA::BLACK);
    }
}
