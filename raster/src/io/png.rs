use crate::render::Framebuffer;
use image::RgbaImage;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("framebuffer of {width}x{height} does not fit a PNG image")]
    TooLarge { width: usize, height: usize },

    #[error("failed to write PNG '{}': {source}", path.display())]
    Image { path: PathBuf, source: image::ImageError },
}

/// Encodes the color buffer as an 8-bit RGBA PNG at `path`, overwriting any existing file.
pub fn save_png(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let (width, height) = (framebuffer.width(), framebuffer.height());
    let too_large = || EncodeError::TooLarge { width, height };
    let image = RgbaImage::from_raw(
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(height).map_err(|_| too_large())?,
        framebuffer.as_rgba_bytes().to_vec(),
    )
    .ok_or_else(too_large)?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| EncodeError::Image { path: path.to_path_buf(), source })?;
    log::info!("wrote {}x{} image to '{}'", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RGBA;

    #[test]
    fn test_saved_png_round_trips_pixels() {
        let mut framebuffer = Framebuffer::new(3, 2).unwrap();
        *framebuffer.color_buffer.at_mut(1, 0) = RGBA::gray(128);
        *framebuffer.color_buffer.at_mut(2, 1) = RGBA::gray(255);

        let path = std::env::temp_dir().join(format!("raster-png-test-{}.png", std::process::id()));
        save_png(&framebuffer, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0, [128, 128, 128, 255]);
        assert_eq!(decoded.get_pixel(2, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let framebuffer = Framebuffer::new(2, 2).unwrap();
        let path = std::env::temp_dir().join("raster-no-such-dir").join("nested").join("out.png");
        let result = save_png(&framebuffer, &path);
        assert!(matches!(result, Err(EncodeError::Image { .. })));
        // the framebuffer is untouched by a failed encode
        assert!(framebuffer.as_rgba_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));
    }
}
