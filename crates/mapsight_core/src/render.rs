//! Pixel buffer and the rendering collaborator seam.
//!
//! The core never rasterizes anything itself. A renderer implementation
//! owns (or borrows) the loaded map and turns a [`PreviewColorScheme`]
//! into a [`PreviewImage`]; the core only defines the seam and the buffer
//! the image encoder consumes.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::Result;
use crate::scheme::PreviewColorScheme;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A rendered preview: a row-major RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl PreviewImage {
    /// Create a fully transparent image.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.pixels[offset] = color.r;
        self.pixels[offset + 1] = color.g;
        self.pixels[offset + 2] = color.b;
        self.pixels[offset + 3] = color.a;
    }

    /// Read one pixel, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some(Rgba::new(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ))
    }
}

/// The rendering collaborator.
///
/// Implementations hold the loaded map and rasterize it according to the
/// scheme. Failures surface as [`crate::error::PreviewError::RenderingFailed`]
/// with the collaborator's message unmodified.
pub trait PreviewRenderer {
    /// Render a preview of the held map with the given color scheme.
    fn render(&self, scheme: &PreviewColorScheme) -> Result<PreviewImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_is_transparent() {
        let image = PreviewImage::new(4, 2);
        assert_eq!(image.pixels.len(), 4 * 2 * BYTES_PER_PIXEL);
        assert_eq!(image.get_pixel(0, 0), Some(Rgba::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_put_and_get_pixel() {
        let mut image = PreviewImage::new(3, 3);
        let color = Rgba::rgb(255, 0, 255);
        image.put_pixel(2, 1, color);
        assert_eq!(image.get_pixel(2, 1), Some(color));
        assert_eq!(image.get_pixel(0, 0), Some(Rgba::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut image = PreviewImage::new(2, 2);
        image.put_pixel(5, 5, Rgba::BLACK);
        assert_eq!(image.get_pixel(5, 5), None);
        assert!(image.pixels.iter().all(|&b| b == 0));
    }
}
