//! PNG encoding of preview images.

use std::path::Path;

use mapsight_core::error::{PreviewError, Result};
use mapsight_core::render::PreviewImage;

/// Write a preview image to a PNG file.
///
/// # Errors
///
/// Returns [`PreviewError::EncodingFailed`] when the pixel buffer does
/// not match the declared dimensions or the encoder cannot write the
/// file. The encoder's message is carried unmodified.
pub fn write_png(path: &Path, image: &PreviewImage) -> Result<()> {
    let buffer: image::RgbaImage =
        image::ImageBuffer::from_raw(image.width, image.height, image.pixels.clone()).ok_or_else(
            || {
                PreviewError::EncodingFailed(format!(
                    "pixel buffer does not match {}x{} dimensions",
                    image.width, image.height
                ))
            },
        )?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PreviewError::EncodingFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use mapsight_core::color::Rgba;

    use super::*;

    #[test]
    fn test_writes_png_file() {
        let mut image = PreviewImage::new(2, 2);
        image.put_pixel(0, 0, Rgba::rgb(255, 0, 255));
        let path = std::env::temp_dir().join("mapsight_png_test.png");

        write_png(&path, &image).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // PNG signature
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_mismatched_buffer_is_an_encoding_failure() {
        let image = PreviewImage {
            width: 4,
            height: 4,
            pixels: vec![0; 7],
        };
        let err = write_png(Path::new("unused.png"), &image).unwrap_err();
        assert!(matches!(err, PreviewError::EncodingFailed(_)));
    }
}
