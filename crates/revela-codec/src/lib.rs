//! Decode/encode collaborator: opaque platform image bytes in, a
//! `RasterImage` out, and the inverse for a storage target. The core
//! pipeline never sees a file format; it is all handled here.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use tracing::debug;

use revela_core::raster::{PixelFormat, RasterImage};

/// Source image bytes failed to load.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unrecognized image format: {0}")]
    UnsupportedFormat(String),
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("i/o error reading image: {0}")]
    Io(#[from] std::io::Error),
}

/// A rendered image failed to reach its storage target.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("image encode failed: {0}")]
    Encode(String),
    #[error("i/o error writing image: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode platform-native image bytes (JPEG/PNG/TIFF) into an RGBA
/// raster buffer.
pub fn decode_bytes(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    image::guess_format(bytes)
        .map_err(|e| DecodeError::UnsupportedFormat(e.to_string()))?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| DecodeError::Decode(e.to_string()))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(width, height, "decoded source image");

    // from_data re-checks buffer length against the dimensions, so a
    // decoder handing back a short buffer surfaces as a decode error.
    RasterImage::from_data(width, height, PixelFormat::Rgba8, rgba.into_raw())
        .map_err(|e| DecodeError::Decode(e.to_string()))
}

pub fn decode_file(path: &Path) -> Result<RasterImage, DecodeError> {
    let bytes = fs::read(path)?;
    decode_bytes(&bytes)
}

/// Encode a raster buffer as PNG.
pub fn encode_png_bytes(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    let color = match image.format {
        PixelFormat::Rgb8 => image::ExtendedColorType::Rgb8,
        PixelFormat::Rgba8 => image::ExtendedColorType::Rgba8,
    };
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &image.data,
        image.width,
        image.height,
        color,
        image::ImageFormat::Png,
    )
    .map_err(|e| EncodeError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Encode a raster buffer as PNG and write it to `path`.
pub fn encode_png(image: &RasterImage, path: &Path) -> Result<(), EncodeError> {
    let bytes = encode_png_bytes(image)?;
    fs::write(path, bytes)?;
    debug!(path = %path.display(), "wrote exported image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RasterImage {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 37 % 256) as u8);
                data.push((y * 53 % 256) as u8);
                data.push(((x + y) * 11 % 256) as u8);
            }
        }
        RasterImage::from_data(width, height, PixelFormat::Rgb8, data).unwrap()
    }

    #[test]
    fn png_roundtrip_preserves_pixels() {
        let original = gradient(8, 5);
        let bytes = encode_png_bytes(&original).unwrap();
        let decoded = decode_bytes(&bytes).unwrap();

        assert_eq!(decoded.width, 8);
        assert_eq!(decoded.height, 5);
        assert_eq!(decoded.format, PixelFormat::Rgba8);
        // Decoded output is RGBA; compare the color channels.
        for (rgb, rgba) in original.data.chunks_exact(3).zip(decoded.data.chunks_exact(4)) {
            assert_eq!(rgb, &rgba[..3]);
            assert_eq!(rgba[3], 255);
        }
    }

    #[test]
    fn rgba_roundtrip_keeps_alpha() {
        let original =
            RasterImage::from_data(1, 1, PixelFormat::Rgba8, vec![10, 20, 30, 99]).unwrap();
        let bytes = encode_png_bytes(&original).unwrap();
        let decoded = decode_bytes(&bytes).unwrap();
        assert_eq!(decoded.data, vec![10, 20, 30, 99]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_bytes(b"definitely not an image").unwrap_err();
        assert!(
            matches!(err, DecodeError::UnsupportedFormat(_) | DecodeError::Decode(_)),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let bytes = encode_png_bytes(&gradient(16, 16)).unwrap();
        let err = decode_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, DecodeError::Decode(_)), "unexpected error: {err}");
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let original = gradient(4, 4);

        encode_png(&original, &path).unwrap();
        let decoded = decode_file(&path).unwrap();
        assert_eq!(decoded.width, 4);
        assert_eq!(decoded.height, 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = decode_file(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
    }
}
