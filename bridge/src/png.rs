//! Lossless PNG encoding of clipboard images.

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use quizkit_clipboard::ImageData;
use thiserror::Error;

/// Errors produced while encoding a clipboard image to PNG.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width, height, and byte length do not describe a valid RGBA image.
    #[error("invalid image geometry: {width}x{height} with {len} bytes")]
    BadGeometry {
        /// Claimed width in pixels.
        width: usize,
        /// Claimed height in pixels.
        height: usize,
        /// Actual length of the pixel buffer.
        len: usize,
    },

    /// The PNG encoder rejected the image.
    #[error("png encoding failed: {0}")]
    Codec(#[from] image::ImageError),
}

/// Encode raw RGBA clipboard data as PNG bytes.
///
/// The encoding is lossless: decoding the returned bytes reproduces the
/// image's dimensions and pixel content exactly.
///
/// # Errors
/// [`EncodeError::BadGeometry`] when the dimensions do not match the pixel
/// buffer, [`EncodeError::Codec`] when the encoder rejects the image.
pub fn encode_png(image: &ImageData) -> Result<Vec<u8>, EncodeError> {
    let bad = || EncodeError::BadGeometry {
        width: image.width,
        height: image.height,
        len: image.bytes.len(),
    };

    if image.width == 0 || image.height == 0 {
        return Err(bad());
    }
    let width = u32::try_from(image.width).map_err(|_| bad())?;
    let height = u32::try_from(image.height).map_err(|_| bad())?;
    let expected = image
        .width
        .checked_mul(image.height)
        .and_then(|px| px.checked_mul(4));
    if expected != Some(image.bytes.len()) {
        return Err(bad());
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        &image.bytes,
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn round_trips_pixels_losslessly() {
        let pixels: Vec<u8> = [
            [255u8, 0, 0, 255],
            [0, 255, 0, 255],
            [0, 0, 255, 255],
            [10, 20, 30, 40],
        ]
        .concat();
        let image = ImageData {
            width: 2,
            height: 2,
            bytes: Cow::Owned(pixels.clone()),
        };

        let png = encode_png(&image).expect("2x2 RGBA image encodes");
        let decoded = image::load_from_memory(&png).expect("valid png").to_rgba8();
        assert_eq!((decoded.width(), decoded.height()), (2, 2));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn rejects_mismatched_byte_length() {
        let image = ImageData {
            width: 10,
            height: 10,
            bytes: Cow::Borrowed(&[0u8; 7]),
        };
        assert!(matches!(
            encode_png(&image),
            Err(EncodeError::BadGeometry {
                width: 10,
                height: 10,
                len: 7
            })
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let image = ImageData {
            width: 0,
            height: 4,
            bytes: Cow::Borrowed(&[]),
        };
        assert!(matches!(
            encode_png(&image),
            Err(EncodeError::BadGeometry { .. })
        ));
    }
}
