use image::{ImageReader, Limits};
use skin_tone::PixelBuffer;
use std::io::Cursor;

use crate::error::DecodeError;
use crate::models::LimitsConfig;

/// Turns uploaded PNG/JPEG bytes into a validated RGBA buffer.
#[derive(Debug, Clone)]
pub struct ImageDecoder {
    max_upload_bytes: usize,
    max_dimension: u32,
}

impl ImageDecoder {
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            max_upload_bytes: limits.max_upload_bytes,
            max_dimension: limits.max_dimension,
        }
    }

    /// Decode `bytes`, guessing the format from its content.
    pub fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        if bytes.len() > self.max_upload_bytes {
            return Err(DecodeError::TooLarge {
                size: bytes.len(),
                max: self.max_upload_bytes,
            });
        }

        let (width, height) = self.reader(bytes)?.into_dimensions()?;
        if width > self.max_dimension || height > self.max_dimension {
            return Err(DecodeError::UnsupportedDimensions {
                width,
                height,
                max: self.max_dimension,
            });
        }

        let mut reader = self.reader(bytes)?;
        let mut limits = Limits::default();
        limits.max_image_width = Some(self.max_dimension);
        limits.max_image_height = Some(self.max_dimension);
        reader.limits(limits);

        let rgba = reader.decode()?.into_rgba8();
        let (width, height) = rgba.dimensions();

        tracing::debug!(
            width,
            height,
            bytes = bytes.len(),
            "Decoded upload"
        );

        Ok(PixelBuffer::new(
            width as usize,
            height as usize,
            rgba.into_raw(),
        )?)
    }

    fn reader<'a>(&self, bytes: &'a [u8]) -> Result<ImageReader<Cursor<&'a [u8]>>, DecodeError> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        if reader.format().is_none() {
            return Err(DecodeError::UnknownFormat);
        }
        Ok(reader)
    }
}

impl Default for ImageDecoder {
    fn default() -> Self {
        Self::new(&LimitsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba(rgba));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let buffer = ImageDecoder::default()
            .decode(&png(6, 4, [200, 150, 120, 255]))
            .unwrap();

        assert_eq!(buffer.width(), 6);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.pixel(0), [200, 150, 120, 255]);
    }

    #[test]
    fn test_decode_jpeg_expands_to_rgba() {
        let image = RgbImage::from_pixel(8, 8, Rgb([128, 128, 128]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Jpeg).unwrap();

        let buffer = ImageDecoder::default().decode(out.get_ref()).unwrap();
        assert_eq!(buffer.pixel_count(), 64);
        assert_eq!(buffer.pixel(0)[3], 255);
    }

    #[test]
    fn test_empty_body_rejected() {
        let err = ImageDecoder::default().decode(&[]).unwrap_err();
        assert!(matches!(err, DecodeError::Empty));
    }

    #[test]
    fn test_garbage_rejected() {
        let err = ImageDecoder::default()
            .decode(b"definitely not an image")
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFormat));
        assert!(!err.is_oversize());
    }

    #[test]
    fn test_upload_size_limit() {
        let decoder = ImageDecoder::new(&LimitsConfig {
            max_upload_bytes: 16,
            ..Default::default()
        });
        let err = decoder.decode(&png(4, 4, [0, 0, 0, 255])).unwrap_err();
        assert!(matches!(err, DecodeError::TooLarge { max: 16, .. }));
        assert!(err.is_oversize());
    }

    #[test]
    fn test_dimension_limit() {
        let decoder = ImageDecoder::new(&LimitsConfig {
            max_dimension: 8,
            ..Default::default()
        });
        let err = decoder.decode(&png(9, 2, [0, 0, 0, 255])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedDimensions {
                width: 9,
                height: 2,
                max: 8
            }
        ));
    }
}
