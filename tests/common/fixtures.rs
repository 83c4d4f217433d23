//! Test fixtures and constants.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Skin tones with a known category under the default rules
pub mod tones {
    /// Brightness ~197, red/green 1.21 -> A
    pub const FAIR: [u8; 4] = [230, 190, 170, 255];

    /// Brightness ~133, red/green 1.08 -> B
    pub const WHEATISH: [u8; 4] = [160, 148, 92, 255];

    /// Brightness 90 -> C
    pub const BRONZE: [u8; 4] = [120, 90, 60, 255];

    /// Brightness ~65 -> D
    pub const DEEP: [u8; 4] = [90, 60, 45, 255];

    /// Ratio exactly 1.0 -> D
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
}

/// Encode a single-color PNG
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    encode(&RgbaImage::from_pixel(width, height, Rgba(rgba)), ImageFormat::Png)
}

/// Encode a PNG whose luminance rises left to right
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8;
        Rgba([v, v, v, 255])
    });
    encode(&image, ImageFormat::Png)
}

/// Encode a single-color JPEG
pub fn solid_jpeg(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Jpeg).unwrap();
    out.into_inner()
}

fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}
