//! Luminance and gradient scores over a pixel grid.
//!
//! Only interior pixels are visited so every sample has four neighbours.
//! Luminance uses Rec. 601 weights.

use super::scores::percent;
use crate::buffer::PixelBuffer;

/// Luminance below which a pixel contributes to the darkness score.
pub const DARK_LUMINANCE: f64 = 90.0;

/// Scores computed from local structure rather than channel averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionScores {
    /// Mean shortfall below [`DARK_LUMINANCE`], scaled by 0.8
    pub dark_circles: u8,
    /// Mean central-difference gradient magnitude, scaled by 0.2
    pub wrinkles: u8,
}

impl RegionScores {
    /// Score a buffer. Grids narrower or shorter than 3 pixels score zero.
    pub fn of(buffer: &PixelBuffer) -> Self {
        let (w, h) = (buffer.width(), buffer.height());
        if w < 3 || h < 3 {
            return Self::default();
        }

        let lum = |x: usize, y: usize| {
            let [r, g, b, _] = buffer.pixel(y * w + x);
            luminance(r, g, b)
        };

        let mut dark_sum = 0.0;
        let mut grad_sum = 0.0;
        let mut total = 0usize;

        for y in 1..h - 1 {
            for x in 1..w - 1 {
                total += 1;

                let l = lum(x, y);
                if l < DARK_LUMINANCE {
                    dark_sum += DARK_LUMINANCE - l;
                }

                let gx = lum(x + 1, y) - lum(x - 1, y);
                let gy = lum(x, y + 1) - lum(x, y - 1);
                grad_sum += (gx * gx + gy * gy).sqrt();
            }
        }

        let total = total as f64;
        Self {
            dark_circles: percent(dark_sum / total * 0.8),
            wrinkles: percent(grad_sum / total * 0.2),
        }
    }
}

#[inline]
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_flat_image_scores_zero() {
        let buffer = PixelBuffer::uniform(10, 10, [200, 200, 200, 255]).unwrap();
        assert_eq!(RegionScores::of(&buffer), RegionScores::default());
    }

    #[test]
    fn test_black_flat_image_is_dark_but_smooth() {
        let buffer = PixelBuffer::uniform(10, 10, [0, 0, 0, 255]).unwrap();
        let scores = RegionScores::of(&buffer);
        // 90 * 0.8 = 72
        assert_eq!(scores.dark_circles, 72);
        assert_eq!(scores.wrinkles, 0);
    }

    #[test]
    fn test_one_pixel_stripes_cancel_out() {
        // Central differences skip the centre row, so alternating 1-px rows
        // compare equal neighbours and show no gradient.
        let (w, h) = (6, 6);
        let mut data = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            let v = if y % 2 == 0 { 0 } else { 255 };
            for _ in 0..w {
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let buffer = PixelBuffer::new(w, h, data).unwrap();
        assert_eq!(RegionScores::of(&buffer).wrinkles, 0);
    }

    #[test]
    fn test_vertical_ramp_gradient() {
        // Rows step by 10 luminance units: gy = 20 everywhere inside.
        let (w, h) = (5, 5);
        let mut data = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            let v = 100 + 10 * y as u8;
            for _ in 0..w {
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let buffer = PixelBuffer::new(w, h, data).unwrap();
        // 20 * 0.2 = 4
        assert_eq!(RegionScores::of(&buffer).wrinkles, 4);
    }

    #[test]
    fn test_tiny_grid_scores_zero() {
        let buffer = PixelBuffer::uniform(2, 8, [0, 0, 0, 255]).unwrap();
        assert_eq!(RegionScores::of(&buffer), RegionScores::default());
        let row = PixelBuffer::from_rgba(vec![0; 400]).unwrap();
        assert_eq!(RegionScores::of(&row), RegionScores::default());
    }
}
