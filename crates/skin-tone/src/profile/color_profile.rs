//! Whole-image channel averages.

use crate::buffer::{InvalidInput, PixelBuffer};

/// Average brightness and channel values of an image, each in `0.0..=255.0`.
///
/// Per-pixel brightness is the plain mean `(r + g + b) / 3`. Alpha is ignored.
/// The profile is derived and ephemeral: recompute it for every image.
///
/// # Example
///
/// ```
/// use skin_tone::{ColorProfile, PixelBuffer};
///
/// let buffer = PixelBuffer::uniform(4, 4, [200, 150, 100, 255]).unwrap();
/// let profile = ColorProfile::of(&buffer);
/// assert_eq!(profile.average_red, 200.0);
/// assert_eq!(profile.average_brightness, 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorProfile {
    pub average_brightness: f64,
    pub average_red: f64,
    pub average_green: f64,
    pub average_blue: f64,
}

impl ColorProfile {
    /// Build a profile from explicit averages.
    #[inline]
    pub fn new(brightness: f64, red: f64, green: f64, blue: f64) -> Self {
        Self {
            average_brightness: brightness,
            average_red: red,
            average_green: green,
            average_blue: blue,
        }
    }

    /// Profile a validated buffer.
    pub fn of(buffer: &PixelBuffer) -> Self {
        // Integer sums are exact; a u64 holds 255 * 3 per pixel for any
        // buffer that fits in memory.
        let (mut red, mut green, mut blue) = (0u64, 0u64, 0u64);
        for [r, g, b, _] in buffer.pixels() {
            red += r as u64;
            green += g as u64;
            blue += b as u64;
        }

        let count = buffer.pixel_count() as f64;
        Self {
            average_brightness: (red + green + blue) as f64 / 3.0 / count,
            average_red: red as f64 / count,
            average_green: green as f64 / count,
            average_blue: blue as f64 / count,
        }
    }

    /// Validate raw RGBA bytes and profile them.
    pub fn from_rgba(data: &[u8]) -> Result<Self, InvalidInput> {
        let buffer = PixelBuffer::from_rgba(data.to_vec())?;
        Ok(Self::of(&buffer))
    }

    /// Melanin proxy: `1 - brightness / 255`.
    ///
    /// 0.0 for pure white, 1.0 for pure black.
    #[inline]
    pub fn melanin_proxy(&self) -> f64 {
        1.0 - self.average_brightness / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_profile_is_exact() {
        let buffer = PixelBuffer::uniform(7, 3, [13, 77, 201, 0]).unwrap();
        let profile = ColorProfile::of(&buffer);
        assert_eq!(profile.average_red, 13.0);
        assert_eq!(profile.average_green, 77.0);
        assert_eq!(profile.average_blue, 201.0);
        assert_eq!(profile.average_brightness, 97.0);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = ColorProfile::of(&PixelBuffer::uniform(2, 2, [50, 60, 70, 255]).unwrap());
        let clear = ColorProfile::of(&PixelBuffer::uniform(2, 2, [50, 60, 70, 0]).unwrap());
        assert_eq!(opaque, clear);
    }

    #[test]
    fn test_mixed_pixels_average() {
        let buffer = PixelBuffer::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
        let profile = ColorProfile::of(&buffer);
        assert_eq!(profile.average_red, 127.5);
        assert_eq!(profile.average_brightness, 127.5);
    }

    #[test]
    fn test_from_rgba_rejects_bad_input() {
        assert_eq!(ColorProfile::from_rgba(&[]), Err(InvalidInput::Empty));
        assert_eq!(
            ColorProfile::from_rgba(&[1, 2, 3, 4, 5, 6]),
            Err(InvalidInput::Misaligned { len: 6 })
        );
    }

    #[test]
    fn test_melanin_proxy_extremes() {
        assert_eq!(ColorProfile::new(255.0, 255.0, 255.0, 255.0).melanin_proxy(), 0.0);
        assert_eq!(ColorProfile::new(0.0, 0.0, 0.0, 0.0).melanin_proxy(), 1.0);
    }
}
