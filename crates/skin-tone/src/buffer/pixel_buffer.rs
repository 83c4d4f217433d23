//! Validated RGBA pixel grid.

use super::error::InvalidInput;

/// An immutable grid of RGBA samples in row-major order.
///
/// Construction validates the byte layout once so that every analysis step
/// downstream can assume a non-empty, 4-byte aligned buffer.
///
/// # Example
///
/// ```
/// use skin_tone::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
/// assert_eq!(buffer.pixel_count(), 2);
/// assert_eq!(buffer.pixel(1), [0, 0, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer with known geometry.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if the data is empty, not RGBA-aligned, or
    /// its length disagrees with `width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, InvalidInput> {
        check_layout(&data)?;
        if width == 0 || height == 0 {
            return Err(InvalidInput::Empty);
        }
        if width.checked_mul(height).and_then(|n| n.checked_mul(4)) != Some(data.len()) {
            return Err(InvalidInput::DimensionMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer from flat RGBA bytes without known geometry.
    ///
    /// The pixels are treated as a single row. Whole-image statistics and the
    /// image hash only depend on row-major order, so they are unaffected;
    /// region scores need a real grid and will report zero.
    pub fn from_rgba(data: Vec<u8>) -> Result<Self, InvalidInput> {
        check_layout(&data)?;
        Ok(Self {
            width: data.len() / 4,
            height: 1,
            data,
        })
    }

    /// Create a buffer filled with a single color.
    pub fn uniform(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, InvalidInput> {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width * height * 4)
            .collect();
        Self::new(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The `[r, g, b, a]` sample at a row-major pixel index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= pixel_count()`.
    #[inline]
    pub fn pixel(&self, index: usize) -> [u8; 4] {
        let i = index * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Iterate over `[r, g, b, a]` samples in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

fn check_layout(data: &[u8]) -> Result<(), InvalidInput> {
    if data.is_empty() {
        return Err(InvalidInput::Empty);
    }
    if data.len() % 4 != 0 {
        return Err(InvalidInput::Misaligned { len: data.len() });
    }
    Ok(())
}
