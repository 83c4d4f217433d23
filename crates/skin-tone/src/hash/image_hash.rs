//! Coarse 64-cell luminance hash for near-duplicate detection.
//!
//! The hash walks the pixels in row-major order and averages them in
//! contiguous runs of `pixel_count / 64` pixels. Runs are linear, not 2D
//! tiles: for typical camera frames each cell covers a horizontal band a few
//! rows tall. Pixels past the last full run are ignored.

use crate::buffer::PixelBuffer;

/// Number of cells in an [`ImageHash`].
pub const HASH_CELLS: usize = 64;

/// Default per-cell tolerance for [`ImageHash::similarity`].
pub const DEFAULT_TOLERANCE: u8 = 10;

/// A fixed-length sequence of block-averaged luminance values.
///
/// # Example
///
/// ```
/// use skin_tone::{ImageHash, PixelBuffer};
///
/// let a = ImageHash::of(&PixelBuffer::uniform(16, 16, [100, 100, 100, 255]).unwrap());
/// let b = ImageHash::of(&PixelBuffer::uniform(16, 16, [105, 105, 105, 255]).unwrap());
/// assert_eq!(a.similarity(&b, 10), 1.0);
/// assert_eq!(a.similarity(&b, 5), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHash([u8; HASH_CELLS]);

impl ImageHash {
    /// Wrap precomputed cells.
    #[inline]
    pub fn from_cells(cells: [u8; HASH_CELLS]) -> Self {
        Self(cells)
    }

    /// Hash a validated buffer.
    ///
    /// Buffers with fewer than 64 pixels put one pixel in each of the first
    /// cells and leave the remaining cells at zero.
    pub fn of(buffer: &PixelBuffer) -> Self {
        let count = buffer.pixel_count();
        let block = (count / HASH_CELLS).max(1);
        let mut cells = [0u8; HASH_CELLS];

        for (i, cell) in cells.iter_mut().enumerate() {
            let start = i * block;
            if start >= count {
                break;
            }
            let end = (start + block).min(count);

            let mut sum = 0.0f64;
            for p in start..end {
                let [r, g, b, _] = buffer.pixel(p);
                sum += (r as f64 + g as f64 + b as f64) / 3.0;
            }
            *cell = (sum / (end - start) as f64).floor() as u8;
        }

        Self(cells)
    }

    #[inline]
    pub fn cells(&self) -> &[u8; HASH_CELLS] {
        &self.0
    }

    /// Fraction of cell pairs whose absolute difference is below `tolerance`.
    ///
    /// The comparison is strict: with the default tolerance of 10, a
    /// difference of 9 counts as similar and 10 does not.
    pub fn similarity(&self, other: &ImageHash, tolerance: u8) -> f64 {
        let similar = self
            .0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a.abs_diff(**b) < tolerance)
            .count();
        similar as f64 / HASH_CELLS as f64
    }
}
