//! Error type for malformed pixel input
//!
//! This is the only failure the core knows about: everything downstream of a
//! validated [`PixelBuffer`](super::PixelBuffer) is total.

use std::fmt;

/// Error returned when a pixel buffer cannot be used for analysis.
///
/// No partial computation is attempted when this is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// No pixel data, or a zero width/height
    Empty,
    /// Byte length is not a multiple of 4 (RGBA)
    Misaligned {
        /// Length of the rejected buffer in bytes
        len: usize,
    },
    /// Byte length does not match the declared dimensions
    DimensionMismatch {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
        /// Actual length in bytes
        len: usize,
    },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::Empty => write!(f, "pixel buffer is empty"),
            InvalidInput::Misaligned { len } => {
                write!(
                    f,
                    "pixel buffer length {} is not a multiple of 4 (RGBA)",
                    len
                )
            }
            InvalidInput::DimensionMismatch { width, height, len } => {
                write!(
                    f,
                    "pixel buffer length {} does not match {}x{} RGBA ({} bytes)",
                    len,
                    width,
                    height,
                    width * height * 4
                )
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
