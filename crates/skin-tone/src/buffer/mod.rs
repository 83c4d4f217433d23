//! Pixel buffer input type and its validation error.

mod error;
mod pixel_buffer;

pub use error::InvalidInput;
pub use pixel_buffer::PixelBuffer;
