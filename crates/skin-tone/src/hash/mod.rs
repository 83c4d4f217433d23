//! Perceptual image hash used by the scan cache.

mod image_hash;

pub use image_hash::{ImageHash, DEFAULT_TOLERANCE, HASH_CELLS};
