//! Color profiling: reduce a pixel buffer to four scalar averages.

mod color_profile;

pub use color_profile::ColorProfile;
