//! Public API for the skin-tone crate.
//!
//! This module provides the high-level entry points: the [`SkinScanner`]
//! session and the [`analyze`] pipeline with its [`ScanResult`] record.

mod result;
mod scanner;

pub use result::{analyze, ScanOutcome, ScanResult};
pub use scanner::SkinScanner;
