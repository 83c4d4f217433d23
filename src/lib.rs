//! Glowscan - skin tone scan service
//!
//! HTTP and CLI shell around the `skin-tone` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
