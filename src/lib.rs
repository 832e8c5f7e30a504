//! Library catalog application
//!
//! Wires the catalog modules into the kernel registry and serves them over HTTP.

pub mod app;
pub mod modules;

/// Re-export commonly used types
pub use modules::*;
