//! Input/output: configuration, errors, exports and the command line

/// Command-line parsing and batch export
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Plain-text export
pub mod text;
