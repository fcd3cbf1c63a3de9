//! Input/output operations, configuration and error handling

/// Command-line interface and tile set driver
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types for every tile operation
pub mod error;
/// PNG export of rendered tiles
pub mod image;
/// Progress display while rendering
pub mod progress;
