//! Input/output operations, configuration and error handling

/// Command-line front end that drives a run
pub mod cli;
/// Run constants and defaults
pub mod configuration;
/// Error taxonomy
pub mod error;
/// Image file conversion
pub mod image;
/// Append-only research log
pub mod logger;
/// Progress display for the command line
pub mod progress;
