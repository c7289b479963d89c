//! Input/output operations
//!
//! Everything around the engine: pattern file loading, terminal rendering
//! and animation, progress reporting, and the command-line interface.

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime constants and defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// Pattern file loading and validation
pub mod loader;
/// Collapse progress reporting for non-animated runs
pub mod progress;
/// Terminal rendering and per-step animation
pub mod render;
