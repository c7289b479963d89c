//! Collapse and propagation over the output grid

/// Bitset over candidate tile ids
pub mod candidates;
/// Generation engine and its two modes
pub mod engine;
/// Synchronous per-collapse observation
pub mod observer;
/// Per-cell possibility computation
pub mod possibility;

pub use engine::{Engine, Mode};
