//! Spatial data structures
//!
//! This module contains the value types the engine operates on:
//! - Integer grid coordinates
//! - The mutable output grid with boundary-tolerant accessors
//! - The tile catalogue and socket inference from example patterns

/// Output grid state and cell accessors
pub mod grid;
/// Integer 2-D coordinates
pub mod position;
/// Tile catalogue and socket inference
pub mod tiles;

pub use grid::Grid;
pub use position::Position;
pub use tiles::{Direction, Tile, Tileset, TilesetBuilder};
