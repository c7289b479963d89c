//! Socket-based wave function collapse for 2-D tile grids
//!
//! Adjacency rules between a small tile catalogue are inferred from an example
//! pattern, then an output grid is filled by constraint propagation, choosing
//! uniformly at random whenever more than one tile remains legal for a cell.

#![forbid(unsafe_code)]

/// Collapse engine, possibility computation, and the observation seam
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Positions, the output grid, and the tile catalogue
pub mod spatial;

pub use io::error::{Result, WfcError};
