//! Pattern file loading and validation
//!
//! A pattern file is a JSON document carrying the tile labels, the example
//! grid the sockets are inferred from, and the desired output dimensions.
//! All input validation lives here; the engine assumes a valid tileset.

use crate::io::configuration::{ANSI_PREFIX, ANSI_RESET};
use crate::io::error::{Result, WfcError, invalid_pattern};
use crate::spatial::tiles::{Tileset, TilesetBuilder};
use ndarray::Array2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk pattern file shape
#[derive(Debug, Deserialize)]
pub struct PatternFile {
    /// Display label per tile; index + 1 is the tile id
    pub tiles: Vec<String>,
    /// Example grid of 1-based tile ids the sockets are inferred from
    pub input_tiles: Vec<Vec<u32>>,
    /// Output grid width
    pub width: usize,
    /// Output grid height
    pub height: usize,
    /// Wrap labels in ANSI escape sequences when printing
    #[serde(default)]
    pub format: bool,
}

/// A validated pattern: built tileset, display labels, output dimensions
#[derive(Debug)]
pub struct Pattern {
    /// Tileset with sockets inferred from the example grid
    pub tileset: Tileset,
    /// Ready-to-print label per tile id, ANSI wrapping already applied
    pub labels: Vec<String>,
    /// Output grid width from the file
    pub width: usize,
    /// Output grid height from the file
    pub height: usize,
}

impl Pattern {
    /// Load and validate a pattern from a JSON file
    ///
    /// # Errors
    ///
    /// [`WfcError::PatternRead`] and [`WfcError::PatternParse`] for
    /// filesystem and JSON failures, [`WfcError::InvalidPattern`] when the
    /// contents violate the input contract.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| WfcError::PatternRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file = serde_json::from_str(&text).map_err(|source| WfcError::PatternParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_file(file)
    }

    /// Validate parsed contents and build the tileset
    ///
    /// # Errors
    ///
    /// [`WfcError::InvalidPattern`] when the file declares no tiles, a
    /// degenerate output size, or an empty, ragged, or out-of-range example
    /// grid.
    pub fn from_file(file: PatternFile) -> Result<Self> {
        if file.tiles.is_empty() {
            return Err(invalid_pattern("pattern declares no tiles"));
        }
        if file.width == 0 || file.height == 0 {
            return Err(invalid_pattern("output dimensions must be at least 1x1"));
        }

        let rows = file.input_tiles.len();
        let cols = file.input_tiles.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(invalid_pattern("example grid is empty"));
        }
        if file.input_tiles.iter().any(|row| row.len() != cols) {
            return Err(invalid_pattern("example grid is not rectangular"));
        }

        let flat: Vec<u32> = file.input_tiles.iter().flatten().copied().collect();
        let example = Array2::from_shape_vec((rows, cols), flat).map_err(|source| {
            invalid_pattern(format!("example grid has an inconsistent shape: {source}"))
        })?;
        let tileset = TilesetBuilder::new(file.tiles.len()).infer(&example)?;

        let labels = file
            .tiles
            .iter()
            .map(|label| {
                if file.format {
                    format!("{ANSI_PREFIX}{label}{ANSI_RESET}")
                } else {
                    label.clone()
                }
            })
            .collect();

        Ok(Self {
            tileset,
            labels,
            width: file.width,
            height: file.height,
        })
    }
}
