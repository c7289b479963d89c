//! Error types for pattern loading and generation

use crate::spatial::position::Position;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum WfcError {
    /// A cell ran out of legal tiles during generation
    ///
    /// Always fatal to the current run; the engine never retries or
    /// backtracks. The grid keeps its partial assignment.
    Contradiction {
        /// Grid position whose possibility set became empty
        position: Position,
    },

    /// Failed to read a pattern file from the filesystem
    PatternRead {
        /// Path to the pattern file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse a pattern file as JSON
    PatternParse {
        /// Path to the pattern file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Pattern contents violate the input contract
    InvalidPattern {
        /// Description of what is wrong with the pattern
        reason: String,
    },
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction { position } => {
                write!(
                    f,
                    "contradiction at ({}, {}): no tile satisfies the neighbour constraints",
                    position.x, position.y
                )
            }
            Self::PatternRead { path, source } => {
                write!(f, "failed to read pattern '{}': {source}", path.display())
            }
            Self::PatternParse { path, source } => {
                write!(f, "failed to parse pattern '{}': {source}", path.display())
            }
            Self::InvalidPattern { reason } => {
                write!(f, "invalid pattern: {reason}")
            }
        }
    }
}

impl std::error::Error for WfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PatternRead { source, .. } => Some(source),
            Self::PatternParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, WfcError>;

/// Create an invalid pattern error from a reason
pub fn invalid_pattern(reason: impl Into<String>) -> WfcError {
    WfcError::InvalidPattern {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contradiction_display_names_the_position() {
        let error = WfcError::Contradiction {
            position: Position::new(3, 7),
        };
        assert_eq!(
            error.to_string(),
            "contradiction at (3, 7): no tile satisfies the neighbour constraints"
        );
    }
}
