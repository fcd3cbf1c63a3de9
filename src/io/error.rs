//! Error types for tile canonicalisation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile generation operations
#[derive(Debug)]
pub enum TileError {
    /// Alphabet cannot produce the requested combinations
    InvalidAlphabet {
        /// Description of what's wrong with the alphabet
        reason: String,
    },

    /// Pattern violates the three-label contract
    ///
    /// Occurs when a pattern:
    /// - Does not have exactly three labels
    /// - Uses a label the palette has no style for
    InvalidPattern {
        /// Textual form of the offending pattern
        pattern: String,
        /// Explanation of the violation
        reason: String,
    },

    /// Render parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The raster surface could not be created or transformed
    RenderSurface {
        /// Surface operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered tile to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlphabet { reason } => {
                write!(f, "Invalid alphabet: {reason}")
            }
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern '{pattern}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RenderSurface { operation, reason } => {
                write!(f, "Render surface error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile generation results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<image::ImageError> for TileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid pattern error
pub fn invalid_pattern(pattern: &impl ToString, reason: &impl ToString) -> TileError {
    TileError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a render surface error
pub fn surface_error(operation: &'static str, reason: &impl ToString) -> TileError {
    TileError::RenderSurface {
        operation,
        reason: reason.to_string(),
    }
}
