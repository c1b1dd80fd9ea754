//! Error taxonomy for sampling, transforming, logging and rendering a run

use std::fmt;
use std::path::PathBuf;

/// Main error type for all run operations
#[derive(Debug)]
pub enum MementoError {
    /// Probability source could not be reached, timed out, or broke its contract
    SourceUnavailable {
        /// Description of what went wrong with the sampler
        reason: String,
    },

    /// Mode name does not match any known transform
    InvalidMode {
        /// The rejected mode name
        value: String,
    },

    /// Probability outside the closed unit interval (or NaN)
    InvalidProbability {
        /// The rejected probability
        value: f64,
    },

    /// Image does not meet the transform's shape requirements
    ///
    /// Raised for:
    /// - Zero height or width
    /// - A channel count other than 3
    /// - Widths below 2 in entanglement mode
    InvalidImage {
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Run parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Appending to the research log failed
    LogWriteFailed {
        /// Path of the log file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A line read back from the research log is malformed
    InvalidLogRecord {
        /// One-based line number within the log file
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// A resource required for certificate rendering could not be used
    RenderUnavailable {
        /// Path of the unusable resource
        resource: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
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

impl fmt::Display for MementoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { reason } => {
                write!(f, "Probability source unavailable: {reason}")
            }
            Self::InvalidMode { value } => {
                write!(
                    f,
                    "Unknown mode '{value}' (expected collapse, tunneling or entanglement)"
                )
            }
            Self::InvalidProbability { value } => {
                write!(f, "Probability {value} is outside [0, 1]")
            }
            Self::InvalidImage { reason } => {
                write!(f, "Invalid image: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LogWriteFailed { path, source } => {
                write!(
                    f,
                    "Failed to append run record to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidLogRecord { line, reason } => {
                write!(f, "Malformed log record on line {line}: {reason}")
            }
            Self::RenderUnavailable { resource, source } => {
                write!(
                    f,
                    "Certificate rendering unavailable, cannot use '{}': {source}",
                    resource.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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

impl std::error::Error for MementoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::ImageExport { source, .. }
            | Self::RenderUnavailable { source, .. } => Some(source),
            Self::LogWriteFailed { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for run results
pub type Result<T> = std::result::Result<T, MementoError>;

impl MementoError {
    /// Whether the error aborts the run, as opposed to only losing an auxiliary artifact
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::LogWriteFailed { .. } | Self::RenderUnavailable { .. }
        )
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MementoError {
    MementoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a source unavailable error
pub fn source_unavailable(reason: &impl ToString) -> MementoError {
    MementoError::SourceUnavailable {
        reason: reason.to_string(),
    }
}

/// Create an invalid image error
pub fn invalid_image(reason: &impl ToString) -> MementoError {
    MementoError::InvalidImage {
        reason: reason.to_string(),
    }
}
