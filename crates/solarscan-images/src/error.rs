//! Error types for image operations.

use thiserror::Error;

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors that can occur while loading a rooftop image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Image format is not supported.
    #[error("Format not supported: {format}. Supported formats: {supported}")]
    FormatNotSupported {
        /// Extension or detected format that was rejected
        format: String,
        /// Formats that would have been accepted
        supported: String,
    },

    /// Image file exceeds the configured maximum size.
    #[error("File too large: {size_mb:.1} MB exceeds maximum of {max_mb} MB")]
    FileTooLarge {
        /// Actual size in MB
        size_mb: f64,
        /// Configured limit in MB
        max_mb: u64,
    },

    /// File is not a valid image.
    #[error("Invalid image file: {0}")]
    InvalidFile(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
