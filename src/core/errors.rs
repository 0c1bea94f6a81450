//! Core error types for the scanview crate.
//!
//! This module defines the fundamental error type used throughout the viewer core,
//! covering image I/O, folder discovery, partitioning-engine failures, and invalid
//! input. All fallible public APIs in this crate return [`ScanViewError`].

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type ScanViewResult<T> = Result<T, ScanViewError>;

/// Errors that can occur while loading, partitioning, editing, or rendering
/// scanned documents.
#[derive(Debug, Error)]
pub enum ScanViewError {
    /// Error occurred while loading or decoding an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred while encoding an image for export.
    #[error("image encode")]
    ImageEncode(#[source] image::ImageError),

    /// The document folder handed to discovery does not exist.
    #[error("folder not found: {path}")]
    FolderNotFound {
        /// The folder that was requested.
        path: PathBuf,
    },

    /// The external partitioning engine failed for a given image.
    #[error("partitioning failed for '{path}': {context}")]
    Partition {
        /// Path of the image that was being partitioned.
        path: PathBuf,
        /// Additional context about the failure.
        context: String,
        /// The underlying engine error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for ScanViewError {
    /// Converts an image::ImageError to ScanViewError::ImageLoad.
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}

impl ScanViewError {
    /// Creates an invalid-input error from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Wraps an error raised by the external partitioning engine.
    pub fn partition_error(
        path: impl Into<PathBuf>,
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Partition {
            path: path.into(),
            context: context.into(),
            source: Box::new(source),
        }
    }
}
