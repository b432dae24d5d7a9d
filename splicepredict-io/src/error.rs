use std::io;
use thiserror::Error;

use splicepredict_core::RecordError;

/// Error type for splicepredict-io operations.
#[derive(Error, Debug)]
pub enum StreamError {
    /// IO error occurred while reading or writing a table.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A row or the header could not be normalized.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Rayon worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration file could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for splicepredict-io operations.
pub type Result<T> = std::result::Result<T, StreamError>;
