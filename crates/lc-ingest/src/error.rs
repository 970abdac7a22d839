//! Capture ingest error types.

use thiserror::Error;

/// Errors that can occur while reading capture files.
///
/// Data-shape problems never appear here — malformed lines are dropped by
/// the decoders, not surfaced as errors.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("capture not found: {0}")]
    NotFound(String),
}

/// Convenience alias for ingest results.
pub type LogResult<T> = Result<T, LogError>;
