//! Error types for linetap.

use thiserror::Error;

/// Main error type for all tap operations.
#[derive(Debug, Error)]
pub enum TapError {
    /// I/O error on the capture file or a byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] tokio_serial::Error),

    /// The capture sink's writer task has terminated; no further
    /// records can be appended.
    #[error("capture sink closed")]
    SinkClosed,

    /// A background task (pump or sink) failed to join.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type alias using TapError.
pub type Result<T> = std::result::Result<T, TapError>;
