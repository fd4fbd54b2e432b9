//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while decoding a snapshot into a profile document
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to read input: {0}")]
    InputUnavailable(#[from] std::io::Error),

    #[error("bytes do not decode as '{kind}' data: {source}. Check that --type matches the snapshot.")]
    SchemaMismatch {
        kind: String,
        source: prost::DecodeError,
    },
}

/// Errors raised when a decoded call tree turns out not to be a tree
#[derive(Error, Debug)]
pub enum StructuralError {
    #[error("call tree in thread '{thread}' exceeds the depth limit of {limit}; snapshot is malformed")]
    DepthExceeded { thread: String, limit: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
