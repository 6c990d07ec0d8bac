// Chunk: docs/chunks/cursor_engine - Cursor and selection engine

//! Error types for the cursor engine.
//!
//! Only invariant violations and malformed external input surface as errors;
//! out-of-range positions are clamped and missing language capabilities fall
//! back to a no-op.

use lite_edit_buffer::EditError;
use thiserror::Error;

/// Errors raised while dispatching or executing a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A command produced an invalid edit batch. This is a bug in the command.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// The handler id is not in the catalogue.
    #[error("unknown handler id: {0}")]
    UnknownHandler(String),

    /// The payload does not match the handler's shape.
    #[error("invalid payload for handler {id}: {source}")]
    InvalidPayload {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while parsing an [`EditorConfig`](crate::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid editor configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while decoding or restoring a cursor snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid cursor snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// A snapshot must contain at least the primary cursor.
    #[error("cursor snapshot contains no cursors")]
    NoCursors,
}
