//! Error types shared between the server and the client.
//!
//! The `SignalError` enum unifies I/O, serialization, channel and alias-file
//! failures so that every crate in the workspace can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by server and client.
#[derive(Error, Debug)]
pub enum SignalError {
    /// I/O error originating from sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Malformed line in an alias file.
    #[error("Alias file error at line {line}: {reason}")]
    AliasFile {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Request body exceeded the accepted size.
    #[error("Request too large: more than {0} bytes")]
    RequestTooLarge(u64),

    /// Channel send failed (receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}
