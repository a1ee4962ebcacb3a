//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `SignalError`, so functions can simply return `Result<T>`.
use crate::error::SignalError;

/// Workspace-wide `Result` alias with `SignalError` as the default error.
pub type Result<T, E = SignalError> = std::result::Result<T, E>;
