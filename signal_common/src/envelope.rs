//! Uniform success/error envelope returned by every handler.
//!
//! On the wire the envelope is a JSON object tagged by `status`:
//!
//! ```json
//! { "status": "success", "data": { ... }, "message": "optional" }
//! { "status": "error", "message": "HTTP 错误: 404", "statusCode": 404 }
//! ```
//!
//! Builders never validate their inputs. Turning a failure into an error envelope,
//! including the choice of status code, is the caller's job.

use serde::{Deserialize, Serialize};

/// Result of a handler: exactly one of success or error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    /// Handler produced a payload.
    Success {
        /// Payload returned to the caller.
        data: T,
        /// Optional human-readable note; omitted from JSON when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Handler failed.
    Error {
        /// Human-readable failure description.
        message: String,
        /// HTTP-style status code chosen by the caller.
        #[serde(rename = "statusCode")]
        status_code: u16,
    },
}

/// Wraps `data` in a success envelope.
pub fn success<T>(data: T, message: Option<String>) -> Envelope<T> {
    Envelope::Success { data, message }
}

/// Builds an error envelope; usable as the result of any handler regardless of `T`.
pub fn error<T>(message: impl Into<String>, status_code: u16) -> Envelope<T> {
    Envelope::Error {
        message: message.into(),
        status_code,
    }
}

impl<T> Envelope<T> {
    /// `true` for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    /// Status code of an error envelope, `None` on success.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Error { status_code, .. } => Some(*status_code),
        }
    }

    /// Converts into a `Result`, keeping the error's message and status code.
    pub fn into_result(self) -> Result<T, (String, u16)> {
        match self {
            Envelope::Success { data, .. } => Ok(data),
            Envelope::Error {
                message,
                status_code,
            } => Err((message, status_code)),
        }
    }

    /// Encode the envelope to JSON bytes.
    pub fn to_json_bytes(&self) -> crate::Result<Vec<u8>>
    where
        T: Serialize,
    {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}
