//! Auth call failure taxonomy and server error-message extraction.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to one user-visible message rendered inline near
//! the triggering form. Nothing here panics or propagates an unhandled
//! rejection; the worst case is a generic fallback string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an auth operation failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Client-side validation rejected the input before any request.
    #[error("{0}")]
    Validation(String),
    /// HTTP 403 — correct credentials, wrong portal. The server's detail
    /// message is surfaced unmodified.
    #[error("{0}")]
    AccessDenied(String),
    /// Any other non-2xx response, with the server-supplied reason when
    /// one exists.
    #[error("{0}")]
    Rejected(String),
    /// The response body was not parseable as the expected JSON.
    #[error("{0}")]
    Malformed(String),
    /// No response was obtained at all.
    #[error("{0}")]
    Transport(String),
}

impl AuthError {
    /// The message shown in the form's error banner.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::AccessDenied(m)
            | Self::Rejected(m)
            | Self::Malformed(m)
            | Self::Transport(m) => m,
        }
    }
}

/// Extract a human-readable message from a backend error body.
///
/// The backend reports errors as `{"detail": ...}` where `detail` is
/// usually a string, but request-validation failures carry a list of
/// field errors (`[{"msg": ..., "loc": ...}, ...]`) — surface the first
/// entry's `msg`. Any other shape is stringified wholesale so the user
/// always sees something.
pub fn extract_detail(body: &serde_json::Value) -> Option<String> {
    let detail = body.get("detail")?;
    match detail {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(entries) => {
            let first = entries.first()?;
            match first.get("msg").and_then(serde_json::Value::as_str) {
                Some(msg) => Some(msg.to_owned()),
                None => Some(first.to_string()),
            }
        }
        other => Some(other.to_string()),
    }
}
