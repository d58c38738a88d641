//! Error taxonomy for backend calls.

/// Anything that can go wrong talking to the backend.
///
/// Variants carry detail for the console log only; user-facing messages are
/// generic and chosen by the interaction that triggered the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// A mutation was attempted without a signed-in user.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Browser-only call reached from a native build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl BackendError {
    /// Build a status error from a raw response body, preferring the
    /// backend's own message fields when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: super::rest::error_message_from_body(body) }
    }
}
