//! Error taxonomy for auth and backend calls.
//!
//! ERROR HANDLING
//! ==============
//! `Display` is the text shown inline in forms. Transport and decode details
//! are carried for logging only; users see a generic network message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Local signup validation failures, raised before any request is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Failure of a backend operation, or of its local preconditions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally; no request was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Non-2xx response. `message` is the server's `error` text or a
    /// per-operation fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// 401 on an authenticated request; the stored token is no longer valid.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    /// The request could not complete.
    #[error("Network error. Please check your connection.")]
    Network(String),
    /// A success response whose body did not match the expected shape.
    #[error("Network error. Please check your connection.")]
    Decode(String),
    /// Called outside the browser (server-side render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether this error means the local session must end.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
