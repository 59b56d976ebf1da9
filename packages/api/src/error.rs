//! Error types for API calls and session operations.

/// Errors from the HTTP resource client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, timeout, or an
    /// unreadable response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` is the server's
    /// `message` field when the body carried one, else a per-endpoint
    /// fallback string.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// The message a user should see for this failure.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(err) => err.to_string(),
            ApiError::Api { message, .. } => message.clone(),
        }
    }
}

/// Errors from [`SessionManager`](crate::SessionManager) operations, tagged
/// by the operation that failed. The payload is the display message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// `/auth/register` failed.
    #[error("{0}")]
    Registration(String),

    /// `/auth/login` failed.
    #[error("{0}")]
    Login(String),

    /// `/auth/logout` failed. The local session is left untouched: the
    /// client keeps trusting the server-side session it could not end.
    #[error("{0}")]
    Logout(String),

    /// `/auth/refresh-token` failed. The user is not logged out; callers
    /// decide how to react (e.g. force a re-login).
    #[error("{0}")]
    Refresh(String),
}

impl AuthError {
    /// The display message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            AuthError::Registration(m)
            | AuthError::Login(m)
            | AuthError::Logout(m)
            | AuthError::Refresh(m) => m,
        }
    }
}
