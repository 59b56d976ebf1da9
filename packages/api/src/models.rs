//! # Data models shared between the API client and the frontends
//!
//! Two kinds of types live here:
//!
//! - **Session state**: [`Session`] and the opaque [`UserInfo`] it holds.
//!   The server owns the user's shape; the client only relies on an `id` and
//!   passes everything else through untouched.
//! - **Startup records**: [`Startup`] as returned by the server (MongoDB
//!   style `_id` / `createdAt` field names) and the [`StartupPayload`] sent
//!   on create/update. Startup copies are transient — fetched for display or
//!   editing and discarded, never cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-side session state: who is logged in, if anyone.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The authenticated user, absent until a successful login, register or
    /// restore, and absent again after a successful logout.
    pub user: Option<UserInfo>,
    /// True only while the initial restore-on-load check is in flight.
    pub loading: bool,
    /// Last auth error message, for display. Cleared at the start of
    /// register/login (and only those, see [`SessionManager`]).
    ///
    /// [`SessionManager`]: crate::SessionManager
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl Session {
    /// Whether a user is currently logged in. Always equals
    /// `self.user.is_some()`.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// User record as returned by the server. Opaque beyond the identifier: the
/// client never interprets the remaining fields, it only carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserInfo {
    /// Best-effort display name: the server's `name` or `email` field when
    /// present, else the id.
    pub fn display_name(&self) -> &str {
        self.extra
            .get("name")
            .or_else(|| self.extra.get("email"))
            .and_then(|v| v.as_str())
            .unwrap_or(&self.id)
    }
}

/// Login payload. Write-only: held for the in-flight request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Full response body of a successful login or register. The `user` field
/// becomes the session user; the rest is passed through to the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: UserInfo,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A startup record owned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub founder: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Create/update body for a startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartupPayload {
    pub name: String,
    pub description: String,
    pub founder: String,
}
