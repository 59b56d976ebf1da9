//! # Session manager — the single source of truth for "who is logged in"
//!
//! [`SessionManager`] mediates every auth call and normalizes the outcome
//! into a [`Result`] plus a consistent [`Session`] snapshot. Callers never
//! see a panic: every failure comes back as an [`AuthError`] carrying the
//! message to display.
//!
//! ## State machine
//!
//! ```text
//! UNINITIALIZED ──restore()──→ AUTHENTICATED | ANONYMOUS
//! ANONYMOUS     ──login/register ok──→ AUTHENTICATED
//! AUTHENTICATED ──logout ok──→ ANONYMOUS
//! AUTHENTICATED ──logout failed──→ AUTHENTICATED   (unchanged)
//! refresh_token never transitions
//! ```
//!
//! ## Preserved quirks
//!
//! The original client had three behaviors that look accidental but are kept
//! on purpose, because callers may rely on them:
//!
//! - the stored `error` is cleared at the start of **register/login only**,
//!   never before logout or refresh;
//! - a **failed logout does not clear the local user** — the client keeps
//!   trusting the server-side session it could not end;
//! - **restore failures are swallowed** (logged, not surfaced): an anonymous
//!   result is a valid outcome of the startup probe, not an error.
//!
//! ## Concurrency
//!
//! The manager is cheap to clone and shares its state through a mutex that
//! is only ever held for synchronous reads/writes, never across an await.
//! Concurrent operations are not serialized: a login racing a logout
//! resolves last-writer-wins, exactly like the original.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::ApiClient;
use crate::error::{ApiError, AuthError};
use crate::models::{AuthResponse, Credentials, NewUser, Session, UserInfo};

/// Owns the client-side [`Session`] and performs all auth operations.
#[derive(Debug, Clone)]
pub struct SessionManager {
    client: ApiClient,
    state: Arc<Mutex<Session>>,
}

impl SessionManager {
    /// Create a manager over the given client, starting in the
    /// uninitialized state (`loading = true`, no user).
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(Session::default())),
        }
    }

    /// The HTTP client this manager shares with the rest of the app.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// A snapshot of the current session state.
    pub fn session(&self) -> Session {
        self.lock().clone()
    }

    /// Whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.lock().user.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.state.lock().expect("session state poisoned")
    }

    /// Best-effort startup probe: ask the server whether a session already
    /// exists (GET `/auth/user` with cookies attached).
    ///
    /// On success the user is set; on any failure — network or non-2xx — the
    /// user stays absent and the error is only logged. `loading` is cleared
    /// on every path. Returns whether a session was found.
    pub async fn restore(&self) -> bool {
        let result = self
            .client
            .get_json::<UserInfo>("/auth/user", "Authentication check failed")
            .await;

        let mut state = self.lock();
        state.loading = false;
        match result {
            Ok(user) => {
                state.user = Some(user);
                true
            }
            Err(ApiError::Api { status, .. }) => {
                tracing::debug!(status, "no existing session to restore");
                false
            }
            Err(err) => {
                tracing::warn!("error checking authentication status: {err}");
                false
            }
        }
    }

    /// Register a new user. On success the session user is set from the
    /// response and the full payload is returned.
    pub async fn register(&self, new_user: &NewUser) -> Result<AuthResponse, AuthError> {
        self.lock().error = None;

        let result = self
            .client
            .post_json::<_, AuthResponse>("/auth/register", new_user, "Registration failed")
            .await;
        self.finish_sign_in(result, AuthError::Registration)
    }

    /// Log in with email and password. Same contract as [`register`].
    ///
    /// [`register`]: SessionManager::register
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        self.lock().error = None;

        let result = self
            .client
            .post_json::<_, AuthResponse>("/auth/login", credentials, "Login failed")
            .await;
        self.finish_sign_in(result, AuthError::Login)
    }

    /// Log out. On success the local user is cleared. On failure the error
    /// is recorded but the local user is left as-is: the session stays
    /// active client-side until the server confirms it ended.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let result = self.client.post_empty("/auth/logout", "Logout failed").await;

        let mut state = self.lock();
        match result {
            Ok(()) => {
                state.user = None;
                Ok(())
            }
            Err(err) => {
                let message = err.message();
                state.error = Some(message.clone());
                Err(AuthError::Logout(message))
            }
        }
    }

    /// Refresh the session token. Mutates no session state in either
    /// direction: success changes nothing, and an expired token does not log
    /// the user out — callers must react explicitly.
    pub async fn refresh_token(&self) -> Result<(), AuthError> {
        match self
            .client
            .post_empty("/auth/refresh-token", "Token refresh failed")
            .await
        {
            Ok(()) => Ok(()),
            Err(err) => {
                let message = err.message();
                tracing::warn!("error refreshing token: {message}");
                Err(AuthError::Refresh(message))
            }
        }
    }

    /// Shared tail of register/login: record the outcome in the session.
    fn finish_sign_in(
        &self,
        result: Result<AuthResponse, ApiError>,
        wrap: fn(String) -> AuthError,
    ) -> Result<AuthResponse, AuthError> {
        let mut state = self.lock();
        match result {
            Ok(response) => {
                state.user = Some(response.user.clone());
                Ok(response)
            }
            Err(err) => {
                let message = err.message();
                state.error = Some(message.clone());
                Err(wrap(message))
            }
        }
    }
}
