//! # API crate — HTTP client and session management for Launchpad
//!
//! This crate is everything the Launchpad frontends need to talk to the
//! startups API. It has no UI dependency, so the whole auth/session core can
//! be exercised headlessly in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — cookie-bearing `reqwest` wrapper with JSON helpers |
//! | [`config`] | API base URL from the `LAUNCHPAD_API_URL` environment variable |
//! | [`error`] | [`ApiError`] (transport / non-2xx) and [`AuthError`] (per auth operation) |
//! | [`models`] | [`Session`], [`UserInfo`], [`Startup`] and request payload types |
//! | [`session`] | [`SessionManager`] — the single source of truth for "who is logged in" |
//! | [`startups`] | CRUD calls for the `/startups` resource |
//!
//! All requests ride one shared [`ApiClient`] whose cookie store carries the
//! session; the server identifies the user from those cookies on every call.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod startups;

pub use client::ApiClient;
pub use error::{ApiError, AuthError};
pub use models::{
    AuthResponse, Credentials, NewUser, Session, Startup, StartupPayload, UserInfo,
};
pub use session::SessionManager;
