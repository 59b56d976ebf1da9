//! This crate contains the shared UI building blocks for the workspace:
//! the authentication context, the data-fetch hook, and small form
//! components the page views are assembled from.

pub mod components;

mod auth;
pub use auth::{use_api, use_auth, use_session_manager, AuthProvider, LogoutButton};

mod fetch;
pub use fetch::{use_fetch, FetchState, UseFetch};
