//! API base URL configuration using the OnceLock pattern.

use std::sync::OnceLock;

/// Development default when `LAUNCHPAD_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

static API_URL: OnceLock<String> = OnceLock::new();

/// Get the API base URL, without a trailing slash.
///
/// Reads the `LAUNCHPAD_API_URL` environment variable (after loading `.env`
/// if present) on first use and caches the result for the process lifetime.
pub fn api_base_url() -> &'static str {
    API_URL.get_or_init(|| {
        dotenvy::dotenv().ok();

        let url = std::env::var("LAUNCHPAD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        url.trim_end_matches('/').to_string()
    })
}
