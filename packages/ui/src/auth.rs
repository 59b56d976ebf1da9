//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the app's [`SessionManager`] and publishes three
//! context values: the shared [`ApiClient`], the manager itself, and a
//! [`Signal<Session>`] snapshot the views render from. The snapshot is
//! refreshed from the manager after every auth operation; the manager stays
//! the single source of truth.

use api::{ApiClient, Session, SessionManager};
use dioxus::prelude::*;

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the session manager for running auth operations.
pub fn use_session_manager() -> SessionManager {
    use_context::<SessionManager>()
}

/// Get the shared cookie-bearing API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(ApiClient::default);
    let manager = use_context_provider(|| SessionManager::new(client.clone()));
    let mut auth_state = use_context_provider(|| Signal::new(manager.session()));

    // Best-effort restore of an existing server session on mount. Failures
    // are swallowed by the manager; all we do here is publish the result.
    let restore_manager = manager.clone();
    let _ = use_resource(move || {
        let manager = restore_manager.clone();
        async move {
            manager.restore().await;
            auth_state.set(manager.session());
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// On success the session snapshot is cleared and `on_logged_out` fires so
/// the caller can navigate away. On failure the local user is deliberately
/// kept (the server still considers the session active) and only the error
/// lands in the snapshot.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let manager = use_session_manager();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let manager = manager.clone();
        async move {
            let result = manager.logout().await;
            auth_state.set(manager.session());
            match result {
                Ok(()) => on_logged_out.call(()),
                Err(err) => tracing::error!("Failed to log out: {err}"),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
