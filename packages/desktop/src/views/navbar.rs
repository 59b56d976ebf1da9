//! Top navigation bar, shared by every route.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let session = auth();

    rsx! {
        header {
            class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "Launchpad" }
            nav {
                class: "navbar-links",
                if let Some(user) = session.user.clone() {
                    span { class: "navbar-user", "{user.display_name()}" }
                    LogoutButton {
                        class: "btn btn-secondary",
                        on_logged_out: move |_| {
                            nav.replace(Route::Login {});
                        },
                    }
                }
                if session.user.is_none() && !session.loading {
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Sign in" }
                }
            }
        }
        Outlet::<Route> {}
    }
}
