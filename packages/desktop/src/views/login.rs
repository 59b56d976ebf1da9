//! Login page with an email/password form.

use api::Credentials;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_auth, use_session_manager};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let manager = use_session_manager();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the list
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let manager = manager.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            let result = manager
                .login(&Credentials {
                    email: e,
                    password: p,
                })
                .await;
            auth.set(manager.session());
            // The view can stay mounted if navigation is interrupted, so
            // re-enable the form on both outcomes.
            loading.set(false);
            match result {
                Ok(_) => {
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    error.set(Some(err.message().to_string()));
                }
            }
        });
    };

    rsx! {
        main {
            class: "container auth-page",
            h1 { class: "auth-title", "Launchpad" }
            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "alert alert-danger", "{err}" }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    required: true,
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    required: true,
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
