//! Registration page with a name/email/password form.

use api::NewUser;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_auth, use_session_manager};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let manager = use_session_manager();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the list
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let manager = manager.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            // Required-presence only; everything else is the server's call.
            if n.is_empty() {
                error.set(Some("Please enter your name".to_string()));
                return;
            }
            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter a password".to_string()));
                return;
            }

            loading.set(true);
            let result = manager
                .register(&NewUser {
                    name: n,
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
            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Sign up for Launchpad" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "alert alert-danger", "{err}" }
                }

                Input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    required: true,
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
