//! Details page for one startup, with edit and delete actions.

use api::Startup;
use dioxus::prelude::*;
use ui::components::{Alert, Button, ButtonVariant, Spinner};
use ui::{use_api, use_fetch, UseFetch};

use crate::Route;

#[component]
pub fn Details(id: String) -> Element {
    let client = use_api();
    let nav = use_navigator();

    // Track the route param in a signal so the fetch re-runs when the user
    // navigates between detail pages.
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let startup: UseFetch<Startup> = use_fetch(move || format!("/startups/{}", id_signal()));
    let mut confirming = use_signal(|| false);

    let delete_id = id.clone();
    let handle_delete = move |_| {
        let client = client.clone();
        let id = delete_id.clone();
        spawn(async move {
            // Delete failures are silently ignored, matching the list view.
            if client.delete_startup(&id).await.is_ok() {
                nav.push(Route::Home {});
            }
        });
    };

    rsx! {
        main {
            class: "container",
            if startup.loading() {
                Spinner {}
            }
            if let Some(err) = startup.error() {
                Alert { "{err}" }
            }
            if let Some(startup) = startup.data() {
                div {
                    class: "card",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "{startup.name}" }
                        p { class: "muted", "Founded by {startup.founder}" }
                        p { class: "muted",
                            "Added on "
                            {startup.created_at.format("%b %e, %Y").to_string()}
                        }
                        p { "{startup.description}" }
                        div {
                            class: "card-actions",
                            Link { class: "btn btn-secondary", to: Route::Home {}, "Back" }
                            Link {
                                class: "btn btn-primary",
                                to: Route::Edit { id: startup.id.clone() },
                                "Edit"
                            }
                            if confirming() {
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: handle_delete,
                                    "Confirm delete"
                                }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| confirming.set(false),
                                    "Keep it"
                                }
                            } else {
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: move |_| confirming.set(true),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
