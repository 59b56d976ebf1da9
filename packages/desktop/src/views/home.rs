//! Startups list page: fetches `/startups`, renders rows with a
//! confirm-then-delete action, and refetches after a successful delete.

use api::Startup;
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Spinner};
use ui::{use_api, use_fetch, UseFetch};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let client = use_api();
    let mut startups: UseFetch<Vec<Startup>> = use_fetch(|| "/startups".to_string());
    let mut confirming = use_signal(|| Option::<String>::None);

    // EventHandler (Copy) so every row can share the same callback.
    let handle_delete = EventHandler::new(move |id: String| {
        let client = client.clone();
        spawn(async move {
            // A failed delete is silently ignored; the list simply keeps
            // the row until a delete goes through.
            if client.delete_startup(&id).await.is_ok() {
                confirming.set(None);
                startups.refetch();
            }
        });
    });

    rsx! {
        main {
            class: "container",
            div {
                class: "page-header",
                h2 { "Startups List" }
                Link { class: "btn btn-success", to: Route::Post {}, "Add New Startup" }
            }

            if startups.loading() {
                Spinner {}
            }

            if let Some(err) = startups.error() {
                Alert { "{err}" }
            }

            if let Some(list) = startups.data() {
                if list.is_empty() {
                    Alert {
                        kind: AlertKind::Info,
                        "No startups found. Add your first startup!"
                    }
                }
                div {
                    class: "startup-list",
                    for startup in list {
                        StartupRow {
                            key: "{startup.id}",
                            startup: startup.clone(),
                            confirming,
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StartupRow(
    startup: Startup,
    confirming: Signal<Option<String>>,
    on_delete: EventHandler<String>,
) -> Element {
    let confirm_id = startup.id.clone();
    let delete_id = startup.id.clone();
    let mut confirming = confirming;

    rsx! {
        div {
            class: "startup-card",
            div {
                class: "startup-card-head",
                h5 { "{startup.name} by {startup.founder}" }
                small { class: "muted", {startup.created_at.format("%b %e, %Y").to_string()} }
            }
            p { "{startup.description}" }
            div {
                class: "startup-card-actions",
                Link {
                    class: "btn btn-primary",
                    to: Route::Details { id: startup.id.clone() },
                    "View Details"
                }
                if confirming().as_deref() == Some(startup.id.as_str()) {
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        "Confirm delete"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| confirming.set(None),
                        "Cancel"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| confirming.set(Some(confirm_id.clone())),
                        "Delete"
                    }
                }
            }
        }
    }
}
