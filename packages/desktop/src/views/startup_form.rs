//! Shared create/edit form for a startup.
//!
//! `/post` renders it empty; `/edit/:id` pre-fills it from the server. On
//! success both modes navigate to the record's details page.

use api::{ApiError, StartupPayload};
use dioxus::prelude::*;
use ui::components::{Alert, Button, ButtonVariant, Input, Spinner, TextArea};
use ui::use_api;

use crate::Route;

#[component]
pub fn Post() -> Element {
    rsx! {
        StartupForm {}
    }
}

#[component]
pub fn Edit(id: String) -> Element {
    rsx! {
        StartupForm { id }
    }
}

#[component]
fn StartupForm(id: Option<String>) -> Element {
    let client = use_api();
    let nav = use_navigator();
    let is_edit = id.is_some();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut founder = use_signal(String::new);
    let mut api_error = use_signal(|| Option::<String>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Track the route param in a signal so the prefill re-runs on change.
    let initial = id.clone();
    let mut id_signal = use_signal(move || initial);
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    // Pre-fill the fields from the server in edit mode.
    let prefill_client = client.clone();
    let _prefill = use_resource(move || {
        let client = prefill_client.clone();
        let id = id_signal();
        async move {
            let Some(id) = id else { return };
            loading.set(true);
            match client.get_startup(&id).await {
                Ok(startup) => {
                    name.set(startup.name);
                    description.set(startup.description);
                    founder.set(startup.founder);
                    load_error.set(None);
                }
                Err(err) => load_error.set(Some(err.message())),
            }
            loading.set(false);
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let id = id_signal.peek().clone();
        spawn(async move {
            api_error.set(None);
            saving.set(true);

            let payload = StartupPayload {
                name: name.peek().clone(),
                description: description.peek().clone(),
                founder: founder.peek().clone(),
            };
            let result = match &id {
                Some(id) => client.update_startup(id, &payload).await.map(|_| id.clone()),
                None => client.create_startup(&payload).await.map(|created| created.id),
            };

            saving.set(false);
            match result {
                Ok(id) => {
                    nav.push(Route::Details { id });
                }
                Err(ApiError::Network(_)) => {
                    api_error.set(Some("Network error occurred".to_string()));
                }
                Err(err) => api_error.set(Some(err.message())),
            }
        });
    };

    let cancel_to = match &id {
        Some(id) => Route::Details { id: id.clone() },
        None => Route::Home {},
    };

    rsx! {
        main {
            class: "container",
            if is_edit && loading() {
                Spinner {}
            } else {
                div {
                    class: "card",
                    div {
                        class: "card-body",
                        h2 {
                            class: "card-title",
                            if is_edit { "Edit Startup" } else { "Add New Startup" }
                        }

                        if let Some(err) = load_error().or(api_error()) {
                            Alert { "{err}" }
                        }

                        form {
                            onsubmit: handle_submit,
                            div {
                                class: "form-field",
                                label { class: "form-label", "Startup Name" }
                                Input {
                                    r#type: "text",
                                    placeholder: "e.g., SpaceX",
                                    value: name(),
                                    required: true,
                                    oninput: move |evt: FormEvent| name.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { class: "form-label", "Description" }
                                TextArea {
                                    placeholder: "e.g., Aerospace manufacturer and space transportation services company...",
                                    value: description(),
                                    rows: 8,
                                    required: true,
                                    oninput: move |evt: FormEvent| description.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { class: "form-label", "Founder" }
                                Input {
                                    r#type: "text",
                                    placeholder: "e.g., Elon Musk",
                                    value: founder(),
                                    required: true,
                                    oninput: move |evt: FormEvent| founder.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-actions",
                                Link { class: "btn btn-secondary", to: cancel_to, "Cancel" }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    r#type: "submit",
                                    disabled: saving(),
                                    if is_edit { "Save Changes" } else { "Add" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
