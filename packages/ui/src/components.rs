//! Small form components shared by the page views.

use dioxus::prelude::*;

/// Visual variant of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = false)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default = "".to_string())] class: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = 8)] rows: i64,
    #[props(default = false)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            class: "input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows,
            required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Indeterminate loading spinner.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div {
                class: "spinner",
                role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
        }
    }
}

/// Kind of an [`Alert`] box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AlertKind {
    #[default]
    Error,
    Info,
}

#[component]
pub fn Alert(#[props(default)] kind: AlertKind, children: Element) -> Element {
    let class = match kind {
        AlertKind::Error => "alert alert-danger",
        AlertKind::Info => "alert alert-info",
    };
    rsx! {
        div {
            class: "{class}",
            {children}
        }
    }
}
