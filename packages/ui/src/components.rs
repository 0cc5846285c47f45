//! Small form primitives shared by the voyage and auth views.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = variant.class();
    rsx! {
        button {
            class: "{base} {class}",
            r#type: r#type,
            disabled: disabled,
            title: title,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, #[props(default)] required: bool, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: html_for,
            {children}
            if required {
                span { class: "field-required", " *" }
            }
        }
    }
}

#[component]
pub fn Input(
    id: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] autocomplete: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            id: id,
            name: name,
            class: "field-input {class}",
            r#type: r#type,
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            required: required,
            autocomplete: autocomplete,
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn Textarea(
    id: String,
    #[props(default)] name: String,
    value: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        textarea {
            id: id,
            name: name,
            class: "field-input field-textarea",
            rows: rows,
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

/// Inline banner for errors and notices.
#[component]
pub fn Banner(#[props(default)] success: bool, message: String) -> Element {
    let class = if success { "banner banner-success" } else { "banner banner-error" };
    rsx! {
        div { class: class, role: "alert", "{message}" }
    }
}
