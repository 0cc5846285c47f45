use dioxus::prelude::*;

use crate::components::{Banner, Button, ButtonVariant};
use crate::header::{Footer, Header};
use crate::login_form::LoginForm;
use crate::register_form::RegisterForm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// The signed-out screen: login or registration, switched explicitly.
/// A successful registration returns to login with the email prefilled.
#[component]
pub fn AuthScreen(#[props(default)] initial_mode: AuthMode) -> Element {
    let mut mode = use_signal(move || initial_mode);
    let mut prefill_email = use_signal(String::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let on_registered = move |(email, message): (String, String)| {
        prefill_email.set(email);
        notice.set(Some(message));
        mode.set(AuthMode::Login);
    };

    let mut switch_to = move |next: AuthMode| {
        notice.set(None);
        mode.set(next);
    };

    let (prompt, toggle_label, other) = match mode() {
        AuthMode::Login => ("Don't have an account?", "Register", AuthMode::Register),
        AuthMode::Register => ("Already have an account?", "Login", AuthMode::Login),
    };

    rsx! {
        div {
            class: "app",
            Header {}
            main {
                class: "auth-screen",
                if let Some(message) = notice() {
                    Banner { success: true, message }
                }
                {match mode() {
                    AuthMode::Login => rsx! { LoginForm { initial_email: prefill_email() } },
                    AuthMode::Register => rsx! { RegisterForm { on_registered } },
                }}
                p {
                    class: "auth-switch",
                    "{prompt} "
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| switch_to(other),
                        "{toggle_label}"
                    }
                }
            }
            Footer {}
        }
    }
}
