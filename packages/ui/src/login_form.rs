//! Email/password sign-in form.

use dioxus::prelude::*;
use store::Session;

use crate::auth::{api_client, sign_in, use_auth, use_config, use_session_store};
use crate::components::{Banner, Button, ButtonVariant, Input};

/// Sign-in form. On success the session is stored and the app switches to
/// the voyages screen.
#[component]
pub fn LoginForm(#[props(default)] initial_email: String) -> Element {
    let auth = use_auth();
    let config = use_config();
    let session_store = use_session_store();
    let mut email = use_signal(move || initial_email);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let session_store = session_store.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            let client = api_client(&config.read(), &auth.read());
            match client.login(&e, &p).await {
                Ok(res) => {
                    loading.set(false);
                    sign_in(auth, &session_store, Session::from(res));
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    loading.set(false);
                    let message = err.server_message().unwrap_or("Login failed").to_string();
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_login,

            h2 { "Sign in" }

            if let Some(err) = error() {
                Banner { message: err }
            }

            Input {
                id: "login-email",
                r#type: "email",
                placeholder: "Email",
                autocomplete: "email",
                value: email(),
                disabled: loading(),
                oninput: move |v: String| email.set(v),
            }

            Input {
                id: "login-password",
                r#type: "password",
                placeholder: "Password",
                autocomplete: "current-password",
                value: password(),
                disabled: loading(),
                oninput: move |v: String| password.set(v),
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "auth-submit",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Login" }
            }
        }
    }
}
