//! Account registration form.

use dioxus::prelude::*;

use crate::auth::{api_client, use_auth, use_config};
use crate::components::{Banner, Button, ButtonVariant, Input};

/// Registration form. On success the fields are cleared and `on_registered`
/// receives the email used and the server's message.
#[component]
pub fn RegisterForm(on_registered: EventHandler<(String, String)>) -> Element {
    let auth = use_auth();
    let config = use_config();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            if u.is_empty() || e.is_empty() || p.is_empty() {
                error.set(Some("Username, email and password are required".to_string()));
                return;
            }

            loading.set(true);
            let client = api_client(&config.read(), &auth.read());
            match client.register(&u, &e, &p).await {
                Ok(res) => {
                    tracing::info!("Registered account {}", e);
                    loading.set(false);
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    on_registered.call((e, res.message));
                }
                Err(err) => {
                    tracing::error!("Registration failed: {}", err);
                    loading.set(false);
                    let message = err
                        .server_message()
                        .unwrap_or("Registration failed")
                        .to_string();
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_register,

            h2 { "Create account" }

            if let Some(err) = error() {
                Banner { message: err }
            }

            Input {
                id: "register-username",
                placeholder: "Username",
                autocomplete: "username",
                value: username(),
                disabled: loading(),
                oninput: move |v: String| username.set(v),
            }

            Input {
                id: "register-email",
                r#type: "email",
                placeholder: "Email",
                autocomplete: "email",
                value: email(),
                disabled: loading(),
                oninput: move |v: String| email.set(v),
            }

            Input {
                id: "register-password",
                r#type: "password",
                placeholder: "Password",
                autocomplete: "new-password",
                value: password(),
                disabled: loading(),
                oninput: move |v: String| password.set(v),
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "auth-submit",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Register" }
            }
        }
    }
}
