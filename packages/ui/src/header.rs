use chrono::Datelike;
use dioxus::prelude::*;

use crate::auth::{sign_out, use_auth, use_session_store};
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaRightFromBracket, FaShip};
use crate::Icon;

/// Top bar with the app title and, when signed in, the user and a logout
/// button. `on_logout` runs before the session is cleared.
#[component]
pub fn Header(#[props(default)] on_logout: Option<EventHandler<()>>) -> Element {
    let auth = use_auth();
    let session_store = use_session_store();
    let user_name = auth.read().user().map(|u| u.display_name().to_string());

    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-title",
                Icon { icon: FaShip, width: 20, height: 20 }
                h1 { "Vessel Tracker" }
            }
            if let Some(name) = user_name {
                div {
                    class: "app-user",
                    span { class: "app-user-name", "{name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Logout",
                        onclick: move |_| {
                            if let Some(handler) = on_logout {
                                handler.call(());
                            }
                            sign_out(auth, &session_store);
                        },
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        "Logout"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    rsx! {
        footer {
            class: "app-footer",
            "© {year} Vessel Voyage Tracker. All rights reserved."
        }
    }
}
