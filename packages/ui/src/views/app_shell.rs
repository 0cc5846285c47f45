use dioxus::prelude::*;

use crate::auth::{use_auth, AuthProvider, Screen};
use crate::storage::load_config;
use crate::VOYAGES_CSS;

use super::{AuthScreen, VoyagesView};

/// Root of the application. Provides configuration and the auth context,
/// then shows the voyages screen or the sign-in screen.
#[component]
pub fn AppShell() -> Element {
    use_context_provider(|| {
        let config = load_config();
        tracing::info!("Using backend at {}", config.api.base_url);
        Signal::new(config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VOYAGES_CSS }
        AuthProvider {
            AuthGate {}
        }
    }
}

#[component]
fn AuthGate() -> Element {
    let auth = use_auth();
    let screen = auth.read().screen();

    match screen {
        Screen::Voyages => rsx! { VoyagesView {} },
        Screen::SignIn => rsx! { AuthScreen {} },
    }
}
