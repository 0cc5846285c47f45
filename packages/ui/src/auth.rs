//! Authentication context and hooks for the UI.

use std::ops::Deref;
use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, Session, SessionStore, UserInfo};

use crate::storage::make_session_store;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Which top-level screen the app shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    Voyages,
}

impl AuthState {
    /// State restored from whatever session `store` holds.
    pub fn restore(store: &dyn SessionStore) -> Self {
        let session = Session::load(store);
        if let Some(session) = &session {
            tracing::info!("Restored session for {}", session.user.display_name());
        }
        Self { session }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn screen(&self) -> Screen {
        if self.is_authenticated() {
            Screen::Voyages
        } else {
            Screen::SignIn
        }
    }

    /// Persist `session` to `store` and become authenticated.
    pub fn sign_in(&mut self, store: &dyn SessionStore, session: Session) {
        session.persist(store);
        tracing::info!("Signed in as {}", session.user.display_name());
        self.session = Some(session);
    }

    /// Remove the stored session and return to the anonymous state.
    pub fn sign_out(&mut self, store: &dyn SessionStore) {
        Session::clear(store);
        tracing::info!("Signed out");
        *self = Self::default();
    }
}

/// Shared handle to the session store the [`AuthProvider`] persists to.
#[derive(Clone)]
pub struct SessionStoreHandle(Rc<dyn SessionStore>);

impl SessionStoreHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for SessionStoreHandle {
    type Target = dyn SessionStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for SessionStoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The session store provided by [`AuthProvider`].
pub fn use_session_store() -> SessionStoreHandle {
    use_context::<SessionStoreHandle>()
}

/// Client configuration provided by [`crate::AppShell`].
pub fn use_config() -> Signal<ClientConfig> {
    use_context::<Signal<ClientConfig>>()
}

/// An [`ApiClient`] for the configured backend carrying the current token.
pub fn use_api() -> ApiClient {
    api_client(&use_config().read(), &use_auth().read())
}

pub fn api_client(config: &ClientConfig, auth: &AuthState) -> ApiClient {
    ApiClient::new(config.api.base_url.clone()).with_token(auth.token().map(str::to_string))
}

/// Persist `session` and switch the app to the authenticated state.
pub fn sign_in(mut auth: Signal<AuthState>, store: &SessionStoreHandle, session: Session) {
    auth.write().sign_in(&**store, session);
}

/// Forget the stored session and return to the anonymous state.
pub fn sign_out(mut auth: Signal<AuthState>, store: &SessionStoreHandle) {
    auth.write().sign_out(&**store);
}

/// Provider component that manages authentication state.
/// The stored session, if any, is restored on mount. `store` defaults to
/// the platform store from [`make_session_store`].
#[component]
pub fn AuthProvider(
    #[props(default)] store: Option<SessionStoreHandle>,
    children: Element,
) -> Element {
    let store = use_context_provider(move || {
        store.unwrap_or_else(|| SessionStoreHandle::new(make_session_store()))
    });
    let auth_state = use_signal(|| AuthState::restore(&*store));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
