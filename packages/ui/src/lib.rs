//! This crate contains all shared UI for the workspace.
//!
//! The plain-data modules ([`draft`], [`pagination`], [`board`]) hold every
//! state transition of the voyage screens and are tested without a renderer.
//! Components and views wrap them in signals and drive the [`api`] client.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod board;
pub mod draft;
pub mod pagination;

mod storage;
pub use storage::{load_config, make_session_store};

pub mod views;
pub use views::{AppShell, AuthMode, AuthScreen, ModalOverlay, VoyagesView};

pub const VOYAGES_CSS: Asset = asset!("/assets/voyages.css");

mod auth;
pub use auth::{
    api_client, sign_in, sign_out, use_api, use_auth, use_config, use_session_store, AuthProvider,
    AuthState, Screen, SessionStoreHandle,
};

mod header;
pub use header::{Footer, Header};

mod voyage_list;
pub use voyage_list::{PaginationControls, VoyageList};

mod voyage_form;
pub use voyage_form::VoyageForm;

mod login_form;
pub use login_form::LoginForm;

mod register_form;
pub use register_form::RegisterForm;

pub use board::{Board, Editor, FormMode, Modal, SubmitBlocked, SubmitRequest};
pub use draft::{CargoField, DraftError, Field, VoyageDraft};
pub use pagination::Paginator;
