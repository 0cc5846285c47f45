//! # API crate: REST client for the voyage backend
//!
//! Every network call the front-end makes goes through [`ApiClient`]. The
//! backend is an external collaborator; this crate only knows its routes and
//! JSON shapes.
//!
//! ## Endpoints
//!
//! | Method | Route | Call | Returns |
//! |--------|-------|------|---------|
//! | `GET` | `/api/voyages` | [`ApiClient::list_voyages`] | `Vec<Voyage>` |
//! | `POST` | `/api/voyages` | [`ApiClient::create_voyage`] | created `Voyage` |
//! | `PUT` | `/api/voyages/:id` | [`ApiClient::update_voyage`] | updated `Voyage` |
//! | `POST` | `/api/auth/login` | [`ApiClient::login`] | [`LoginResponse`] `{ token, user }` |
//! | `POST` | `/api/auth/register` | [`ApiClient::register`] | [`RegisterResponse`] `{ message }` |
//!
//! ## Authentication
//!
//! A client carrying a token (see [`ApiClient::with_token`]) attaches
//! `Authorization: Bearer <token>` to every request, voyage routes included.
//!
//! ## Errors
//!
//! Any non-2xx response becomes [`ApiError::Status`] whose message is the
//! body's `error` field when the backend supplies one. Transport and decode
//! failures surface as [`ApiError::Transport`]. Nothing is retried or cached.

mod client;
mod error;

pub use client::{ApiClient, LoginResponse, RegisterResponse};
pub use error::{ApiError, Result};
pub use store::{Session, UserInfo, Voyage};
