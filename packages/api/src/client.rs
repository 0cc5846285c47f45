use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{Session, UserInfo, Voyage};

use crate::{ApiError, Result};

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

impl From<LoginResponse> for Session {
    fn from(res: LoginResponse) -> Self {
        Session::new(res.token, res.user)
    }
}

/// Response of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// REST client for the voyage backend.
///
/// Cheap to clone; the underlying connection pool is shared. A client built
/// with [`ApiClient::with_token`] sends `Authorization: Bearer <token>` on
/// every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            token: None,
        }
    }

    /// Attach (or drop) the bearer token used for subsequent requests.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{method} {url}");
        let req = self.http.request(method, url);
        match &self.token {
            Some(token) => req.header(AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
        let res = req.send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let err = ApiError::from_body(status, &body);
            tracing::warn!("Backend returned {status}: {err}");
            return Err(err);
        }
        Ok(res.json().await?)
    }

    /// `GET /api/voyages`
    pub async fn list_voyages(&self) -> Result<Vec<Voyage>> {
        Self::send(self.request(Method::GET, "/api/voyages")).await
    }

    /// `POST /api/voyages`
    pub async fn create_voyage(&self, voyage: &Voyage) -> Result<Voyage> {
        Self::send(self.request(Method::POST, "/api/voyages").json(voyage)).await
    }

    /// `PUT /api/voyages/:id`
    pub async fn update_voyage(&self, id: &str, voyage: &Voyage) -> Result<Voyage> {
        let path = format!("/api/voyages/{id}");
        Self::send(self.request(Method::PUT, &path).json(voyage)).await
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest { email, password };
        Self::send(self.request(Method::POST, "/api/auth/login").json(&body)).await
    }

    /// `POST /api/auth/register`
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse> {
        let body = RegisterRequest {
            username,
            email,
            password,
        };
        Self::send(self.request(Method::POST, "/api/auth/register").json(&body)).await
    }
}
