//! # HTTP client for the GuardianTix REST API
//!
//! [`ApiClient`] wraps a [`reqwest::Client`]. On `wasm32` reqwest issues the
//! requests through the browser's `fetch`, so the session cookie set by the
//! server travels with every same-origin call.
//!
//! The UI never names `ApiClient` in its logic; it is written against
//! [`AdminBackend`], which tests implement with an in-memory double.
//!
//! ## Status handling
//!
//! List and stats endpoints must answer 2xx, anything else is
//! [`ApiError::Status`]. The auth check and the two auth posts answer errors
//! with a JSON body (`401 {"authenticated": false}`,
//! `401 {"success": false, "error": ...}`), so those bodies are decoded
//! whatever the status code.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    AuthResponse, AuthStatus, Concert, LoginRequest, RegisterRequest, Stats, TicketType,
    Transaction, User,
};

/// Endpoint paths, relative to the API base URL.
pub mod endpoints {
    pub const AUTH_CHECK: &str = "/api/auth/check";
    pub const LOGIN: &str = "/api/auth/login";
    pub const REGISTER: &str = "/api/auth/register";
    pub const STATS: &str = "/api/admin/stats";
    pub const USERS: &str = "/api/admin/users";
    pub const CONCERTS: &str = "/api/concerts";
    pub const TRANSACTIONS: &str = "/api/admin/transactions";
    /// Not served by every backend yet; callers treat a failure as an empty list.
    pub const TICKETS: &str = "/api/admin/tickets";
}

/// Everything the admin panel and auth forms ask of the server.
pub trait AdminBackend {
    fn auth_status(&self) -> impl Future<Output = Result<AuthStatus, ApiError>>;
    fn stats(&self) -> impl Future<Output = Result<Stats, ApiError>>;
    fn users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;
    fn concerts(&self) -> impl Future<Output = Result<Vec<Concert>, ApiError>>;
    fn transactions(&self) -> impl Future<Output = Result<Vec<Transaction>, ApiError>>;
    fn ticket_types(&self) -> impl Future<Output = Result<Vec<TicketType>, ApiError>>;
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (scheme + host, no trailing path).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        require_success: bool,
    ) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        decode(path, response, require_success).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode(path, response, false).await
    }
}

async fn decode<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
    require_success: bool,
) -> Result<T, ApiError> {
    let status = response.status();
    if require_success && !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        });
    }
    let body = response.text().await?;
    tracing::debug!(%path, status = status.as_u16(), bytes = body.len(), "API response");
    Ok(serde_json::from_str(&body)?)
}

impl AdminBackend for ApiClient {
    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.get_json(endpoints::AUTH_CHECK, false).await
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        self.get_json(endpoints::STATS, true).await
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(endpoints::USERS, true).await
    }

    async fn concerts(&self) -> Result<Vec<Concert>, ApiError> {
        self.get_json(endpoints::CONCERTS, true).await
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(endpoints::TRANSACTIONS, true).await
    }

    async fn ticket_types(&self) -> Result<Vec<TicketType>, ApiError> {
        self.get_json(endpoints::TICKETS, true).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::LOGIN, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::REGISTER, request).await
    }
}
