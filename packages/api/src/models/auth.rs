//! # Session and credential payloads
//!
//! - [`AuthStatus`] is the body of `GET /api/auth/check`. The server answers
//!   `{"authenticated": false}` with a 401, so every field defaults and the
//!   client parses the body whatever the status code.
//! - [`LoginRequest`] / [`RegisterRequest`] are the JSON bodies posted by the
//!   auth forms.
//! - [`AuthResponse`] is the reply to both posts: `{success, redirect}` on
//!   success, `{success: false, error}` otherwise.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Role string the backend assigns to administrators.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// The signed-in user as reported by the auth check.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl AuthStatus {
    /// True only for an authenticated session whose user has the admin role.
    pub fn is_admin(&self) -> bool {
        self.authenticated
            && self
                .user
                .as_ref()
                .is_some_and(|user| user.role == ADMIN_ROLE)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username or email; the server accepts either.
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
