//! # Frontend configuration — `admin.toml`
//!
//! The web binary embeds an `admin.toml` at build time and parses it once on
//! startup. It says where the REST API lives and which server routes the
//! frontend hands the browser to for login and logout.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""        # empty = same origin as the page
//!
//! [routes]
//! login = "/login"
//! logout = "/logout"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub routes: RouteConfig,
}

/// Where the REST endpoints are served from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host (+ port) prefixed to every endpoint path.
    /// Empty string means the origin of the current page.
    #[serde(default)]
    pub base_url: String,
}

/// Server-side pages the frontend navigates to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default = "default_login")]
    pub login: String,
    #[serde(default = "default_logout")]
    pub logout: String,
}

fn default_login() -> String {
    "/login".to_string()
}

fn default_logout() -> String {
    "/logout".to_string()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: default_login(),
            logout: default_logout(),
        }
    }
}

impl AdminConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The API base URL, falling back to `origin` when none is configured.
    pub fn base_url_or(&self, origin: &str) -> String {
        let configured = self.api.base_url.trim();
        if configured.is_empty() {
            origin.trim_end_matches('/').to_string()
        } else {
            configured.trim_end_matches('/').to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AdminConfig::from_toml("").unwrap();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.routes.logout, "/logout");
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_routes_keep_defaults() {
        let config = AdminConfig::from_toml(
            r#"
            [routes]
            logout = "/auth/logout"
            "#,
        )
        .unwrap();
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.routes.logout, "/auth/logout");
    }

    #[test]
    fn test_base_url_falls_back_to_origin() {
        let config = AdminConfig::default();
        assert_eq!(config.base_url_or("http://localhost:5000/"), "http://localhost:5000");

        let config = AdminConfig::from_toml(
            r#"
            [api]
            base_url = "https://tix.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url_or("http://localhost:5000"), "https://tix.example.com");
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(AdminConfig::from_toml("[routes]\nlogin = 5\n").is_err());
        assert!(AdminConfig::from_toml("[api\nbase_url = \"\"").is_err());
    }
}
