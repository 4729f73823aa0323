//! # API crate — typed REST client for the GuardianTix backend
//!
//! Everything the admin panel and the auth pages know about the server lives here:
//! the JSON shapes it returns, the endpoint table, and the HTTP client that talks to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] (reqwest) and the [`AdminBackend`] trait the UI is written against |
//! | [`config`] | [`AdminConfig`], the TOML configuration embedded in the web binary |
//! | [`error`] | [`ApiError`], the single error type for every request |
//! | [`models`] | Serde view models: auth status, stats, users, concerts, transactions, ticket types |
//!
//! ## Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/api/auth/check` | [`AuthStatus`] (also parsed on 401) |
//! | GET | `/api/admin/stats` | [`Stats`] |
//! | GET | `/api/admin/users` | `Vec<`[`User`]`>` |
//! | GET | `/api/concerts` | `Vec<`[`Concert`]`>` |
//! | GET | `/api/admin/transactions` | `Vec<`[`Transaction`]`>` |
//! | GET | `/api/admin/tickets` | `Vec<`[`TicketType`]`>` |
//! | POST | `/api/auth/login` | [`AuthResponse`] |
//! | POST | `/api/auth/register` | [`AuthResponse`] |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{endpoints, AdminBackend, ApiClient};
pub use config::AdminConfig;
pub use error::ApiError;
pub use models::{
    AuthResponse, AuthStatus, Concert, LoginRequest, RecordId, RegisterRequest, SessionUser,
    Stats, TicketType, Transaction, User,
};
