//! JSON view models returned by the backend.
//!
//! None of these are persisted on the client; every fetch rebuilds them from scratch.

mod auth;
mod catalog;
mod id;
mod stats;
mod transaction;
mod user;

pub use auth::{AuthResponse, AuthStatus, LoginRequest, RegisterRequest, SessionUser};
pub use catalog::{Concert, TicketType};
pub use id::RecordId;
pub use stats::Stats;
pub use transaction::Transaction;
pub use user::User;
