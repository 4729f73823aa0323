//! # User rows for the admin user table
//!
//! [`User`] mirrors one entry of `GET /api/admin/users`. The backend sends
//! `join_date` as an ISO date (`"2024-01-01"`), sometimes as a full timestamp;
//! it is kept as the raw string and formatted by the UI.

use serde::{Deserialize, Serialize};

use super::auth::ADMIN_ROLE;
use super::RecordId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
    #[serde(default)]
    pub join_date: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
