use serde::{Deserialize, Serialize};

use super::RecordId;

/// Status string of a settled payment.
pub const COMPLETED_STATUS: &str = "Completed";

/// One ticket purchase from `GET /api/admin/transactions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub buyer_name: String,
    pub ticket_type: String,
    /// Amount paid in Rupiah.
    pub total_price: f64,
    pub payment_method: String,
    #[serde(default)]
    pub date: String,
    pub status: String,
}

impl Transaction {
    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED_STATUS
    }
}
