use serde::{Deserialize, Serialize};

/// Aggregate counts behind the dashboard summary cards.
///
/// The last three fields are only sent by newer backends; the sales card
/// shows placeholders when they are absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub recent_users: u64,
    #[serde(default)]
    pub total_concerts: u64,
    #[serde(default)]
    pub total_tickets_sold: Option<u64>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub pending_transactions: Option<u64>,
}
