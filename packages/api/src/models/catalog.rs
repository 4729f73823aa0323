use serde::{Deserialize, Serialize};

use super::RecordId;

/// A concert listed by `GET /api/concerts`; shown as an "event" in the panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Concert {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub date: String,
    pub venue: String,
    /// Ticket price in Rupiah.
    pub price: f64,
    #[serde(default)]
    pub available_tickets: Option<i64>,
}

/// A purchasable ticket category for an event (`GET /api/admin/tickets`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: RecordId,
    pub event_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub quantity_available: i64,
}
