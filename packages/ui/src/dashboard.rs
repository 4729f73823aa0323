//! Dashboard summary cards.

use api::{AdminBackend, Stats};
use dioxus::prelude::*;

use crate::format::rupiah;

/// Stable ids of the three cards, in display order.
pub const EVENTS_CARD_ID: &str = "summary-events";
pub const SALES_CARD_ID: &str = "summary-sales";
pub const USERS_CARD_ID: &str = "summary-users";

/// Fetch the dashboard counts. A failure is logged and leaves the cards as
/// they are.
pub async fn load_stats<B: AdminBackend>(backend: &B) -> Option<Stats> {
    match backend.stats().await {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!("Error loading stats: {}", e);
            None
        }
    }
}

fn count_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn SummaryCards(stats: Option<Stats>) -> Element {
    let concerts = count_or_dash(stats.as_ref().map(|s| s.total_concerts));
    let registered = count_or_dash(stats.as_ref().map(|s| s.total_users));
    let recent = count_or_dash(stats.as_ref().map(|s| s.recent_users));
    let sold = count_or_dash(stats.as_ref().and_then(|s| s.total_tickets_sold));
    let revenue = stats
        .as_ref()
        .and_then(|s| s.total_revenue)
        .map(rupiah)
        .unwrap_or_else(|| "-".to_string());
    let pending = count_or_dash(stats.as_ref().and_then(|s| s.pending_transactions));

    rsx! {
        div {
            class: "summary",
            div {
                id: EVENTS_CARD_ID,
                class: "summary-card",
                h3 { "\u{1F3B5} Total Events" }
                p { "Active Events: " b { "{concerts}" } }
                p { "Upcoming: " b { "{concerts}" } }
            }
            div {
                id: SALES_CARD_ID,
                class: "summary-card",
                h3 { "\u{1F39F}\u{FE0F} Ticket Sales" }
                p { "Sold: " b { "{sold}" } }
                p { "Revenue: " b { "{revenue}" } }
                p { "Pending: " b { "{pending}" } }
            }
            div {
                id: USERS_CARD_ID,
                class: "summary-card",
                h3 { "\u{1F464} Users" }
                p { "Registered: " b { "{registered}" } }
                p { "Recent: " b { "{recent}" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;

    #[tokio::test]
    async fn test_load_stats() {
        let backend = MockBackend {
            stats: Some(Stats {
                total_users: 2,
                recent_users: 1,
                total_concerts: 3,
                ..Stats::default()
            }),
            ..MockBackend::default()
        };
        let stats = load_stats(&backend).await.unwrap();
        assert_eq!(stats.total_concerts, 3);
        assert_eq!(backend.calls.stats.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_stats_are_swallowed() {
        let backend = MockBackend::default();
        assert_eq!(load_stats(&backend).await, None);
    }

    #[test]
    fn test_cards_show_counts() {
        let stats = Stats {
            total_users: 12,
            recent_users: 4,
            total_concerts: 3,
            total_tickets_sold: Some(1200),
            total_revenue: Some(850_000_000.0),
            pending_transactions: Some(20),
        };
        let html = dioxus_ssr::render_element(rsx! { SummaryCards { stats: Some(stats) } });
        assert!(html.contains("id=\"summary-events\""));
        assert!(html.contains("id=\"summary-users\""));
        assert!(html.contains("<b>12</b>"));
        assert!(html.contains("<b>4</b>"));
        assert!(html.contains("Rp850.000.000"));
        assert!(html.contains("<b>1200</b>"));
    }

    #[test]
    fn test_cards_without_stats_keep_placeholders() {
        let html = dioxus_ssr::render_element(rsx! { SummaryCards { stats: None } });
        assert_eq!(html.matches("summary-card").count(), 3);
        assert!(html.contains("<b>-</b>"));
    }
}
