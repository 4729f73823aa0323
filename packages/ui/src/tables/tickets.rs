use api::TicketType;
use dioxus::prelude::*;

use super::{Cell, DataTable, EmptyState, TableRow, TableView};
use crate::format::rupiah;

const COLUMNS: &[&str] = &["ID", "Event", "Type", "Price", "Available"];

pub fn tickets_view(tickets: &[TicketType]) -> TableView {
    TableView {
        heading: "Ticket Types",
        columns: COLUMNS,
        rows: tickets
            .iter()
            .map(|ticket| TableRow {
                key: ticket.id.to_string(),
                cells: vec![
                    Cell::plain(ticket.id.to_string()),
                    Cell::plain(&ticket.event_name),
                    Cell::plain(&ticket.kind),
                    Cell::plain(rupiah(ticket.price)),
                    Cell::plain(ticket.quantity_available.to_string()),
                ],
            })
            .collect(),
        empty: EmptyState {
            message: "No ticket types yet",
            hint: "Use \u{201C}Add Ticket Type\u{201D} to create the first one.",
        },
        noun: "ticket types",
        action: Some("+ Add Ticket Type"),
    }
}

#[component]
pub fn TicketsTable(tickets: Vec<TicketType>, on_add: Option<EventHandler<()>>) -> Element {
    rsx! {
        DataTable { view: tickets_view(&tickets), on_action: on_add }
    }
}
