use api::Concert;
use dioxus::prelude::*;

use super::{Cell, DataTable, EmptyState, TableRow, TableView};
use crate::format::{local_date, rupiah};

const COLUMNS: &[&str] = &["Event Name", "Artist", "Date", "Venue", "Price"];

pub fn events_view(concerts: &[Concert]) -> TableView {
    TableView {
        heading: "Manage Events",
        columns: COLUMNS,
        rows: concerts
            .iter()
            .enumerate()
            .map(|(i, concert)| TableRow {
                key: concert
                    .id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("row-{i}")),
                cells: vec![
                    Cell::plain(&concert.name),
                    Cell::plain(&concert.artist),
                    Cell::plain(local_date(&concert.date)),
                    Cell::plain(&concert.venue),
                    Cell::plain(rupiah(concert.price)),
                ],
            })
            .collect(),
        empty: EmptyState {
            message: "No events yet",
            hint: "Concerts published on the platform will be listed here.",
        },
        noun: "events",
        action: None,
    }
}

#[component]
pub fn EventsTable(concerts: Vec<Concert>) -> Element {
    rsx! {
        DataTable { view: events_view(&concerts) }
    }
}
