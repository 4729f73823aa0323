//! # Admin data tables
//!
//! Each entity gets a pure builder (`users_view`, `events_view`, ...) that maps
//! a slice of records to a [`TableView`]: heading, fixed column set, one row
//! of pre-formatted cells per record, and the text for the empty state.
//! [`DataTable`] turns any `TableView` into markup, so every table shares the
//! same empty-state row and footer.
//!
//! An empty list is never an empty `<tbody>`: it renders a single
//! placeholder row spanning every column with a warning icon, a bold
//! message and a muted hint.

use dioxus::prelude::*;

mod events;
mod tickets;
mod transactions;
mod users;

pub use events::{events_view, EventsTable};
pub use tickets::{tickets_view, TicketsTable};
pub use transactions::{transactions_view, TransactionsTable};
pub use users::{users_view, UsersTable};

/// Class for a positive role/status (admin, completed payment).
pub const STATUS_PAID: &str = "status-paid";
/// Class for every other role/status.
pub const STATUS_PENDING: &str = "status-pending";

/// Pick the status class for a boolean state.
pub fn status_class(positive: bool) -> &'static str {
    if positive {
        STATUS_PAID
    } else {
        STATUS_PENDING
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub text: String,
    pub class: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<Cell>,
}

/// Copy for the placeholder row of an empty table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmptyState {
    pub message: &'static str,
    pub hint: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub heading: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<TableRow>,
    pub empty: EmptyState,
    /// Plural noun used in the footer, e.g. "users".
    pub noun: &'static str,
    /// Label of the footer action button, if the table has one.
    pub action: Option<&'static str>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Footer line, e.g. `"Total users: 3"`.
    pub fn summary(&self) -> String {
        format!("Total {}: {}", self.noun, self.rows.len())
    }
}

/// Render a [`TableView`]. `on_action` fires when the footer action button
/// (if any) is clicked.
#[component]
pub fn DataTable(view: TableView, on_action: Option<EventHandler<()>>) -> Element {
    let colspan = view.columns.len();
    let summary = view.summary();

    rsx! {
        h2 { "{view.heading}" }
        div {
            class: "table-container",
            table {
                thead {
                    tr {
                        for column in view.columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    if view.is_empty() {
                        tr {
                            class: "empty-state",
                            td {
                                colspan: "{colspan}",
                                class: "empty-state-cell",
                                span { class: "empty-state-icon", "\u{26A0}\u{FE0F}" }
                                p { strong { "{view.empty.message}" } }
                                p { class: "empty-state-hint", "{view.empty.hint}" }
                            }
                        }
                    } else {
                        for row in view.rows.iter() {
                            tr {
                                key: "{row.key}",
                                for cell in row.cells.iter() {
                                    td {
                                        class: cell.class.unwrap_or_default(),
                                        "{cell.text}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        div {
            class: "table-footer",
            p { class: "table-summary", "{summary}" }
            if let Some(label) = view.action {
                button {
                    class: "btn-add",
                    onclick: move |_| {
                        if let Some(handler) = on_action {
                            handler.call(());
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Number of `<tr` rows in rendered markup, header included.
    pub fn row_count(html: &str) -> usize {
        html.matches("<tr").count()
    }

    pub fn placeholder_count(html: &str) -> usize {
        html.matches("class=\"empty-state\"").count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::*;

    fn sample_view(rows: usize) -> TableView {
        TableView {
            heading: "Things",
            columns: &["A", "B", "C"],
            rows: (0..rows)
                .map(|i| TableRow {
                    key: i.to_string(),
                    cells: vec![
                        Cell::plain(format!("a{i}")),
                        Cell::plain("b"),
                        Cell::styled("c", STATUS_PAID),
                    ],
                })
                .collect(),
            empty: EmptyState {
                message: "No things yet",
                hint: "Things show up here.",
            },
            noun: "things",
            action: None,
        }
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(true), "status-paid");
        assert_eq!(status_class(false), "status-pending");
    }

    #[test]
    fn test_empty_table_renders_single_spanning_placeholder() {
        let view = sample_view(0);
        let html = dioxus_ssr::render_element(rsx! { DataTable { view } });
        assert_eq!(placeholder_count(&html), 1);
        // header + placeholder
        assert_eq!(row_count(&html), 2);
        assert!(html.contains("colspan=\"3\""));
        assert!(html.contains("<strong>"));
        assert!(html.contains("No things yet"));
        assert!(html.contains("Things show up here."));
        assert!(html.contains("Total things: 0"));
    }

    #[test]
    fn test_rows_and_summary_match_input() {
        let view = sample_view(4);
        let html = dioxus_ssr::render_element(rsx! { DataTable { view } });
        assert_eq!(placeholder_count(&html), 0);
        assert_eq!(row_count(&html), 1 + 4);
        assert_eq!(html.matches("status-paid").count(), 4);
        assert!(html.contains("Total things: 4"));
        assert!(!html.contains("btn-add"));
    }

    #[test]
    fn test_action_button_rendered_when_labelled() {
        let mut view = sample_view(1);
        view.action = Some("+ Add Thing");
        let html = dioxus_ssr::render_element(rsx! { DataTable { view } });
        assert!(html.contains("btn-add"));
        assert!(html.contains("+ Add Thing"));
    }
}
