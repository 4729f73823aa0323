use api::Transaction;
use dioxus::prelude::*;

use super::{status_class, Cell, DataTable, EmptyState, TableRow, TableView};
use crate::format::{local_date, rupiah};

const COLUMNS: &[&str] = &[
    "ID",
    "Buyer",
    "Ticket Type",
    "Total",
    "Payment Method",
    "Date",
    "Status",
];

pub fn transactions_view(transactions: &[Transaction]) -> TableView {
    TableView {
        heading: "Transactions",
        columns: COLUMNS,
        rows: transactions
            .iter()
            .map(|tx| TableRow {
                key: tx.id.to_string(),
                cells: vec![
                    Cell::plain(tx.id.to_string()),
                    Cell::plain(&tx.buyer_name),
                    Cell::plain(&tx.ticket_type),
                    Cell::plain(rupiah(tx.total_price)),
                    Cell::plain(&tx.payment_method),
                    Cell::plain(local_date(&tx.date)),
                    Cell::styled(&tx.status, status_class(tx.is_completed())),
                ],
            })
            .collect(),
        empty: EmptyState {
            message: "No transactions yet",
            hint: "Ticket purchases will show up here once buyers check out.",
        },
        noun: "transactions",
        action: None,
    }
}

#[component]
pub fn TransactionsTable(transactions: Vec<Transaction>) -> Element {
    rsx! {
        DataTable { view: transactions_view(&transactions) }
    }
}
