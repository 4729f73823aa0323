use api::User;
use dioxus::prelude::*;

use super::{status_class, Cell, DataTable, EmptyState, TableRow, TableView};
use crate::format::local_date;

const COLUMNS: &[&str] = &["ID", "Name", "Email", "Role", "Join Date"];

pub fn users_view(users: &[User]) -> TableView {
    TableView {
        heading: "User Management",
        columns: COLUMNS,
        rows: users
            .iter()
            .map(|user| TableRow {
                key: user.id.to_string(),
                cells: vec![
                    Cell::plain(user.id.to_string()),
                    Cell::plain(&user.username),
                    Cell::plain(&user.email),
                    Cell::styled(&user.role, status_class(user.is_admin())),
                    Cell::plain(local_date(&user.join_date)),
                ],
            })
            .collect(),
        empty: EmptyState {
            message: "No users yet",
            hint: "Registered accounts will appear here.",
        },
        noun: "users",
        action: None,
    }
}

#[component]
pub fn UsersTable(users: Vec<User>) -> Element {
    rsx! {
        DataTable { view: users_view(&users) }
    }
}
