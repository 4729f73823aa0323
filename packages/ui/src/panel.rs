use api::{AdminConfig, ApiClient, Stats};
use dioxus::prelude::*;

use crate::dashboard::{load_stats, SummaryCards};
use crate::navigation::{confirm, navigate_to};
use crate::sections::{load_section, Section, SectionData, SectionRouter};
use crate::session::use_admin;
use crate::tables::{EventsTable, TicketsTable, TransactionsTable, UsersTable};

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Leave through `logout_path`, but only once the user confirms.
fn logout(logout_path: &str, confirm: impl FnOnce(&str) -> bool, go: impl FnOnce(&str)) {
    if confirm(LOGOUT_PROMPT) {
        go(logout_path);
    }
}

/// The admin panel body: sidebar navigation plus one panel per section.
/// Meant to be rendered inside [`crate::AdminGuard`].
#[component]
pub fn AdminPanel() -> Element {
    let client = use_context::<ApiClient>();
    let config = use_context::<AdminConfig>();
    let admin = use_admin();
    let mut router = use_signal(SectionRouter::default);
    let mut stats = use_signal(|| Option::<Stats>::None);

    let stats_client = client.clone();
    let _ = use_resource(move || {
        let client = stats_client.clone();
        async move {
            if let Some(loaded) = load_stats(&client).await {
                stats.set(Some(loaded));
            }
        }
    });

    // (target, origin): origin is the link the user actually clicked.
    let open = use_callback(move |(target, origin): (Section, Section)| {
        let ticket = router.write().show(target, origin);
        if let Some(ticket) = ticket {
            let client = client.clone();
            spawn(async move {
                if let Some(data) = load_section(&client, ticket.section).await {
                    router.write().accept(ticket, data);
                }
            });
        }
    });

    let logout_path = config.routes.logout.clone();
    let on_logout = move |_| logout(&logout_path, confirm, navigate_to);

    let username = admin()
        .and_then(|user| user.username)
        .unwrap_or_else(|| "Admin".to_string());
    let state = router();

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }

        div {
            class: "admin-layout",

            nav {
                class: "sidebar",
                div { class: "sidebar-brand", "GuardianTix Admin" }
                div { class: "sidebar-user", "{username}" }
                for section in Section::ALL {
                    a {
                        key: "{section.id()}",
                        href: "#{section.id()}",
                        class: if state.is_link_active(section) { "active" } else { "" },
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            open.call((section, section));
                        },
                        "{section.icon()} {section.label()}"
                    }
                }
                button {
                    class: "sidebar-logout",
                    onclick: on_logout,
                    "Logout"
                }
            }

            main {
                class: "content",
                for section in Section::ALL {
                    div {
                        key: "{section.id()}",
                        id: section.id(),
                        class: "section",
                        style: if state.is_visible(section) { "display: block;" } else { "display: none;" },
                        if state.is_visible(section) {
                            SectionBody {
                                section,
                                data: state.data().cloned(),
                                stats: stats(),
                                on_open: open,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionBody(
    section: Section,
    data: Option<SectionData>,
    stats: Option<Stats>,
    on_open: Callback<(Section, Section)>,
) -> Element {
    match (section, data) {
        (Section::Dashboard, _) => rsx! {
            h2 { "Dashboard" }
            SummaryCards { stats }
            div {
                class: "quick-links",
                for target in [Section::Transactions, Section::Tickets] {
                    button {
                        key: "{target.id()}",
                        class: "quick-link",
                        onclick: move |_| on_open.call((target, Section::Dashboard)),
                        "View {target.label()}"
                    }
                }
            }
        },
        (_, Some(SectionData::Users(users))) => rsx! { UsersTable { users } },
        (_, Some(SectionData::Events(concerts))) => rsx! { EventsTable { concerts } },
        (_, Some(SectionData::Transactions(transactions))) => rsx! {
            TransactionsTable { transactions }
        },
        (_, Some(SectionData::Tickets(tickets))) => rsx! {
            TicketsTable {
                tickets,
                on_add: EventHandler::new(move |_| tracing::info!("Add ticket type requested")),
            }
        },
        (_, None) => rsx! {
            h2 { "{section.label()}" }
            p { class: "loading", "Loading..." }
        },
    }
}
