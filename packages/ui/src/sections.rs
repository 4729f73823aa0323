//! # Admin panel sections and the router that switches between them
//!
//! The panel is a single page with one content panel per [`Section`]. Only
//! one is visible at a time; the sidebar link that opened it is the only
//! active link.
//!
//! ## Stale responses
//!
//! Every call to [`SectionRouter::show`] bumps a generation counter and the
//! returned [`LoadTicket`] carries the generation it was issued for. When the
//! fetch completes, [`SectionRouter::accept`] installs the data only if no
//! newer switch happened in between, so a slow response for a section the
//! user already left can never overwrite the visible one.
//!
//! ## Failure policy
//!
//! [`load_section`] turns any failed request into an empty list. Every
//! section therefore renders its empty-state after a failure instead of
//! keeping whatever was on screen before.

use api::{AdminBackend, Concert, TicketType, Transaction, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Users,
    Events,
    Transactions,
    Tickets,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Users,
        Section::Events,
        Section::Transactions,
        Section::Tickets,
    ];

    /// DOM id of the section panel.
    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Events => "events",
            Section::Transactions => "transactions",
            Section::Tickets => "tickets",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Events => "Events",
            Section::Transactions => "Transactions",
            Section::Tickets => "Tickets",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Dashboard => "\u{1F4CA}",
            Section::Users => "\u{1F464}",
            Section::Events => "\u{1F3B5}",
            Section::Transactions => "\u{1F4B3}",
            Section::Tickets => "\u{1F39F}\u{FE0F}",
        }
    }

    /// Whether opening this section fetches a list from the server.
    pub fn needs_data(self) -> bool {
        !matches!(self, Section::Dashboard)
    }
}

/// Data fetched for one section.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionData {
    Users(Vec<User>),
    Events(Vec<Concert>),
    Transactions(Vec<Transaction>),
    Tickets(Vec<TicketType>),
}

impl SectionData {
    pub fn section(&self) -> Section {
        match self {
            SectionData::Users(_) => Section::Users,
            SectionData::Events(_) => Section::Events,
            SectionData::Transactions(_) => Section::Transactions,
            SectionData::Tickets(_) => Section::Tickets,
        }
    }
}

/// Permission to install the result of one fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub section: Section,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionRouter {
    visible: Section,
    active_link: Section,
    generation: u64,
    data: Option<SectionData>,
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self {
            visible: Section::Dashboard,
            active_link: Section::Dashboard,
            generation: 0,
            data: None,
        }
    }
}

impl SectionRouter {
    /// Show `target`, hide everything else and mark `origin` (the control
    /// that was clicked) as the active link.
    ///
    /// Returns a ticket when `target` needs a fetch. Data for the previously
    /// visible section is dropped.
    pub fn show(&mut self, target: Section, origin: Section) -> Option<LoadTicket> {
        self.visible = target;
        self.active_link = origin;
        self.generation += 1;
        self.data = None;

        target.needs_data().then_some(LoadTicket {
            section: target,
            generation: self.generation,
        })
    }

    /// Install fetched data. Returns `false` and discards it when the ticket
    /// predates the latest switch.
    pub fn accept(&mut self, ticket: LoadTicket, data: SectionData) -> bool {
        if ticket.generation != self.generation
            || ticket.section != self.visible
            || data.section() != ticket.section
        {
            tracing::debug!(
                section = ticket.section.id(),
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale section data"
            );
            return false;
        }
        self.data = Some(data);
        true
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible == section
    }

    pub fn is_link_active(&self, link: Section) -> bool {
        self.active_link == link
    }

    /// Data for the visible section, `None` while its fetch is in flight.
    pub fn data(&self) -> Option<&SectionData> {
        self.data.as_ref()
    }
}

/// Fetch the list behind `section`. Failures are logged and come back as an
/// empty list. Returns `None` for sections without data.
pub async fn load_section<B: AdminBackend>(backend: &B, section: Section) -> Option<SectionData> {
    let data = match section {
        Section::Dashboard => return None,
        Section::Users => SectionData::Users(or_empty(section, backend.users().await)),
        Section::Events => SectionData::Events(or_empty(section, backend.concerts().await)),
        Section::Transactions => {
            SectionData::Transactions(or_empty(section, backend.transactions().await))
        }
        Section::Tickets => SectionData::Tickets(or_empty(section, backend.ticket_types().await)),
    };
    Some(data)
}

fn or_empty<T>(section: Section, result: Result<Vec<T>, api::ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(
            section = section.id(),
            status = ?e.status(),
            "Error loading {}: {e}",
            section.id()
        );
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_show_makes_only_target_visible() {
        let mut router = SectionRouter::default();
        assert!(router.is_visible(Section::Dashboard));

        router.show(Section::Users, Section::Users);
        for section in Section::ALL {
            assert_eq!(router.is_visible(section), section == Section::Users);
            assert_eq!(router.is_link_active(section), section == Section::Users);
        }
    }

    #[test]
    fn test_active_link_is_the_explicit_origin() {
        let mut router = SectionRouter::default();
        // e.g. a "view all" button on the dashboard opening the users panel
        // while the highlighted sidebar entry stays on the dashboard link.
        router.show(Section::Users, Section::Dashboard);
        assert!(router.is_visible(Section::Users));
        assert!(router.is_link_active(Section::Dashboard));
        assert!(!router.is_link_active(Section::Users));
    }

    #[test]
    fn test_dashboard_needs_no_fetch() {
        let mut router = SectionRouter::default();
        let users = router.show(Section::Users, Section::Users).unwrap();
        assert_eq!(router.show(Section::Dashboard, Section::Dashboard), None);
        // leaving for the dashboard still invalidates the users fetch
        assert!(!router.accept(users, SectionData::Users(Vec::new())));
        assert_eq!(router.data(), None);
    }

    #[test]
    fn test_data_for_another_section_is_rejected() {
        let mut router = SectionRouter::default();
        let ticket = router.show(Section::Users, Section::Users).unwrap();
        assert!(!router.accept(ticket, SectionData::Events(Vec::new())));
        assert!(router.accept(ticket, SectionData::Users(Vec::new())));
    }

    #[tokio::test]
    async fn test_tickets_section_fetches_tickets_once() {
        let backend = MockBackend {
            tickets: Some(Vec::new()),
            ..MockBackend::default()
        };
        let mut router = SectionRouter::default();

        let ticket = router.show(Section::Tickets, Section::Tickets).unwrap();
        let data = load_section(&backend, ticket.section).await.unwrap();
        assert!(router.accept(ticket, data));

        for s in Section::ALL {
            assert_eq!(router.is_visible(s), s == Section::Tickets);
        }
        assert_eq!(backend.calls.tickets.get(), 1);
        assert_eq!(backend.calls.total(), 1);
        assert_eq!(router.data(), Some(&SectionData::Tickets(Vec::new())));
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let backend = MockBackend {
            users: Some(Vec::new()),
            concerts: Some(Vec::new()),
            ..MockBackend::default()
        };
        let mut router = SectionRouter::default();

        let users_ticket = router.show(Section::Users, Section::Users).unwrap();
        let events_ticket = router.show(Section::Events, Section::Events).unwrap();

        // The events response lands first, then the slow users response.
        let events = load_section(&backend, events_ticket.section).await.unwrap();
        assert!(router.accept(events_ticket, events));
        let users = load_section(&backend, users_ticket.section).await.unwrap();
        assert!(!router.accept(users_ticket, users));

        assert!(router.is_visible(Section::Events));
        assert_eq!(router.data(), Some(&SectionData::Events(Vec::new())));
    }

    #[test]
    fn test_reopening_same_section_invalidates_older_fetch() {
        let mut router = SectionRouter::default();
        let first = router.show(Section::Users, Section::Users).unwrap();
        let second = router.show(Section::Users, Section::Users).unwrap();
        assert!(second.generation > first.generation);
        assert!(!router.accept(first, SectionData::Users(Vec::new())));
        assert!(router.accept(second, SectionData::Users(Vec::new())));
    }

    #[tokio::test]
    async fn test_failed_loads_yield_empty_lists() {
        let backend = MockBackend::default();
        for section in [
            Section::Users,
            Section::Events,
            Section::Transactions,
            Section::Tickets,
        ] {
            let data = load_section(&backend, section).await.unwrap();
            assert_eq!(data.section(), section);
            let empty = match data {
                SectionData::Users(v) => v.is_empty(),
                SectionData::Events(v) => v.is_empty(),
                SectionData::Transactions(v) => v.is_empty(),
                SectionData::Tickets(v) => v.is_empty(),
            };
            assert!(empty, "{section:?}");
        }
        assert_eq!(backend.calls.total(), 4);
        assert_eq!(load_section(&backend, Section::Dashboard).await, None);
        assert_eq!(backend.calls.total(), 4);
    }
}
