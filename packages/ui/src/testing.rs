//! In-memory [`AdminBackend`] for unit tests.

use std::cell::{Cell, RefCell};

use api::{
    AdminBackend, ApiError, AuthResponse, AuthStatus, Concert, LoginRequest, RegisterRequest,
    SessionUser, Stats, TicketType, Transaction, User,
};

/// Canned responses plus a per-endpoint call counter. `None` means the
/// endpoint answers with a 500.
#[derive(Default)]
pub struct MockBackend {
    pub auth: Option<AuthStatus>,
    pub stats: Option<Stats>,
    pub users: Option<Vec<User>>,
    pub concerts: Option<Vec<Concert>>,
    pub transactions: Option<Vec<Transaction>>,
    pub tickets: Option<Vec<TicketType>>,
    pub auth_response: Option<AuthResponse>,
    pub calls: Calls,
    pub last_login: RefCell<Option<LoginRequest>>,
    pub last_register: RefCell<Option<RegisterRequest>>,
}

#[derive(Default)]
pub struct Calls {
    pub auth: Cell<u32>,
    pub stats: Cell<u32>,
    pub users: Cell<u32>,
    pub concerts: Cell<u32>,
    pub transactions: Cell<u32>,
    pub tickets: Cell<u32>,
    pub login: Cell<u32>,
    pub register: Cell<u32>,
}

impl Calls {
    pub fn total(&self) -> u32 {
        self.auth.get()
            + self.stats.get()
            + self.users.get()
            + self.concerts.get()
            + self.transactions.get()
            + self.tickets.get()
            + self.login.get()
            + self.register.get()
    }
}

pub fn session(authenticated: bool, role: &str) -> AuthStatus {
    AuthStatus {
        authenticated,
        user: Some(SessionUser {
            role: role.to_string(),
            ..SessionUser::default()
        }),
    }
}

fn bump(counter: &Cell<u32>) {
    counter.set(counter.get() + 1);
}

fn answer<T: Clone>(value: &Option<T>, path: &str) -> Result<T, ApiError> {
    value.clone().ok_or_else(|| ApiError::Status {
        status: 500,
        path: path.to_string(),
    })
}

impl AdminBackend for MockBackend {
    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        bump(&self.calls.auth);
        answer(&self.auth, api::endpoints::AUTH_CHECK)
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        bump(&self.calls.stats);
        answer(&self.stats, api::endpoints::STATS)
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        bump(&self.calls.users);
        answer(&self.users, api::endpoints::USERS)
    }

    async fn concerts(&self) -> Result<Vec<Concert>, ApiError> {
        bump(&self.calls.concerts);
        answer(&self.concerts, api::endpoints::CONCERTS)
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        bump(&self.calls.transactions);
        answer(&self.transactions, api::endpoints::TRANSACTIONS)
    }

    async fn ticket_types(&self) -> Result<Vec<TicketType>, ApiError> {
        bump(&self.calls.tickets);
        answer(&self.tickets, api::endpoints::TICKETS)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        bump(&self.calls.login);
        *self.last_login.borrow_mut() = Some(request.clone());
        answer(&self.auth_response, api::endpoints::LOGIN)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        bump(&self.calls.register);
        *self.last_register.borrow_mut() = Some(request.clone());
        answer(&self.auth_response, api::endpoints::REGISTER)
    }
}
