//! This crate contains all shared UI for the admin panel and the auth pages.

pub mod dashboard;
pub mod format;
pub mod forms;
pub mod navigation;
pub mod sections;
pub mod tables;

mod panel;
pub use panel::AdminPanel;

mod session;
pub use session::{check_session, use_admin, AdminGuard, GuardDecision};

pub use dashboard::SummaryCards;
pub use forms::{FormError, LoginForm, RegisterForm, SubmitOutcome};
pub use sections::{Section, SectionRouter};

#[cfg(test)]
mod testing;
