//! Session gate for the admin panel.

use api::{AdminBackend, AdminConfig, ApiClient, SessionUser};
use dioxus::prelude::*;

use crate::navigation::navigate_to;

/// Outcome of the one-shot auth check.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    Admit(SessionUser),
    Redirect(String),
}

/// Ask the server who is signed in. Only an authenticated admin is admitted;
/// everyone else, and every failure, is sent to `login_path`. No retry.
pub async fn check_session<B: AdminBackend>(backend: &B, login_path: &str) -> GuardDecision {
    match backend.auth_status().await {
        Ok(status) if status.is_admin() => {
            GuardDecision::Admit(status.user.unwrap_or_default())
        }
        Ok(_) => GuardDecision::Redirect(login_path.to_string()),
        Err(e) => {
            tracing::error!("Auth check failed: {}", e);
            GuardDecision::Redirect(login_path.to_string())
        }
    }
}

/// The admin admitted by [`AdminGuard`]. Only available inside the guard.
pub fn use_admin() -> Signal<Option<SessionUser>> {
    use_context::<Signal<Option<SessionUser>>>()
}

/// Runs the auth check on mount and renders `children` only for an admin,
/// fading the panel in. Anyone else is navigated to the login page and sees
/// nothing.
#[component]
pub fn AdminGuard(children: Element) -> Element {
    let client = use_context::<ApiClient>();
    let config = use_context::<AdminConfig>();
    let mut admin = use_context_provider(|| Signal::new(Option::<SessionUser>::None));

    let _ = use_resource(move || {
        let client = client.clone();
        let login_path = config.routes.login.clone();
        async move {
            match check_session(&client, &login_path).await {
                GuardDecision::Admit(user) => admin.set(Some(user)),
                GuardDecision::Redirect(to) => navigate_to(&to),
            }
        }
    });

    let admitted = admin().is_some();

    rsx! {
        div {
            class: "admin-root",
            style: if admitted { "opacity: 1; transition: opacity 0.5s ease;" } else { "opacity: 0;" },
            if admitted {
                {children}
            }
        }
    }
}
