use dioxus::prelude::*;
use ui::{AdminGuard, AdminPanel};

/// Admin panel page. Nothing renders until the session check admits an admin.
#[component]
pub fn Admin() -> Element {
    rsx! {
        AdminGuard {
            AdminPanel {}
        }
    }
}
