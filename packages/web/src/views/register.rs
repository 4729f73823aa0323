//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterForm;

use super::login::AUTH_CSS;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "auth-container",

            h1 { class: "auth-title", "Create Account" }

            p { class: "auth-subtitle", "Sign up for GuardianTix" }

            RegisterForm {}

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }

        style { {AUTH_CSS} }
    }
}
