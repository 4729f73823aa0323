//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::LoginForm;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "auth-container",

            h1 { class: "auth-title", "GuardianTix" }

            p { class: "auth-subtitle", "Sign in to your account" }

            LoginForm {}

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }

        style { {AUTH_CSS} }
    }
}

pub(crate) const AUTH_CSS: &str = r#"
.auth-form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    width: 100%;
    max-width: 320px;
}

.auth-form input {
    padding: 0.5rem 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 4px;
    font-size: 0.9375rem;
}

.auth-form button {
    margin-top: 0.75rem;
    padding: 0.625rem 1.25rem;
    border: none;
    border-radius: 4px;
    background-color: #2563eb;
    color: white;
    font-size: 0.9375rem;
    font-weight: 500;
    cursor: pointer;
}

.auth-form button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
"#;
