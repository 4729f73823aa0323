//! # Login and registration forms
//!
//! The submit logic is split from the components so it can run against any
//! [`AdminBackend`]:
//!
//! - [`submit_login`] posts `{identifier, password}` to `/api/auth/login`.
//! - [`submit_register`] checks the password confirmation locally, then posts
//!   `{username, email, password}` to `/api/auth/register`.
//!
//! Both return a [`SubmitOutcome`]: either the URL the server wants the
//! browser to go to, or the message to show. The message goes into the one
//! shared [`FormError`] container at the end of the form, which only exists
//! once there is something to say. The form stays editable so the user can
//! retry.

use api::{AdminBackend, ApiClient, AuthResponse, LoginRequest, RegisterRequest};
use dioxus::prelude::*;

use crate::navigation::navigate_to;

pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";
const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Redirect(String),
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFields {
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

fn outcome(
    result: Result<AuthResponse, api::ApiError>,
    fallback: &str,
) -> SubmitOutcome {
    match result {
        Ok(AuthResponse {
            success: true,
            redirect,
            ..
        }) => SubmitOutcome::Redirect(redirect.unwrap_or_else(|| "/".to_string())),
        Ok(AuthResponse { error, .. }) => {
            SubmitOutcome::Error(error.unwrap_or_else(|| fallback.to_string()))
        }
        Err(e) => {
            tracing::warn!("Auth request failed: {}", e);
            SubmitOutcome::Error(NETWORK_ERROR.to_string())
        }
    }
}

pub async fn submit_login<B: AdminBackend>(backend: &B, form: &LoginFields) -> SubmitOutcome {
    let request = LoginRequest {
        identifier: form.identifier.clone(),
        password: form.password.clone(),
    };
    outcome(backend.login(&request).await, LOGIN_FAILED)
}

pub async fn submit_register<B: AdminBackend>(backend: &B, form: &RegisterFields) -> SubmitOutcome {
    if form.password != form.confirm_password {
        return SubmitOutcome::Error(PASSWORD_MISMATCH.to_string());
    }
    let request = RegisterRequest {
        username: form.username.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    };
    outcome(backend.register(&request).await, REGISTRATION_FAILED)
}

/// The single error container shared by every auth form. Renders nothing
/// until there is a message.
#[component]
pub fn FormError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div {
                id: "error-message",
                class: "form-error",
                style: "color: red; margin-top: 10px; display: block;",
                "{message}"
            }
        }
    }
}

/// Apply a submit outcome: clear the error and navigate away, or show the
/// message and stay.
fn apply(
    outcome: SubmitOutcome,
    mut show_error: impl FnMut(Option<String>),
    go: impl FnOnce(&str),
) {
    match outcome {
        SubmitOutcome::Redirect(url) => {
            show_error(None);
            go(&url);
        }
        SubmitOutcome::Error(message) => show_error(Some(message)),
    }
}

#[component]
pub fn LoginForm() -> Element {
    let client = use_context::<ApiClient>();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let form = LoginFields {
            identifier: identifier(),
            password: password(),
        };
        spawn(async move {
            submitting.set(true);
            let outcome = submit_login(&client, &form).await;
            submitting.set(false);
            apply(outcome, move |message| error.set(message), navigate_to);
        });
    };

    rsx! {
        form {
            id: "loginForm",
            class: "auth-form",
            onsubmit: handle_submit,

            label { r#for: "email", "Email or username" }
            input {
                id: "email",
                r#type: "text",
                required: true,
                value: identifier(),
                oninput: move |evt: FormEvent| identifier.set(evt.value()),
            }

            label { r#for: "password", "Password" }
            input {
                id: "password",
                r#type: "password",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Login" }
            }

            FormError { message: error() }
        }
    }
}

#[component]
pub fn RegisterForm() -> Element {
    let client = use_context::<ApiClient>();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let form = RegisterFields {
            username: username(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        spawn(async move {
            submitting.set(true);
            let outcome = submit_register(&client, &form).await;
            submitting.set(false);
            apply(outcome, move |message| error.set(message), navigate_to);
        });
    };

    rsx! {
        form {
            id: "registerForm",
            class: "auth-form",
            onsubmit: handle_submit,

            label { r#for: "username", "Username" }
            input {
                id: "username",
                r#type: "text",
                required: true,
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }

            label { r#for: "email", "Email" }
            input {
                id: "email",
                r#type: "email",
                required: true,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            label { r#for: "password", "Password" }
            input {
                id: "password",
                r#type: "password",
                required: true,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            label { r#for: "confirm_password", "Confirm password" }
            input {
                id: "confirm_password",
                r#type: "password",
                required: true,
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }

            button {
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Creating account..." } else { "Register" }
            }

            FormError { message: error() }
        }
    }
}
