use api::{AdminConfig, ApiClient};
use dioxus::prelude::*;

use views::{Admin, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/admin")]
    Admin {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Used when the page origin is unknown (native builds).
const FALLBACK_ORIGIN: &str = "http://localhost:5000";

fn main() {
    dioxus::launch(App);
}

fn load_config() -> AdminConfig {
    match AdminConfig::from_toml(include_str!("../admin.toml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", AdminConfig::filename(), e);
            AdminConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| {
        let origin = ui::navigation::current_origin().unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
        ApiClient::new(config.base_url_or(&origin))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Redirect `/` to `/admin`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Admin {});
    rsx! {}
}
