//! Browser-level side effects: full page navigation and confirmation prompts.
//!
//! On `wasm32` these go through `web_sys::Window`. Native builds (tests, SSR)
//! have no window, so navigation is only logged.

/// Hand the browser over to `url` (a full page load, not a router push).
pub fn navigate_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {url}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(%url, "navigation requested");
    }
}

/// Show a blocking confirm dialog. Always `false` without a window.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(%message, "confirm requested without a window");
        false
    }
}

/// `scheme://host[:port]` of the current page.
pub fn current_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
