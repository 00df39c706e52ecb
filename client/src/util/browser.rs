//! Browser navigation helpers.
//!
//! Mutations re-sync by reloading the whole page rather than patching local
//! state. SSR paths no-op.

/// Reload the current document.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::warn!("page reload failed: {err:?}");
            }
        }
    }
}

/// Absolute URL of the current document, used for `og:url`.
pub fn current_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
