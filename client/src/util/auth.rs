//! Bearer-token header provider for authenticated API calls.
//!
//! The token is written to `localStorage` by the site's login flow; this
//! module only reads it. SSR paths never see a token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// Format an `Authorization` header value, or `None` for a blank token.
pub fn bearer_value(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

/// `Authorization` header for the current browser session, if signed in.
pub fn authorization_header() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        bearer_value(&token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
