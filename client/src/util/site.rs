//! Build-time site identity and API location.
//!
//! Values are baked in at compile time so SSR and hydrated output agree.

/// Base URL of the remote API. Empty means same origin.
pub const API_URL: &str = match option_env!("FRIENDS_API_URL") {
    Some(url) => url,
    None => "",
};

/// Site display name used in the document title and `og:site_name`.
pub const SITE_NAME: &str = match option_env!("FRIENDS_SITE_NAME") {
    Some(name) => name,
    None => "Friends",
};

/// Site avatar used for `og:image`.
pub const SITE_AVATAR: &str = match option_env!("FRIENDS_SITE_AVATAR") {
    Some(avatar) => avatar,
    None => "",
};

/// Compose the document title for a page.
pub fn page_title(page: &str) -> String {
    format!("{page} - {SITE_NAME}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_appends_site_name() {
        assert_eq!(page_title("Links"), format!("Links - {SITE_NAME}"));
    }
}
