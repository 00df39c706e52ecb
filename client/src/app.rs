//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::friends::FriendsPage;
use crate::state::viewer::ViewerState;
use crate::util::i18n::Locale;
use crate::util::site;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides locale and viewer contexts, then loads the viewer profile and
/// site flags once in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let locale = RwSignal::new(Locale::default());
    let viewer = RwSignal::new(ViewerState::default());

    provide_context(locale);
    provide_context(viewer);

    Effect::new(move || {
        locale.set(Locale::detect());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let profile = crate::net::api::fetch_profile().await;
            let config = crate::net::api::fetch_client_config().await.unwrap_or_else(|| {
                log::warn!("client config unavailable, using defaults");
                crate::net::types::ClientConfig::default()
            });
            viewer.set(ViewerState { profile, config });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/friends.css"/>
        <Title text=site::SITE_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FriendsPage/>
                <Route path=StaticSegment("friends") view=FriendsPage/>
            </Routes>
        </Router>
    }
}
