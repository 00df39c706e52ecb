//! Friends page: grouped link list plus the create/apply form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full list once per page instance, splits it into display
//! groups, and renders one `FriendList` per group. Every mutation (here and in
//! `FriendCard`) reloads the page on success instead of patching local state.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::dialog::AlertDialog;
use crate::components::draft_fields::DraftFields;
use crate::components::friend_list::FriendList;
use crate::net::types::FriendItem;
use crate::state::dialog::AlertMessage;
use crate::state::friend_form::FriendDraft;
use crate::state::friends::{FriendGroup, FriendsState};
use crate::state::viewer::ViewerState;
use crate::util::i18n::{Key, Locale};
use crate::util::site;

#[component]
pub fn FriendsPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let friends = RwSignal::new(FriendsState::default());

    Effect::new(move || {
        if !friends.try_update(FriendsState::begin_load).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_friends().await;
            if let Err(err) = &result {
                log::warn!("friend list fetch failed: {err}");
            }
            friends.update(|s| s.finish_load(result));
        });
    });

    let group = move |g: FriendGroup| Signal::derive(move || friends.with(|s| s.groups.group(g).to_vec()));
    let has = move |g: FriendGroup| Signal::derive(move || friends.with(|s| !s.groups.group(g).is_empty()));
    let apply = Signal::derive(move || friends.with(|s| s.groups.apply.iter().cloned().collect::<Vec<FriendItem>>()));
    let show_apply = Signal::derive(move || {
        let apply = friends.with(|s| s.groups.apply.clone());
        viewer.with(|v| v.shows_own_application(apply.as_ref()))
    });

    let page_title = move || locale.get().t(Key::FriendsTitle);
    // Only known after hydration; SSR renders it empty.
    let og_url = RwSignal::new(String::new());
    Effect::new(move || {
        if let Some(url) = crate::util::browser::current_url() {
            og_url.set(url);
        }
    });

    view! {
        <Title text=move || site::page_title(page_title())/>
        <Meta property="og:site_name" content=site::SITE_NAME/>
        <Meta property="og:title" content=page_title/>
        <Meta property="og:image" content=site::SITE_AVATAR/>
        <Meta property="og:type" content="article"/>
        <Meta property="og:url" content=move || og_url.get()/>
        <Show
            when=move || friends.with(FriendsState::ready)
            fallback=move || view! { <div class="friends-page__waiting">{move || locale.get().t(Key::Loading)}</div> }
        >
            <main class="friends-page">
                <FriendList title=Key::FriendsTitle show=has(FriendGroup::Available) friends=group(FriendGroup::Available)/>
                <FriendList
                    title=Key::FriendsLeft
                    show=has(FriendGroup::Unavailable)
                    friends=group(FriendGroup::Unavailable)
                />
                <FriendList title=Key::ReviewWaiting show=has(FriendGroup::Waiting) friends=group(FriendGroup::Waiting)/>
                <FriendList
                    title=Key::ReviewRejected
                    show=has(FriendGroup::Rejected)
                    friends=group(FriendGroup::Rejected)
                />
                <FriendList title=Key::MyApply show=show_apply friends=apply/>
                <Show when=move || viewer.with(ViewerState::can_submit)>
                    <CreateFriendForm/>
                </Show>
            </main>
        </Show>
    }
}

/// Creation form. Privileged viewers create entries directly; everyone else
/// submits an application for review.
#[component]
fn CreateFriendForm() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let draft = RwSignal::new(FriendDraft::default());
    let alert = RwSignal::new(None::<AlertMessage>);
    let busy = RwSignal::new(false);

    let heading = move || {
        let key = if viewer.with(ViewerState::is_privileged) { Key::FriendsCreate } else { Key::FriendsApply };
        locale.get().t(key)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = draft.with_untracked(FriendDraft::to_new_friend);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_friend(&body).await;
            alert.set(Some(AlertMessage::for_outcome(locale.get_untracked(), result, Key::CreateSuccess)));
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    view! {
        <div class="friends-form">
            <form class="friends-form__card" on:submit=on_submit>
                <p class="friends-form__title">{heading}</p>
                <DraftFields draft=draft/>
                <div class="friends-form__actions">
                    <button class="btn btn--primary friends-form__submit" type="submit" disabled=move || busy.get()>
                        {move || locale.get().t(Key::CreateTitle)}
                    </button>
                </div>
            </form>
        </div>
        <AlertDialog alert=alert/>
    }
}
