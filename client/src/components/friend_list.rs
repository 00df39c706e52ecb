//! Titled grid section for one group of entries.

use leptos::prelude::*;

use crate::components::friend_card::FriendCard;
use crate::net::types::FriendItem;
use crate::util::i18n::{Key, Locale};

/// Section header plus a responsive card grid. Renders nothing unless `show`.
#[component]
pub fn FriendList(title: Key, show: Signal<bool>, friends: Signal<Vec<FriendItem>>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <Show when=move || show.get()>
            <section class="friend-section">
                <div class="friend-section__header">
                    <p class="friend-section__title">{move || locale.get().t(title)}</p>
                </div>
                <div class="friend-section__grid">
                    <For
                        each=move || friends.get()
                        key=|friend| friend.id
                        children=move |friend: FriendItem| view! { <FriendCard friend=friend/> }
                    />
                </div>
            </section>
        </Show>
    }
}
