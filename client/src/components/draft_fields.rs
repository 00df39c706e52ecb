//! Name/description/avatar/URL inputs bound to a `FriendDraft`.

use leptos::prelude::*;

use crate::state::friend_form::FriendDraft;
use crate::util::i18n::{Key, Locale};

#[component]
pub fn DraftFields(draft: RwSignal<FriendDraft>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <div class="draft-fields">
            <input
                class="draft-fields__input"
                type="text"
                placeholder=move || locale.get().t(Key::SiteName)
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.name = value);
                }
            />
            <input
                class="draft-fields__input"
                type="text"
                placeholder=move || locale.get().t(Key::Description)
                prop:value=move || draft.with(|d| d.desc.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.desc = value);
                }
            />
            <input
                class="draft-fields__input"
                type="url"
                placeholder=move || locale.get().t(Key::AvatarUrl)
                prop:value=move || draft.with(|d| d.avatar.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.avatar = value);
                }
            />
            <input
                class="draft-fields__input"
                type="url"
                placeholder=move || locale.get().t(Key::Url)
                prop:value=move || draft.with(|d| d.url.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.url = value);
                }
            />
        </div>
    }
}
