//! Card for a single entry plus its edit/delete modal.
//!
//! DESIGN
//! ======
//! The card is a plain link to the entry's site. Owners and privileged viewers
//! get a settings button that opens the modal; the review fields inside the
//! modal are privileged-only. Save and delete both end in a full page reload.
//!
//! The modal's draft, busy flag and alert live on the card, not the modal, so
//! a request finishing after the modal closed still shows its outcome and
//! unsaved edits survive reopening.

#[cfg(test)]
#[path = "friend_card_test.rs"]
mod friend_card_test;

use leptos::prelude::*;

use crate::components::dialog::{AlertDialog, ConfirmDialog};
use crate::components::draft_fields::DraftFields;
use crate::net::types::{Acceptance, FriendItem};
use crate::state::dialog::{AlertMessage, ModalState};
use crate::state::friend_form::{EditDraft, FriendDraft, parse_sort_order};
use crate::state::viewer::ViewerState;
use crate::util::health::humanize;
use crate::util::i18n::{Key, Locale};

/// Label for a review state, shared by the card badge and the selector.
pub fn acceptance_label(accepted: Acceptance) -> Key {
    match accepted {
        Acceptance::Rejected => Key::ReviewRejected,
        Acceptance::Pending => Key::ReviewWaiting,
        Acceptance::Accepted => Key::ReviewAccepted,
    }
}

/// Badge shown on the card for entries that are not yet accepted.
fn status_badge(accepted: Acceptance) -> Option<(Key, &'static str)> {
    match accepted {
        Acceptance::Accepted => None,
        Acceptance::Pending => Some((acceptance_label(accepted), "friend-card__status friend-card__status--waiting")),
        Acceptance::Rejected => Some((acceptance_label(accepted), "friend-card__status friend-card__status--rejected")),
    }
}

fn avatar_class(healthy: bool, base: &'static str) -> String {
    if healthy { base.to_owned() } else { format!("{base} {base}--grayscale") }
}

/// Edit state owned by the card scope and handed to the modal.
#[derive(Clone, Copy)]
struct EditSignals {
    modal: RwSignal<ModalState>,
    fields: RwSignal<FriendDraft>,
    accepted: RwSignal<Acceptance>,
    sort_order: RwSignal<i64>,
    alert: RwSignal<Option<AlertMessage>>,
}

impl EditSignals {
    fn new(friend: &FriendItem) -> Self {
        let seed = EditDraft::from_item(friend);
        Self {
            modal: RwSignal::new(ModalState::default()),
            fields: RwSignal::new(seed.fields),
            accepted: RwSignal::new(seed.accepted),
            sort_order: RwSignal::new(seed.sort_order),
            alert: RwSignal::new(None),
        }
    }

    fn draft(self) -> EditDraft {
        EditDraft {
            fields: self.fields.get_untracked(),
            accepted: self.accepted.get_untracked(),
            sort_order: self.sort_order.get_untracked(),
        }
    }

    /// Marks the modal busy; `false` if a request is already running.
    fn begin_request(self) -> bool {
        self.modal.try_update(ModalState::begin_request).unwrap_or(false)
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn finish_request(self, locale: Locale, result: Result<(), String>, success: Key) {
        self.modal.update(ModalState::finish_request);
        self.alert.set(Some(AlertMessage::for_outcome(locale, result, success)));
    }
}

#[component]
pub fn FriendCard(friend: FriendItem) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let edit = EditSignals::new(&friend);

    let healthy = friend.is_healthy();
    let name = friend.name.clone();
    let desc = friend.desc.clone().unwrap_or_default();
    let health = friend.health.clone();
    let badge = status_badge(friend.accepted);
    let manage_target = friend.clone();
    let can_manage = move || viewer.with(|v| v.can_manage(&manage_target));
    let modal_friend = friend.clone();

    view! {
        <a
            class="friend-card"
            title=name.clone()
            href=friend.url.clone()
            target="_blank"
            rel="noopener noreferrer"
        >
            <div class="friend-card__avatar">
                <img class=avatar_class(healthy, "friend-card__avatar-img") src=friend.avatar.clone() alt=name.clone()/>
            </div>
            <p class="friend-card__name">{name.clone()}</p>
            {healthy.then(|| view! { <p class="friend-card__desc">{desc}</p> })}
            {badge.map(|(key, class)| view! { <p class=class>{move || locale.get().t(key)}</p> })}
            {(!healthy)
                .then(|| view! { <p class="friend-card__health">{move || humanize(locale.get(), &health)}</p> })}
            <Show when=can_manage>
                <button
                    class="friend-card__settings"
                    title=move || locale.get().t(Key::Settings)
                    aria-label=move || locale.get().t(Key::Settings)
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        edit.modal.update(ModalState::show);
                    }
                >
                    "⚙"
                </button>
            </Show>
        </a>
        <Show when=move || edit.modal.with(|m| m.open)>
            <FriendEditModal friend=modal_friend.clone() edit=edit/>
        </Show>
        <AlertDialog alert=edit.alert/>
    }
}

/// Edit modal: review fields for privileged viewers, text fields for all.
#[component]
fn FriendEditModal(friend: FriendItem, edit: EditSignals) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();

    let EditSignals { modal, fields, accepted, sort_order, .. } = edit;
    let confirm_delete = RwSignal::new(false);
    let busy = move || modal.with(|m| m.busy);
    let close = move || {
        modal.update(|m| {
            m.request_close();
        });
    };
    let id = friend.id;
    let name = friend.name.clone();
    let label = move || locale.get().update_label(&name);
    let healthy = friend.is_healthy();

    let on_save = move |_| {
        if !edit.begin_request() {
            return;
        }
        let body = edit.draft().to_update();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_friend(id, &body).await;
            edit.finish_request(locale.get_untracked(), result, Key::UpdateSuccess);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    let on_delete_confirmed = Callback::new(move |()| {
        confirm_delete.set(false);
        if !edit.begin_request() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_friend(id).await;
            edit.finish_request(locale.get_untracked(), result, Key::DeleteSuccess);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });
    let on_delete_cancel = Callback::new(move |()| confirm_delete.set(false));

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--friend"
                role="dialog"
                aria-label=label
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
                tabindex="0"
            >
                <div class="friend-card__avatar">
                    <img
                        class=avatar_class(healthy, "dialog__avatar-img")
                        src=friend.avatar.clone()
                        alt=friend.name.clone()
                    />
                </div>
                <Show when=move || viewer.with(ViewerState::is_privileged)>
                    <div class="dialog__review">
                        <label class="dialog__row">
                            <span class="dialog__label">{move || locale.get().t(Key::Status)}</span>
                            <select
                                class="dialog__select"
                                on:change=move |ev| {
                                    let code = event_target_value(&ev).parse::<i64>().ok();
                                    if let Some(next) = code.and_then(Acceptance::from_code) {
                                        accepted.set(next);
                                    }
                                }
                            >
                                {Acceptance::ALL
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option
                                                value=option.code().to_string()
                                                selected=move || accepted.get() == option
                                            >
                                                {move || locale.get().t(acceptance_label(option))}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="dialog__row">
                            <span class="dialog__label">{move || locale.get().t(Key::SortOrder)}</span>
                            <input
                                class="dialog__input"
                                type="number"
                                placeholder=move || locale.get().t(Key::SortOrder)
                                prop:value=move || sort_order.get().to_string()
                                on:input=move |ev| sort_order.set(parse_sort_order(&event_target_value(&ev)))
                            />
                        </label>
                    </div>
                </Show>
                <DraftFields draft=fields/>
                <div class="dialog__actions">
                    <button
                        class="btn btn--danger"
                        disabled=busy
                        on:click=move |_| confirm_delete.set(true)
                    >
                        {move || locale.get().t(Key::DeleteTitle)}
                    </button>
                    <button class="btn btn--primary" disabled=busy on:click=on_save>
                        {move || locale.get().t(Key::Save)}
                    </button>
                </div>
            </div>
        </div>
        <Show when=move || confirm_delete.get()>
            <ConfirmDialog
                title=Key::DeleteTitle
                message=Key::DeleteConfirm
                on_confirm=on_delete_confirmed
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}
