//! Alert and confirm dialogs shared by the page and item modals.

use leptos::prelude::*;

use crate::state::dialog::{AfterDismiss, AlertMessage};
use crate::util::i18n::{Key, Locale};

/// Dismissible alert. Renders nothing while `alert` is `None`.
#[component]
pub fn AlertDialog(alert: RwSignal<Option<AlertMessage>>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    let dismiss = Callback::new(move |()| {
        let after = alert.get_untracked().map(|a| a.after);
        alert.set(None);
        if after == Some(AfterDismiss::Reload) {
            crate::util::browser::reload_page();
        }
    });

    view! {
        <Show when=move || alert.get().is_some()>
            <div class="dialog-backdrop dialog-backdrop--top" on:click=move |_| dismiss.run(())>
                <div
                    class="dialog dialog--alert"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" || ev.key() == "Enter" {
                            ev.prevent_default();
                            dismiss.run(());
                        }
                    }
                    tabindex="0"
                >
                    <p class="dialog__message">{move || alert.get().map(|a| a.text).unwrap_or_default()}</p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| dismiss.run(())>
                            {move || locale.get().t(Key::Close)}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Yes/no confirmation. The caller controls visibility.
#[component]
pub fn ConfirmDialog(title: Key, message: Key, on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <div class="dialog-backdrop dialog-backdrop--top" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || locale.get().t(title)}</h2>
                <p class="dialog__danger">{move || locale.get().t(message)}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        {move || locale.get().t(Key::Cancel)}
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {move || locale.get().t(Key::Confirm)}
                    </button>
                </div>
            </div>
        </div>
    }
}
