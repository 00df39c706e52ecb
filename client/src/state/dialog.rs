//! Alert state for mutation outcomes.
//!
//! Every mutation ends the same way: failures show the server's error text
//! and close quietly; successes show an acknowledgement and reload the page
//! when dismissed.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use crate::util::i18n::{Key, Locale};

/// What happens when the alert is dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterDismiss {
    Close,
    Reload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertMessage {
    pub text: String,
    pub after: AfterDismiss,
}

impl AlertMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), after: AfterDismiss::Close }
    }

    pub fn success_then_reload(text: impl Into<String>) -> Self {
        Self { text: text.into(), after: AfterDismiss::Reload }
    }

    /// Alert for a finished mutation; `success` names the acknowledgement.
    pub fn for_outcome(locale: Locale, result: Result<(), String>, success: Key) -> Self {
        match result {
            Ok(()) => Self::success_then_reload(locale.t(success)),
            Err(err) => Self::error(err),
        }
    }
}

/// Open/busy state of an edit modal. Closing is refused while a request is
/// in flight so its outcome still lands in the alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub busy: bool,
}

impl ModalState {
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Returns `false` and stays open while a request is running.
    pub fn request_close(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.open = false;
        true
    }

    /// Returns `true` only when no other request is running.
    pub fn begin_request(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish_request(&mut self) {
        self.busy = false;
    }
}
