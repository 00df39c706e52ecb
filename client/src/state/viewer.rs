//! Viewer identity and site flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as context by `App`. Components ask this state what the viewer is
//! allowed to see instead of inspecting the profile directly.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::types::{ClientConfig, FriendItem, Profile};

#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    /// Signed-in viewer, `None` for anonymous visitors.
    pub profile: Option<Profile>,
    pub config: ClientConfig,
}

impl ViewerState {
    pub fn is_privileged(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.permission)
    }

    /// Edit/delete affordance: privileged viewers and the entry's owner.
    pub fn can_manage(&self, item: &FriendItem) -> bool {
        self.profile.as_ref().is_some_and(|p| p.permission || p.id == item.uid)
    }

    /// Creation form: signed-in viewers who are privileged, or anyone signed in
    /// when applications are enabled site-wide.
    pub fn can_submit(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.permission || self.config.friend_apply_enable)
    }

    /// The "my application" section is hidden from privileged viewers.
    pub fn shows_own_application(&self, apply: Option<&FriendItem>) -> bool {
        !self.is_privileged() && apply.is_some()
    }
}
