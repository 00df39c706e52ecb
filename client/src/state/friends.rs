//! Friend-list state for the friends page.
//!
//! DESIGN
//! ======
//! Groups are derived from `(accepted, health)` on every fetch and replaced
//! wholesale; nothing patches an individual entry in place. Mutations reload
//! the page instead of editing these lists.

#[cfg(test)]
#[path = "friends_test.rs"]
mod friends_test;

use crate::net::types::{Acceptance, FriendItem, FriendListResponse};

/// Display bucket for an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FriendGroup {
    /// Accepted and reachable.
    Available,
    /// Accepted but the last health check failed.
    Unavailable,
    /// Awaiting review.
    Waiting,
    Rejected,
}

impl FriendGroup {
    pub fn of(item: &FriendItem) -> Self {
        match item.accepted {
            Acceptance::Accepted if item.is_healthy() => FriendGroup::Available,
            Acceptance::Accepted => FriendGroup::Unavailable,
            Acceptance::Pending => FriendGroup::Waiting,
            Acceptance::Rejected => FriendGroup::Rejected,
        }
    }
}

/// A fetched list split into display buckets, in server order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FriendGroups {
    pub available: Vec<FriendItem>,
    pub unavailable: Vec<FriendItem>,
    pub waiting: Vec<FriendItem>,
    pub rejected: Vec<FriendItem>,
    /// The viewer's own application, kept apart from the buckets.
    pub apply: Option<FriendItem>,
}

impl FriendGroups {
    pub fn partition(resp: FriendListResponse) -> Self {
        let mut groups = FriendGroups { apply: resp.apply_list, ..FriendGroups::default() };
        for item in resp.friend_list {
            let bucket = match FriendGroup::of(&item) {
                FriendGroup::Available => &mut groups.available,
                FriendGroup::Unavailable => &mut groups.unavailable,
                FriendGroup::Waiting => &mut groups.waiting,
                FriendGroup::Rejected => &mut groups.rejected,
            };
            bucket.push(item);
        }
        groups
    }

    pub fn group(&self, group: FriendGroup) -> &[FriendItem] {
        match group {
            FriendGroup::Available => &self.available,
            FriendGroup::Unavailable => &self.unavailable,
            FriendGroup::Waiting => &self.waiting,
            FriendGroup::Rejected => &self.rejected,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Idle,
}

/// Page-scoped list state. `requested` guards the one-shot initial fetch.
#[derive(Clone, Debug, Default)]
pub struct FriendsState {
    pub groups: FriendGroups,
    pub status: LoadStatus,
    requested: bool,
}

impl FriendsState {
    /// Claim the initial fetch. Returns `true` exactly once per state instance.
    pub fn begin_load(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Store a fetch outcome. Failures leave the groups empty.
    pub fn finish_load(&mut self, result: Result<FriendListResponse, String>) {
        if let Ok(resp) = result {
            self.groups = FriendGroups::partition(resp);
        }
        self.status = LoadStatus::Idle;
    }

    /// Whether the page body should replace the waiting placeholder.
    pub fn ready(&self) -> bool {
        !self.groups.available.is_empty() || !self.groups.unavailable.is_empty() || self.status == LoadStatus::Idle
    }
}
