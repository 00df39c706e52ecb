//! Editable drafts behind the creation form and the edit modal.

#[cfg(test)]
#[path = "friend_form_test.rs"]
mod friend_form_test;

use crate::net::types::{Acceptance, FriendItem, FriendUpdate, NewFriend};

/// Text fields shared by the creation form and the edit modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FriendDraft {
    pub name: String,
    pub desc: String,
    pub avatar: String,
    pub url: String,
}

impl FriendDraft {
    pub fn from_item(item: &FriendItem) -> Self {
        Self {
            name: item.name.clone(),
            desc: item.desc.clone().unwrap_or_default(),
            avatar: item.avatar.clone(),
            url: item.url.clone(),
        }
    }

    pub fn to_new_friend(&self) -> NewFriend {
        NewFriend {
            avatar: self.avatar.clone(),
            name: self.name.clone(),
            desc: self.desc.clone(),
            url: self.url.clone(),
        }
    }
}

/// Edit-modal state: text fields plus the privileged-only review fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub fields: FriendDraft,
    pub accepted: Acceptance,
    pub sort_order: i64,
}

impl EditDraft {
    pub fn from_item(item: &FriendItem) -> Self {
        Self {
            fields: FriendDraft::from_item(item),
            accepted: item.accepted,
            sort_order: item.sort_order.unwrap_or(0),
        }
    }

    /// Full-record replacement body for `PUT /friend/{id}`.
    pub fn to_update(&self) -> FriendUpdate {
        FriendUpdate {
            avatar: self.fields.avatar.clone(),
            name: self.fields.name.clone(),
            desc: self.fields.desc.clone(),
            url: self.fields.url.clone(),
            accepted: self.accepted,
            sort_order: self.sort_order,
        }
    }
}

/// Parse the sort-order input leniently: leading integer, else `0`.
pub fn parse_sort_order(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}
