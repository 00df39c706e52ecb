use super::*;
use crate::net::types::Acceptance;

fn profile(id: i64, permission: bool) -> Profile {
    Profile { id, username: format!("user-{id}"), avatar: None, permission }
}

fn entry(uid: i64) -> FriendItem {
    FriendItem {
        id: 1,
        uid,
        name: "Site".to_owned(),
        avatar: String::new(),
        desc: Some("desc".to_owned()),
        url: "https://site.example".to_owned(),
        accepted: Acceptance::Pending,
        health: String::new(),
        sort_order: Some(0),
        created_at: None,
        updated_at: None,
    }
}

fn viewer(profile: Option<Profile>, apply_enabled: bool) -> ViewerState {
    ViewerState { profile, config: ClientConfig { friend_apply_enable: apply_enabled } }
}

// =============================================================
// can_manage
// =============================================================

#[test]
fn privileged_viewer_manages_any_entry() {
    let v = viewer(Some(profile(1, true)), false);
    assert!(v.can_manage(&entry(1)));
    assert!(v.can_manage(&entry(99)));
}

#[test]
fn owner_manages_own_entry_only() {
    let v = viewer(Some(profile(5, false)), true);
    assert!(v.can_manage(&entry(5)));
    assert!(!v.can_manage(&entry(6)));
}

#[test]
fn anonymous_viewer_manages_nothing() {
    let v = viewer(None, true);
    assert!(!v.can_manage(&entry(0)));
}

// =============================================================
// can_submit
// =============================================================

#[test]
fn privileged_viewer_can_submit_without_flag() {
    assert!(viewer(Some(profile(1, true)), false).can_submit());
}

#[test]
fn regular_viewer_can_submit_only_with_flag() {
    assert!(viewer(Some(profile(2, false)), true).can_submit());
    assert!(!viewer(Some(profile(2, false)), false).can_submit());
}

#[test]
fn anonymous_viewer_never_sees_form() {
    assert!(!viewer(None, true).can_submit());
    assert!(!viewer(None, false).can_submit());
}

// =============================================================
// shows_own_application
// =============================================================

#[test]
fn own_application_shown_to_non_privileged_viewer() {
    let apply = entry(2);
    assert!(viewer(Some(profile(2, false)), true).shows_own_application(Some(&apply)));
    assert!(!viewer(Some(profile(2, false)), true).shows_own_application(None));
}

#[test]
fn own_application_hidden_from_privileged_viewer() {
    let apply = entry(1);
    assert!(!viewer(Some(profile(1, true)), false).shows_own_application(Some(&apply)));
}
