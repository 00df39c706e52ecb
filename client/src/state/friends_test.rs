use super::*;

fn item(id: i64, accepted: Acceptance, health: &str) -> FriendItem {
    FriendItem {
        id,
        uid: 100 + id,
        name: format!("site-{id}"),
        avatar: String::new(),
        desc: None,
        url: format!("https://site-{id}.example"),
        accepted,
        health: health.to_owned(),
        sort_order: None,
        created_at: None,
        updated_at: None,
    }
}

fn ids(items: &[FriendItem]) -> Vec<i64> {
    items.iter().map(|f| f.id).collect()
}

fn mixed_response() -> FriendListResponse {
    FriendListResponse {
        friend_list: vec![
            item(1, Acceptance::Accepted, ""),
            item(2, Acceptance::Accepted, "522"),
            item(3, Acceptance::Pending, ""),
            item(4, Acceptance::Rejected, ""),
            item(5, Acceptance::Accepted, ""),
            item(6, Acceptance::Pending, "Unable to connect"),
            item(7, Acceptance::Rejected, "526"),
        ],
        apply_list: None,
    }
}

#[test]
fn group_of_follows_acceptance_then_health() {
    assert_eq!(FriendGroup::of(&item(1, Acceptance::Accepted, "")), FriendGroup::Available);
    assert_eq!(FriendGroup::of(&item(1, Acceptance::Accepted, "x")), FriendGroup::Unavailable);
    assert_eq!(FriendGroup::of(&item(1, Acceptance::Pending, "x")), FriendGroup::Waiting);
    assert_eq!(FriendGroup::of(&item(1, Acceptance::Rejected, "x")), FriendGroup::Rejected);
}

#[test]
fn partition_splits_into_buckets_in_server_order() {
    let groups = FriendGroups::partition(mixed_response());
    assert_eq!(ids(&groups.available), vec![1, 5]);
    assert_eq!(ids(&groups.unavailable), vec![2]);
    assert_eq!(ids(&groups.waiting), vec![3, 6]);
    assert_eq!(ids(&groups.rejected), vec![4, 7]);
}

#[test]
fn partition_places_every_entry_exactly_once() {
    let resp = mixed_response();
    let total = resp.friend_list.len();
    let groups = FriendGroups::partition(resp.clone());
    let buckets = [FriendGroup::Available, FriendGroup::Unavailable, FriendGroup::Waiting, FriendGroup::Rejected];
    let placed: usize = buckets.iter().map(|g| groups.group(*g).len()).sum();
    assert_eq!(placed, total);
    for entry in &resp.friend_list {
        let hits = buckets
            .iter()
            .filter(|g| groups.group(**g).iter().any(|f| f.id == entry.id))
            .count();
        assert_eq!(hits, 1, "entry {} placed {hits} times", entry.id);
        assert!(groups.group(FriendGroup::of(entry)).iter().any(|f| f.id == entry.id));
    }
}

#[test]
fn partition_keeps_apply_out_of_buckets() {
    let resp = FriendListResponse { friend_list: vec![], apply_list: Some(item(9, Acceptance::Pending, "")) };
    let groups = FriendGroups::partition(resp);
    assert!(groups.waiting.is_empty());
    assert_eq!(groups.apply.map(|f| f.id), Some(9));
}

#[test]
fn begin_load_fires_once() {
    let mut state = FriendsState::default();
    assert!(state.begin_load());
    assert!(!state.begin_load());
    assert!(!state.begin_load());
}

#[test]
fn finish_load_success_replaces_groups_and_goes_idle() {
    let mut state = FriendsState::default();
    state.finish_load(Ok(mixed_response()));
    assert_eq!(state.status, LoadStatus::Idle);
    assert_eq!(ids(&state.groups.available), vec![1, 5]);

    state.finish_load(Ok(FriendListResponse::default()));
    assert!(state.groups.available.is_empty());
}

#[test]
fn finish_load_failure_goes_idle_with_empty_groups() {
    let mut state = FriendsState::default();
    state.finish_load(Err("network down".to_owned()));
    assert_eq!(state.status, LoadStatus::Idle);
    assert_eq!(state.groups, FriendGroups::default());
}

#[test]
fn ready_waits_while_loading_with_no_visible_friends() {
    let mut state = FriendsState::default();
    assert!(!state.ready());
    state.groups.waiting.push(item(3, Acceptance::Pending, ""));
    assert!(!state.ready());
    state.groups.unavailable.push(item(2, Acceptance::Accepted, "521"));
    assert!(state.ready());
}

#[test]
fn ready_once_idle_even_when_empty() {
    let mut state = FriendsState::default();
    state.finish_load(Ok(FriendListResponse::default()));
    assert!(state.ready());
}
