use super::*;

fn friend_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "uid": 2,
        "name": "Example",
        "avatar": "https://example.com/a.png",
        "desc": null,
        "url": "https://example.com",
        "accepted": 1,
        "health": "",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-02T00:00:00.000Z"
    })
}

#[test]
fn friend_item_parses_wire_shape() {
    let item: FriendItem = serde_json::from_value(friend_json()).unwrap();
    assert_eq!(item.id, 7);
    assert_eq!(item.uid, 2);
    assert_eq!(item.desc, None);
    assert_eq!(item.accepted, Acceptance::Accepted);
    assert_eq!(item.sort_order, None);
    assert_eq!(item.created_at.as_deref(), Some("2024-01-01T00:00:00.000Z"));
    assert!(item.is_healthy());
}

#[test]
fn friend_item_accepts_integer_valued_floats() {
    let mut raw = friend_json();
    raw["id"] = serde_json::json!(7.0);
    raw["accepted"] = serde_json::json!(-1.0);
    raw["sort_order"] = serde_json::json!(3.0);
    let item: FriendItem = serde_json::from_value(raw).unwrap();
    assert_eq!(item.id, 7);
    assert_eq!(item.accepted, Acceptance::Rejected);
    assert_eq!(item.sort_order, Some(3));
}

#[test]
fn friend_item_missing_health_is_healthy() {
    let mut raw = friend_json();
    raw.as_object_mut().unwrap().remove("health");
    let item: FriendItem = serde_json::from_value(raw).unwrap();
    assert!(item.is_healthy());
}

#[test]
fn friend_item_rejects_unknown_acceptance() {
    let mut raw = friend_json();
    raw["accepted"] = serde_json::json!(2);
    assert!(serde_json::from_value::<FriendItem>(raw).is_err());
}

#[test]
fn friend_item_rejects_fractional_id() {
    let mut raw = friend_json();
    raw["id"] = serde_json::json!(1.5);
    assert!(serde_json::from_value::<FriendItem>(raw).is_err());
}

#[test]
fn list_response_defaults_missing_fields() {
    let resp: FriendListResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.friend_list.is_empty());
    assert!(resp.apply_list.is_none());
}

#[test]
fn list_response_reads_apply_list() {
    let resp: FriendListResponse =
        serde_json::from_value(serde_json::json!({ "friend_list": [], "apply_list": friend_json() })).unwrap();
    assert_eq!(resp.apply_list.map(|f| f.id), Some(7));
}

#[test]
fn friend_update_serializes_acceptance_as_code() {
    let body = FriendUpdate {
        avatar: "a".to_owned(),
        name: "n".to_owned(),
        desc: String::new(),
        url: "u".to_owned(),
        accepted: Acceptance::Rejected,
        sort_order: 5,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "avatar": "a",
            "name": "n",
            "desc": "",
            "url": "u",
            "accepted": -1,
            "sort_order": 5
        })
    );
}

#[test]
fn acceptance_codes_match_selector_order() {
    let codes: Vec<i32> = Acceptance::ALL.iter().map(|a| a.code()).collect();
    assert_eq!(codes, vec![-1, 0, 1]);
    assert_eq!(Acceptance::from_code(3), None);
}

#[test]
fn profile_defaults_permission_to_false() {
    let profile: Profile = serde_json::from_value(serde_json::json!({ "id": 3, "username": "bob" })).unwrap();
    assert!(!profile.permission);
    assert_eq!(profile.avatar, None);
}

#[test]
fn client_config_flag_accepts_bool_and_strings() {
    let on: ClientConfig = serde_json::from_value(serde_json::json!({ "friend_apply_enable": true })).unwrap();
    assert!(on.friend_apply_enable);
    let on_str: ClientConfig = serde_json::from_value(serde_json::json!({ "friend_apply_enable": "true" })).unwrap();
    assert!(on_str.friend_apply_enable);
    let off_str: ClientConfig = serde_json::from_value(serde_json::json!({ "friend_apply_enable": "0" })).unwrap();
    assert!(!off_str.friend_apply_enable);
    let absent: ClientConfig = serde_json::from_str("{}").unwrap();
    assert!(!absent.friend_apply_enable);
}

#[test]
fn client_config_flag_rejects_garbage() {
    assert!(serde_json::from_value::<ClientConfig>(serde_json::json!({ "friend_apply_enable": "maybe" })).is_err());
}

#[test]
fn friend_list_parse_names_entry_with_unknown_acceptance() {
    let mut bad = friend_json();
    bad["id"] = serde_json::json!(9);
    bad["accepted"] = serde_json::json!(3);
    let body = serde_json::json!({ "friend_list": [friend_json(), bad] }).to_string();

    let err = parse_friend_list(&body).unwrap_err();
    assert_eq!(err, "friend 9: unknown acceptance state 3");
}

#[test]
fn friend_list_parse_checks_own_application() {
    let mut bad = friend_json();
    bad["accepted"] = serde_json::json!(-2.0);
    let body = serde_json::json!({ "friend_list": [], "apply_list": bad }).to_string();

    let err = parse_friend_list(&body).unwrap_err();
    assert!(err.ends_with("unknown acceptance state -2"), "{err}");
}

#[test]
fn friend_list_parse_passes_through_other_errors() {
    let err = parse_friend_list("{\"friend_list\": 5}").unwrap_err();
    assert!(!err.starts_with("friend "), "{err}");
    let ok = parse_friend_list(&serde_json::json!({ "friend_list": [friend_json()] }).to_string()).unwrap();
    assert_eq!(ok.friend_list.len(), 1);
}
