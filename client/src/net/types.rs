//! Wire DTOs for the remote friends API.
//!
//! DESIGN
//! ======
//! The remote service is JavaScript-backed, so integer fields may arrive as
//! integer-valued floats and flags may arrive as strings. Deserializers here
//! normalize those shapes once so state and components work on typed values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Review state of a friend entry. Encoded on the wire as `-1`, `0`, `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Acceptance {
    Rejected,
    #[default]
    Pending,
    Accepted,
}

impl Acceptance {
    /// Selector order used by the edit modal.
    pub const ALL: [Acceptance; 3] = [Acceptance::Rejected, Acceptance::Pending, Acceptance::Accepted];

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Acceptance::Rejected => -1,
            Acceptance::Pending => 0,
            Acceptance::Accepted => 1,
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Acceptance::Rejected),
            0 => Some(Acceptance::Pending),
            1 => Some(Acceptance::Accepted),
            _ => None,
        }
    }
}

impl Serialize for Acceptance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for Acceptance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = deserialize_i64_from_number(deserializer)?;
        Acceptance::from_code(code).ok_or_else(|| D::Error::custom(format!("unknown acceptance state {code}")))
    }
}

/// A friend (reciprocal link) entry as returned by `GET /friend`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FriendItem {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Owning user id.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub uid: i64,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub desc: Option<String>,
    pub url: String,
    pub accepted: Acceptance,
    /// Last-seen reachability error; empty when the site is reachable.
    #[serde(default)]
    pub health: String,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub sort_order: Option<i64>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl FriendItem {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.health.is_empty()
    }
}

/// Response body of `GET /friend`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendListResponse {
    #[serde(default)]
    pub friend_list: Vec<FriendItem>,
    /// The viewer's own pending application, if any.
    #[serde(default)]
    pub apply_list: Option<FriendItem>,
}

/// Decode a `GET /friend` body.
///
/// # Errors
///
/// Returns the serde error text, or names the entry when the failure is an
/// unknown review state so the log points at the bad row.
pub fn parse_friend_list(body: &str) -> Result<FriendListResponse, String> {
    let err = match serde_json::from_str::<FriendListResponse>(body) {
        Ok(list) => return Ok(list),
        Err(err) => err,
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Err(err.to_string());
    };
    let entries = value
        .get("friend_list")
        .and_then(serde_json::Value::as_array)
        .into_iter()
        .flatten()
        .chain(value.get("apply_list"));
    for entry in entries {
        if let Some(Ok(code)) = entry.get("accepted").map(number_to_i64)
            && Acceptance::from_code(code).is_none()
        {
            let id = entry.get("id").map_or_else(|| "?".to_owned(), ToString::to_string);
            return Err(format!("friend {id}: unknown acceptance state {code}"));
        }
    }
    Err(err.to_string())
}

/// Request body of `POST /friend`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewFriend {
    pub avatar: String,
    pub name: String,
    pub desc: String,
    pub url: String,
}

/// Request body of `PUT /friend/{id}`. Replaces the full record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FriendUpdate {
    pub avatar: String,
    pub name: String,
    pub desc: String,
    pub url: String,
    pub accepted: Acceptance,
    pub sort_order: i64,
}

/// The signed-in viewer as returned by `GET /user/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Privileged viewers may manage every entry.
    #[serde(default)]
    pub permission: bool,
}

/// Site-wide client configuration served by `GET /config/client`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub friend_apply_enable: bool,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Number(number) => Ok(number.as_i64().is_some_and(|n| n != 0)),
        serde_json::Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid flag value '{other}'"))),
        },
        _ => Err(D::Error::custom("expected boolean flag")),
    }
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => number_to_i64(&value).map(Some).map_err(D::Error::custom),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_to_i64(&value).map_err(D::Error::custom)
}

fn number_to_i64(value: &serde_json::Value) -> Result<i64, &'static str> {
    let serde_json::Value::Number(number) = value else {
        return Err("expected number");
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err("expected integer-compatible number")
}
