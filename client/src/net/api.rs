//! REST helpers for the remote friends API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authenticated with
//! the bearer token from `util::auth`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Mutations return `Err` with the server's own error string so pages can
//! show it verbatim. Context loads (profile, config) return `Option` and
//! degrade to anonymous/default state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ClientConfig, FriendListResponse, FriendUpdate, NewFriend, Profile};
#[cfg(feature = "hydrate")]
use super::types::parse_friend_list;

#[cfg(any(test, feature = "hydrate"))]
const FRIEND_PATH: &str = "/friend";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn friend_endpoint(id: i64) -> String {
    format!("{FRIEND_PATH}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Extract the human-readable error from a non-2xx response body.
///
/// Prefers `{"error": "..."}`, then a bare JSON string, then the raw text.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return request_failed_message(status);
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => {
            if let Some(serde_json::Value::String(err)) = map.get("error") {
                return err.clone();
            }
        }
        Ok(serde_json::Value::String(err)) => return err,
        _ => {}
    }
    trimmed.to_owned()
}

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    api_url(crate::util::site::API_URL, path)
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth::authorization_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, String> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

/// Fetch all entries visible to the viewer via `GET /friend`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not match the expected schema.
pub async fn fetch_friends() -> Result<FriendListResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&url(FRIEND_PATH)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp).await?;
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_friend_list(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a new entry via `POST /friend`.
///
/// # Errors
///
/// Returns the server-provided error string on rejection, or the transport
/// error text if the request could not be sent.
pub async fn create_friend(body: &NewFriend) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&url(FRIEND_PATH)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Replace an entry via `PUT /friend/{id}`.
///
/// # Errors
///
/// Returns the server-provided error string on rejection, or the transport
/// error text if the request could not be sent.
pub async fn update_friend(id: i64, body: &FriendUpdate) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(&url(&friend_endpoint(id))))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, body);
        Err("not available on server".to_owned())
    }
}

/// Delete an entry via `DELETE /friend/{id}`.
///
/// # Errors
///
/// Returns the server-provided error string on rejection, or the transport
/// error text if the request could not be sent.
pub async fn delete_friend(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&url(&friend_endpoint(id))))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in viewer from `GET /user/profile`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_profile() -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        crate::util::auth::authorization_header()?;
        let resp = with_auth(gloo_net::http::Request::get(&url("/user/profile")))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch site-wide client flags from `GET /config/client`.
pub async fn fetch_client_config() -> Option<ClientConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url("/config/client"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ClientConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
