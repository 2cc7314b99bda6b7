//! REST API helpers for communicating with the submissions backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. The auth probe is
//! the only call whose failure forces a login redirect; every other failure
//! is the caller's to log and swallow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AppInfo, Submission};
use crate::state::session::AuthContext;

#[cfg(any(test, feature = "hydrate"))]
fn submissions_endpoint(selector: &str) -> String {
    format!("/api/get/selector/{selector}")
}

#[cfg(any(test, feature = "hydrate"))]
fn selector_action_endpoint(action: &str, selector: &str) -> String {
    format!("/api/{action}/selector/{selector}")
}

#[cfg(any(test, feature = "hydrate"))]
fn id_action_endpoint(action: &str, id: u64) -> String {
    format!("/api/{action}/id/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_probe_failed_message(status: u16) -> String {
    format!("auth probe failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_request_failed_message(status: u16) -> String {
    format!("list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn action_failed_message(action: &str, status: u16) -> String {
    format!("{action} request failed: {status}")
}

/// Attach the `Authorization` header held by `auth`, when present.
#[cfg(feature = "hydrate")]
fn with_auth(
    request: gloo_net::http::RequestBuilder,
    auth: &AuthContext,
) -> gloo_net::http::RequestBuilder {
    match auth.header() {
        Some(value) => request.header("Authorization", value),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
async fn post_action(auth: &AuthContext, action: &str, url: &str) -> Result<(), String> {
    let resp = with_auth(gloo_net::http::Request::post(url), auth)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(action_failed_message(action, resp.status()));
    }
    Ok(())
}

/// Validate the credential in `auth` against `GET /api/auth`.
///
/// # Errors
///
/// Returns an error string when the request fails to send or the backend
/// rejects the credential.
pub async fn probe_auth(auth: &AuthContext) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/auth"), auth)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(auth_probe_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err("not available on server".to_owned())
    }
}

/// Fetch application metadata from `GET /api/info`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_info() -> Option<AppInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/info").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let envelope = resp.json::<super::types::Envelope<AppInfo>>().await.ok()?;
        Some(envelope.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the full submission list for `selector`.
///
/// # Errors
///
/// Returns an error string when the request fails to send, the backend
/// responds with a non-OK status, or the envelope does not decode.
pub async fn fetch_submissions(
    auth: &AuthContext,
    selector: &str,
) -> Result<Vec<Submission>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = submissions_endpoint(selector);
        let resp = with_auth(gloo_net::http::Request::get(&url), auth)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_request_failed_message(resp.status()));
        }
        let envelope = resp
            .json::<super::types::Envelope<super::types::SubmissionList>>()
            .await
            .map_err(|e| e.to_string())?;
        Ok(envelope.result.submissions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, selector);
        Err("not available on server".to_owned())
    }
}

/// Delete every submission in `selector` via `POST /api/delete/selector/{selector}`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn delete_submissions(auth: &AuthContext, selector: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_action(auth, "delete", &selector_action_endpoint("delete", selector)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, selector);
        Err("not available on server".to_owned())
    }
}

/// Delete one submission via `POST /api/delete/id/{id}`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn delete_submission(auth: &AuthContext, id: u64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_action(auth, "delete", &id_action_endpoint("delete", id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, id);
        Err("not available on server".to_owned())
    }
}

/// Archive every submission in `selector` via `POST /api/archive/selector/{selector}`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn archive_submissions(auth: &AuthContext, selector: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_action(auth, "archive", &selector_action_endpoint("archive", selector)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, selector);
        Err("not available on server".to_owned())
    }
}

/// Archive one submission via `POST /api/archive/id/{id}`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn archive_submission(auth: &AuthContext, id: u64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_action(auth, "archive", &id_action_endpoint("archive", id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, id);
        Err("not available on server".to_owned())
    }
}

/// Unarchive one submission via `POST /api/unarchive/id/{id}`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn unarchive_submission(auth: &AuthContext, id: u64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_action(auth, "unarchive", &id_action_endpoint("unarchive", id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, id);
        Err("not available on server".to_owned())
    }
}

/// Submit a text response for one submission via `POST /api/respond/id/{id}`
/// with body `{"text": ...}`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn respond(auth: &AuthContext, id: u64, text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = id_action_endpoint("respond", id);
        let payload = serde_json::json!({ "text": text });
        let resp = with_auth(gloo_net::http::Request::post(&url), auth)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(action_failed_message("respond", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, id, text);
        Err("not available on server".to_owned())
    }
}
