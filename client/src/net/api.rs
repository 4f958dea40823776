//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser. The session cookie rides along on
//! every same-origin request.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Error strings
//! prefer the server's `{"error": ...}` message and fall back to the status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdminUserRow, Stuff, StuffDraft, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

#[cfg(any(test, feature = "hydrate"))]
fn stuff_item_endpoint(id: &str) -> String {
    format!("/api/stuff/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: Option<ErrorBody>) -> String {
    match body {
        Some(body) if !body.error.is_empty() => body.error,
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn failure_from(resp: gloo_net::http::Response, action: &str) -> String {
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.ok();
    failure_message(action, status, body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    action: &str,
) -> Result<T, String> {
    if !resp.ok() {
        return Err(failure_from(resp, action).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn expect_empty(resp: gloo_net::http::Response, action: &str) -> Result<(), String> {
    if !resp.ok() {
        return Err(failure_from(resp, action).await);
    }
    Ok(())
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the current session user from `/api/auth/session`.
/// Returns `None` if not signed in or on the server.
pub async fn fetch_session() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/signin`; the server sets the session cookie.
///
/// # Errors
///
/// Returns the server's message for rejected credentials or transport errors.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/signin")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "sign in").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        unavailable()
    }
}

/// Register via `POST /api/auth/signup`; the new account is signed in.
///
/// # Errors
///
/// Returns the server's message for invalid input, taken emails, or transport errors.
pub async fn sign_up(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "sign up").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        unavailable()
    }
}

/// End the session via `POST /api/auth/signout`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_empty(resp, "sign out").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Rotate the password via `POST /api/auth/change-password`.
///
/// # Errors
///
/// Returns the server's message when the old password is wrong or the new one is rejected.
pub async fn change_password(old_password: &str, password: &str, confirm_password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "old_password": old_password,
            "password": password,
            "confirm_password": confirm_password,
        });
        let resp = gloo_net::http::Request::post("/api/auth/change-password")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_empty(resp, "change password").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (old_password, password, confirm_password);
        unavailable()
    }
}

// =============================================================================
// STUFF
// =============================================================================

/// Fetch the signed-in user's records from `GET /api/stuff`.
///
/// # Errors
///
/// Returns an error string on a non-OK status or transport failure.
pub async fn fetch_stuff() -> Result<Vec<Stuff>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/stuff")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "list stuff").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Fetch one owned record from `GET /api/stuff/{id}`.
///
/// # Errors
///
/// Returns an error string if the record is missing or not owned by the caller.
pub async fn fetch_stuff_item(id: &str) -> Result<Stuff, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&stuff_item_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "load stuff").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        unavailable()
    }
}

/// Create a record via `POST /api/stuff`.
///
/// # Errors
///
/// Returns the server's validation message or a transport error.
pub async fn create_stuff(draft: &StuffDraft) -> Result<Stuff, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/stuff")
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "add stuff").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        unavailable()
    }
}

/// Replace a record via `PUT /api/stuff/{id}`.
///
/// # Errors
///
/// Returns the server's validation message or a transport error.
pub async fn update_stuff(id: &str, draft: &StuffDraft) -> Result<Stuff, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&stuff_item_endpoint(id))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "update stuff").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        unavailable()
    }
}

/// Delete a record via `DELETE /api/stuff/{id}`.
///
/// # Errors
///
/// Returns an error string if the record is missing or the request fails.
pub async fn delete_stuff(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&stuff_item_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_empty(resp, "delete stuff").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        unavailable()
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// Fetch every record from `GET /api/admin/stuff`.
///
/// # Errors
///
/// Returns an error string when the caller is not an admin.
pub async fn fetch_admin_stuff() -> Result<Vec<Stuff>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/stuff")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "list all stuff").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Fetch every account from `GET /api/admin/users`.
///
/// # Errors
///
/// Returns an error string when the caller is not an admin.
pub async fn fetch_admin_users() -> Result<Vec<AdminUserRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/users")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "list users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}
