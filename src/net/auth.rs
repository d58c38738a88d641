//! Session provider calls against the backend's auth service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`BackendError::Unavailable`] / `None`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`restore_session`] once on load to resolve the
//! `loading → {anonymous, authenticated}` transition, then keeps the access
//! token alive by refreshing it [`REFRESH_MARGIN_SECS`] before it expires
//! (see [`refresh_delay_ms`]). The auth page calls the sign-in/sign-up
//! functions and the header calls [`sign_out`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::BackendError;
use super::types::{Session, User};
use crate::config::BackendConfig;

/// How long before expiry the access token is refreshed.
pub const REFRESH_MARGIN_SECS: i64 = 60;

/// Current Unix time in seconds.
pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

/// Milliseconds to wait before refreshing `session`.
///
/// `None` when the session carries no expiry, `Some(0)` once the refresh is
/// due. Long waits saturate at `u32::MAX`.
pub fn refresh_delay_ms(session: &Session, now_unix: i64) -> Option<u32> {
    let due_at = session.expires_at?.saturating_sub(REFRESH_MARGIN_SECS);
    let secs = due_at.saturating_sub(now_unix).max(0);
    Some(u32::try_from(secs.saturating_mul(1000)).unwrap_or(u32::MAX))
}

fn auth_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/auth/v1/{path}")
}

fn token_url(base_url: &str, grant_type: &str) -> String {
    auth_url(base_url, &format!("token?grant_type={grant_type}"))
}

fn credentials_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

/// Sign-up answers with a full session when email confirmation is disabled
/// and with a bare user object otherwise.
#[cfg(any(test, feature = "csr"))]
fn parse_signup_response(body: serde_json::Value) -> Option<Session> {
    body.get("access_token")?;
    serde_json::from_value::<Session>(body).ok().map(|s| s.with_expiry(now_unix()))
}

#[cfg(feature = "csr")]
async fn post_auth<T>(config: &BackendConfig, url: &str, body: &serde_json::Value) -> Result<T, BackendError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .header("apikey", &config.anon_key)
        .json(body)
        .map_err(|e| BackendError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| BackendError::Request(e.to_string()))?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(BackendError::from_status(resp.status(), &text));
    }
    resp.json::<T>().await.map_err(|e| BackendError::Decode(e.to_string()))
}

/// Exchange email + password for a session.
///
/// # Errors
///
/// Returns a [`BackendError`] if the request fails or the credentials are rejected.
pub async fn sign_in_with_password(
    config: &BackendConfig,
    email: &str,
    password: &str,
) -> Result<Session, BackendError> {
    #[cfg(feature = "csr")]
    {
        let url = token_url(&config.url, "password");
        let session: Session = post_auth(config, &url, &credentials_body(email, password)).await?;
        Ok(session.with_expiry(now_unix()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token_url(&config.url, "password"), credentials_body(email, password));
        Err(BackendError::Unavailable)
    }
}

/// Register a new account. Returns `Some(session)` when the backend signs
/// the user in immediately, `None` when email confirmation is pending.
///
/// # Errors
///
/// Returns a [`BackendError`] if the request fails or the backend refuses the sign-up.
pub async fn sign_up(config: &BackendConfig, email: &str, password: &str) -> Result<Option<Session>, BackendError> {
    #[cfg(feature = "csr")]
    {
        let url = auth_url(&config.url, "signup");
        let body: serde_json::Value = post_auth(config, &url, &credentials_body(email, password)).await?;
        Ok(parse_signup_response(body))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth_url(&config.url, "signup"), credentials_body(email, password));
        Err(BackendError::Unavailable)
    }
}

/// Trade a refresh token for a new session.
///
/// # Errors
///
/// Returns a [`BackendError`] if the refresh token is expired or revoked.
pub async fn refresh_session(config: &BackendConfig, refresh_token: &str) -> Result<Session, BackendError> {
    #[cfg(feature = "csr")]
    {
        let url = token_url(&config.url, "refresh_token");
        let session: Session = post_auth(config, &url, &serde_json::json!({ "refresh_token": refresh_token })).await?;
        Ok(session.with_expiry(now_unix()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token_url(&config.url, "refresh_token"), refresh_token);
        Err(BackendError::Unavailable)
    }
}

/// Fetch the user an access token belongs to; fails once the token expires.
///
/// # Errors
///
/// Returns a [`BackendError`] if the token is invalid or the request fails.
pub async fn fetch_user(config: &BackendConfig, access_token: &str) -> Result<User, BackendError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&auth_url(&config.url, "user"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(BackendError::from_status(resp.status(), &text));
        }
        resp.json::<User>().await.map_err(|e| BackendError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth_url(&config.url, "user"), access_token);
        Err(BackendError::Unavailable)
    }
}

/// Revoke the session server-side and forget it locally.
pub async fn sign_out(config: &BackendConfig, access_token: &str) {
    #[cfg(feature = "csr")]
    {
        let result = gloo_net::http::Request::post(&auth_url(&config.url, "logout"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await;
        if let Err(e) = result {
            leptos::logging::warn!("sign out request failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth_url(&config.url, "logout"), access_token);
    }
    crate::util::session_store::clear();
}

/// Resolve the stored session, if any, into a live one.
///
/// Validates the stored access token; on failure tries a single refresh.
/// Anything unrecoverable clears the stored session.
pub async fn restore_session(config: &BackendConfig) -> Option<Session> {
    let stored = crate::util::session_store::load()?;

    match fetch_user(config, &stored.access_token).await {
        Ok(user) => {
            let session = Session { user, ..stored };
            crate::util::session_store::save(&session);
            return Some(session);
        }
        Err(e) => leptos::logging::warn!("stored session rejected: {e}"),
    }

    let refreshed = match stored.refresh_token.as_deref() {
        Some(token) => refresh_session(config, token).await,
        None => Err(BackendError::NotAuthenticated),
    };
    match refreshed {
        Ok(session) => {
            crate::util::session_store::save(&session);
            Some(session)
        }
        Err(e) => {
            leptos::logging::warn!("session refresh failed: {e}");
            crate::util::session_store::clear();
            None
        }
    }
}
