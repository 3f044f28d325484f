//! REST calls to the external auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since signing in is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), String>` where the error is already the text to
//! show the user: the service's own `message` when it sent one, otherwise
//! a status-derived fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
use super::types::Credentials;

/// Base URL for the auth service, baked in at compile time via
/// `API_BASE_URL`. Empty means same-origin relative paths.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint() -> String {
    format!("{}/auth/signup", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{}/auth/login", api_base())
}

/// Pick the display message for a rejected auth response: the service's
/// `message` when the body carries one, otherwise a status fallback.
#[cfg(any(test, feature = "hydrate"))]
fn auth_failed_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("authentication failed: {status}"))
}

/// Create an account via `POST {base}/auth/signup`.
///
/// # Errors
///
/// Returns the display-ready message when the request fails or the service
/// rejects the credentials.
pub async fn signup(credentials: &Credentials) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(&signup_endpoint(), credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Start a session via `POST {base}/auth/login`.
///
/// # Errors
///
/// Returns the display-ready message when the request fails or the service
/// rejects the credentials.
pub async fn login(credentials: &Credentials) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(&login_endpoint(), credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// POST the credential body and map any non-OK response to its display
/// message. Success bodies are ignored; the session rides on cookies.
#[cfg(feature = "hydrate")]
async fn post_credentials(url: &str, credentials: &Credentials) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .json(credentials)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("auth request to {url} failed: {status}");
        return Err(auth_failed_message(status, &body));
    }
    Ok(())
}
