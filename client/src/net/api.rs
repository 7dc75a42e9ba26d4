//! REST API client for the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Response classification lives in plain functions (`decode_auth`,
//! `decode_authed`) so the mapping from status + body to `ApiError` is
//! testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{AuthResponse, LoginRequest, Portfolio, SignupRequest, UserInfo};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::config;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const SIGNUP_PATH: &str = "/api/auth/signup/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";
pub const USER_PATH: &str = "/api/auth/user/";
pub const PORTFOLIOS_PATH: &str = "/api/portfolios/";

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";

/// Backend operations the views depend on.
///
/// Implemented over HTTP by [`HttpApi`]; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait BackendApi {
    /// Exchange credentials for a token and profile.
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Create an account; succeeds with the same shape as `login`.
    async fn signup(&self, req: &SignupRequest) -> Result<AuthResponse, ApiError>;

    /// Invalidate `token` on the server.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    /// Fetch the profile behind `token`.
    async fn current_user(&self, token: &str) -> Result<UserInfo, ApiError>;

    /// List the portfolios saved by the user behind `token`, newest first.
    async fn portfolios(&self, token: &str) -> Result<Vec<Portfolio>, ApiError>;
}

/// `BackendApi` over `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base.trim_end_matches('/'))
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::api_base())
    }
}

/// `Authorization` header value for token auth.
pub fn token_header(token: &str) -> String {
    format!("Token {token}")
}

/// Message for a rejected request: the server's `error` field, or `fallback`.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Classify a login/signup response.
#[cfg(any(test, feature = "hydrate"))]
fn decode_auth(ok: bool, status: u16, body: &str, fallback: &str) -> Result<AuthResponse, ApiError> {
    if !ok {
        return Err(ApiError::Rejected { status, message: rejection_message(body, fallback) });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Classify a response to a token-authenticated request. 401 means the
/// token is dead and maps to `Unauthorized`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_authed<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !ok {
        let fallback = format!("request failed: {status}");
        return Err(ApiError::Rejected { status, message: rejection_message(body, &fallback) });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn read(resp: gloo_net::http::Response) -> Result<(bool, u16, String), ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    Ok((ok, status, body))
}

#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(url: &str, body: &B, fallback: &str) -> Result<AuthResponse, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let (ok, status, text) = read(resp).await?;
    decode_auth(ok, status, &text, fallback)
}

#[cfg(feature = "hydrate")]
async fn get_authed<T: DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &token_header(token))
        .send()
        .await
        .map_err(network)?;
    let (ok, status, text) = read(resp).await?;
    decode_authed(ok, status, &text)
}

impl BackendApi for HttpApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_auth(&self.url(LOGIN_PATH), req, LOGIN_FAILED).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, req: &SignupRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_auth(&self.url(SIGNUP_PATH), req, SIGNUP_FAILED).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(LOGOUT_PATH))
                .header("Authorization", &token_header(token))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(ApiError::Rejected {
                    status: resp.status(),
                    message: format!("logout failed: {}", resp.status()),
                });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn current_user(&self, token: &str) -> Result<UserInfo, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_authed(&self.url(USER_PATH), token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn portfolios(&self, token: &str) -> Result<Vec<Portfolio>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_authed(&self.url(PORTFOLIOS_PATH), token).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
