//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no runtime environment, so the backend base URL is
//! fixed at build time. `FOLIO_API_BASE` overrides the local default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when no override is baked into the build.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// `localStorage` key holding the opaque auth token.
pub const TOKEN_KEY: &str = "token";

/// `localStorage` key holding the serialized user profile.
pub const USER_KEY: &str = "user";

/// Minimum signup password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Backend base URL without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("FOLIO_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
