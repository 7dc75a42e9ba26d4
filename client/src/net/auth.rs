//! Auth flows: validate, call the backend, then write storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these and report the outcome to the app root through
//! callbacks; the root flips the in-memory flag. Storage is always written
//! before the callback fires, so the flag never runs ahead of storage.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures return before any request. Rejections and transport
//! failures leave storage untouched. Logout never fails: the remote call is
//! best-effort and local teardown is unconditional.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::BackendApi;
use super::error::{ApiError, ValidationError};
use super::types::{LoginRequest, Portfolio, SignupRequest, User};
use crate::config::{MIN_PASSWORD_LEN, TOKEN_KEY};
use crate::state::session::{self, Session};
use crate::util::session_store::SessionStore;

/// Signup form contents, confirmation included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SignupForm {
    /// Check the local rules and build the request body.
    ///
    /// # Errors
    ///
    /// `PasswordMismatch` is checked first, then `PasswordTooShort`
    /// (fewer than [`MIN_PASSWORD_LEN`] characters).
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }
}

/// Log in and persist the resulting session.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error; storage is not
/// touched in either case.
pub async fn log_in<A, S>(api: &A, store: &S, req: &LoginRequest) -> Result<Session, ApiError>
where
    A: BackendApi,
    S: SessionStore,
{
    let resp = api.login(req).await.inspect_err(|e| log::warn!("login failed: {e:?}"))?;
    let session = Session::from(resp);
    session.save(store);
    log::info!("signed in as {}", session.user.username);
    Ok(session)
}

/// Validate, sign up and persist the resulting session.
///
/// # Errors
///
/// `ApiError::Invalid` when local validation fails (no request is sent),
/// otherwise as for [`log_in`].
pub async fn sign_up<A, S>(api: &A, store: &S, form: &SignupForm) -> Result<Session, ApiError>
where
    A: BackendApi,
    S: SessionStore,
{
    let req = form.validate()?;
    let resp = api.signup(&req).await.inspect_err(|e| log::warn!("signup failed: {e:?}"))?;
    let session = Session::from(resp);
    session.save(store);
    log::info!("registered {}", session.user.username);
    Ok(session)
}

/// Deliver a settled login/signup result.
///
/// Storage already holds a successful session, so it reaches `signed_in`
/// whether or not the form is still mounted. `form` receives the error text
/// (or `None` on success) only while `mounted`.
pub fn settle_submit(
    result: Result<Session, ApiError>,
    mounted: bool,
    signed_in: impl FnOnce(Session),
    form: impl FnOnce(Option<String>),
) {
    match result {
        Ok(session) => {
            if mounted {
                form(None);
            }
            signed_in(session);
        }
        Err(e) if mounted => form(Some(e.to_string())),
        Err(e) => log::debug!("auth form unmounted; dropping error: {e}"),
    }
}

/// End the session: notify the backend best-effort, then clear storage.
pub async fn log_out<A, S>(api: &A, store: &S)
where
    A: BackendApi,
    S: SessionStore,
{
    match store.get(TOKEN_KEY) {
        Some(token) if !token.is_empty() => {
            if let Err(e) = api.logout(&token).await {
                log::warn!("logout request failed: {e:?}");
            }
        }
        _ => log::debug!("logout without stored token; skipping remote call"),
    }
    Session::clear(store);
}

/// Stored token, or `Unauthorized` (with storage cleared) when there is none.
fn stored_token(store: &impl SessionStore) -> Result<String, ApiError> {
    match store.get(TOKEN_KEY) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => {
            Session::clear(store);
            Err(ApiError::Unauthorized)
        }
    }
}

/// Clear storage when `result` says the token is dead.
fn expire_on_unauthorized<T>(store: &impl SessionStore, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        if e.ends_session() {
            log::info!("session rejected by backend; clearing local session");
            Session::clear(store);
        }
    }
    result
}

/// Re-fetch the profile and overwrite the cached copy.
///
/// # Errors
///
/// `Unauthorized` (storage already cleared) when the token is missing or
/// rejected. Also `Unauthorized`, with storage left alone, when the session
/// was ended or replaced while the request was in flight. Other errors leave
/// the cached profile in place.
pub async fn refresh_profile<A, S>(api: &A, store: &S) -> Result<User, ApiError>
where
    A: BackendApi,
    S: SessionStore,
{
    let token = stored_token(store)?;
    let user = User::from(expire_on_unauthorized(store, api.current_user(&token).await)?);
    if store.get(TOKEN_KEY).as_deref() != Some(token.as_str()) {
        log::debug!("session changed during profile refresh; discarding result");
        return Err(ApiError::Unauthorized);
    }
    session::save_user(store, &user);
    Ok(user)
}

/// Fetch the signed-in user's saved portfolios.
///
/// # Errors
///
/// As for [`refresh_profile`].
pub async fn fetch_portfolios<A, S>(api: &A, store: &S) -> Result<Vec<Portfolio>, ApiError>
where
    A: BackendApi,
    S: SessionStore,
{
    let token = stored_token(store)?;
    expire_on_unauthorized(store, api.portfolios(&token).await)
}
