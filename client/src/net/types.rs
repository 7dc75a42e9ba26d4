//! Wire DTOs for the auth and portfolio REST endpoints.
//!
//! DESIGN
//! ======
//! Request types serialize exactly the bodies the backend accepts; response
//! types are lenient about optional profile fields so older accounts without
//! names still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Cached user profile, stored as JSON under the `user` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// "First Last" when either name is set, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// `POST /api/auth/login/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/signup/` body. The confirmation field never leaves the
/// client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Success body shared by login and signup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl AuthResponse {
    pub fn user(&self) -> User {
        User {
            id: self.user_id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// `GET /api/auth/user/` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl From<UserInfo> for User {
    fn from(info: UserInfo) -> Self {
        Self {
            id: info.user_id,
            username: info.username,
            email: info.email,
            first_name: info.first_name,
            last_name: info.last_name,
        }
    }
}

/// Failure body: `{"error": "..."}`. Other shapes decode to `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// A saved portfolio as listed by `GET /api/portfolios/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sectors: Option<Vec<String>>,
    #[serde(default)]
    pub commodities: Option<Vec<String>>,
    /// Raw generation payload; rendered elsewhere, carried as-is.
    #[serde(default)]
    pub result: serde_json::Value,
    pub created_at: String,
    pub updated_at: String,
}

impl Portfolio {
    /// Label for list rows: the saved name, or `Portfolio <id>`.
    pub fn label(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() { format!("Portfolio {}", self.id) } else { name.to_owned() }
    }

    /// Calendar date part of `created_at` (`YYYY-MM-DD`), or the raw value.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}
