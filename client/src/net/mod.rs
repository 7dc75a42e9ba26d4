//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `auth` sequences them with session storage,
//! `types` defines the wire schema and `error` the failure taxonomy.

pub mod api;
pub mod auth;
pub mod error;
pub mod types;
