//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is what lives in storage; `auth` is the in-memory view of it
//! that drives routing. `portfolios` backs the dashboard list.

pub mod auth;
pub mod portfolios;
pub mod session;
