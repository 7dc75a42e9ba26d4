//! Reusable UI building blocks shared by pages.
//!
//! DESIGN
//! ======
//! Components here are presentational: they take signals and callbacks and
//! never reach into auth state or storage themselves.

pub mod auth_card;
pub mod form_field;
pub mod loading_screen;
pub mod portfolio_list;
