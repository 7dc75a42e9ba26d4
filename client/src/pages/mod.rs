//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form or fetch orchestration and reports session changes
//! upward through callbacks; rendering details live in `components`.

pub mod dashboard;
pub mod login;
pub mod signup;
