//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One module per route: `/login` and the guarded `/` dashboard.

pub mod dashboard;
pub mod login;
