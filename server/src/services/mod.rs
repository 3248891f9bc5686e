//! Domain services behind the HTTP handlers.

pub mod auth;
pub mod seed;
pub mod token;
