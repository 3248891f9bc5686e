//! Networking layer for the scheduler REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire DTOs shared
//! with the server's auth endpoints.

pub mod api;
pub mod types;
