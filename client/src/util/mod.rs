//! Shared route-level utilities.

pub mod guard;
