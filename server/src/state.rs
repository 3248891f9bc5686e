//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool and the immutable runtime configuration.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;

/// Shared application state. Clone is required by Axum; the pool is
/// internally reference-counted and the config is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self { pool, config: Arc::new(config) }
    }
}
