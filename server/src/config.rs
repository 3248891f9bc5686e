//! Application settings loaded from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup reads everything once into a `Config` held by `AppState`;
//! handlers never touch the environment for token or CORS settings.
//! A `.env` file is honored via `dotenvy` before this module runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SECRET_KEY: &str = "your-secret-key-change-in-production";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: u64 = 30;
const DEFAULT_REFRESH_TOKEN_EXPIRE_DAYS: u64 = 14;

/// Server settings, env-driven with defaults for everything except the
/// database URL.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub secret_key: String,
    pub access_token_expire_minutes: u64,
    pub refresh_token_expire_days: u64,
    pub cors_origin: String,
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

pub(crate) fn env_u64_or(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

pub(crate) fn env_port_or(key: &str, default: u16) -> u16 {
    u16::try_from(env_u64_or(key, u64::from(default))).unwrap_or(default)
}

impl Config {
    /// Load settings from the environment. Only `DATABASE_URL` is
    /// required.
    ///
    /// # Errors
    ///
    /// Returns an error message if `DATABASE_URL` is unset.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL required".to_owned())?;

        let secret_key = env_or("SECRET_KEY", DEFAULT_SECRET_KEY);
        if secret_key == DEFAULT_SECRET_KEY {
            tracing::warn!("SECRET_KEY not set; using the insecure default");
        }

        Ok(Self {
            database_url,
            port: env_port_or("PORT", DEFAULT_PORT),
            secret_key,
            access_token_expire_minutes: env_u64_or(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            ),
            refresh_token_expire_days: env_u64_or(
                "REFRESH_TOKEN_EXPIRE_DAYS",
                DEFAULT_REFRESH_TOKEN_EXPIRE_DAYS,
            ),
            cors_origin: env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
        })
    }

    /// Access-token lifetime in seconds.
    #[must_use]
    pub fn access_token_ttl_secs(&self) -> u64 {
        self.access_token_expire_minutes * 60
    }

    /// Refresh-token lifetime in seconds.
    #[must_use]
    pub fn refresh_token_ttl_secs(&self) -> u64 {
        self.refresh_token_expire_days * 24 * 60 * 60
    }
}
