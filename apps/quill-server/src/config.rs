//! Application configuration, read once at startup.
//!
//! Nothing else in the process reads the environment: the resulting
//! [`AppConfig`] is handed to the components that need it.

use std::env;

use quill_infra::auth::DEFAULT_SECRET;
use quill_infra::{DatabaseConfig, JwtConfig};

use crate::telemetry::TelemetryConfig;

/// Accepted range for `SESSION_HOURS`; anything else falls back to the default.
const SESSION_HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;
const DEFAULT_SESSION_HOURS: i64 = 24;

/// Where posts are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    /// Process-local storage, lost on restart. For demos and local work.
    Memory,
}

/// Owner credentials and session signing settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub jwt: JwtConfig,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: Storage,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let string_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());
        let parsed_or = |key: &str, default: u32| {
            get(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let mut database = match get("DATABASE_URL") {
            Some(url) => DatabaseConfig {
                url,
                max_connections: 10,
                min_connections: 1,
            },
            None => DatabaseConfig::from_parts(
                &string_or("DB_HOST", "localhost"),
                get("DB_PORT")
                    .and_then(|p| p.trim().parse().ok())
                    .unwrap_or(5432),
                &string_or("DB_USER", "postgres"),
                &string_or("DB_PASSWORD", "postgres"),
                &string_or("DB_NAME", "blog"),
            ),
        };
        database.max_connections = parsed_or("DB_MAX_CONNECTIONS", database.max_connections);
        database.min_connections = parsed_or("DB_MIN_CONNECTIONS", database.min_connections);

        let storage = match get("STORAGE").map(|s| s.to_lowercase()).as_deref() {
            Some("memory") => Storage::Memory,
            _ => Storage::Postgres,
        };

        let auth = AuthConfig {
            admin_username: string_or("ADMIN_USER", "admin"),
            admin_password: string_or("ADMIN_PASSWORD", "password"),
            jwt: JwtConfig {
                secret: string_or("JWT_SECRET", DEFAULT_SECRET),
                expiration_hours: get("SESSION_HOURS")
                    .and_then(|v| v.trim().parse::<i64>().ok())
                    .filter(|hours| SESSION_HOURS_RANGE.contains(hours))
                    .unwrap_or(DEFAULT_SESSION_HOURS),
            },
        };

        let telemetry = TelemetryConfig {
            json_logs: get("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            service_name: string_or("SERVICE_NAME", "quill"),
            production: get("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false),
        };

        Self {
            host: string_or("HOST", "0.0.0.0"),
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8081),
            storage,
            database,
            auth,
            telemetry,
        }
    }

    /// Log loudly about defaults that must not reach production.
    pub fn warn_on_insecure_defaults(&self) {
        if self.auth.jwt.secret == DEFAULT_SECRET {
            if self.telemetry.production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        if self.auth.admin_password == "password" {
            tracing::warn!("Using default admin password. Set ADMIN_PASSWORD.");
        }
    }
}
