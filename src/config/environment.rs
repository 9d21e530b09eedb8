// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, database location, CORS, limits, and seeding flags from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the Recipe Box server

use super::database::DatabaseConfig;
use crate::constants::{defaults, env_keys, limits, ports};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::DEFAULT_CORS_ORIGINS.to_owned(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Insert the default category list at startup
    pub seed_default_categories: bool,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ports::DEFAULT_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
            seed_default_categories: true,
            request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_body_bytes: limits::DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparseable value
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            host: env_var_or(env_keys::HOST, ports::DEFAULT_HOST),
            http_port: parse_env(env_keys::HTTP_PORT, ports::DEFAULT_HTTP_PORT)?,
            database: DatabaseConfig::from_env(),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    defaults::DEFAULT_CORS_ORIGINS,
                ),
            },
            seed_default_categories: parse_env(env_keys::SEED_DEFAULT_CATEGORIES, true)?,
            request_timeout_secs: parse_env(
                env_keys::REQUEST_TIMEOUT_SECS,
                limits::DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            max_body_bytes: parse_env(env_keys::MAX_BODY_BYTES, limits::DEFAULT_MAX_BODY_BYTES)?,
        })
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Box Server Configuration:\n\
             - Bind: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Seed Default Categories: {}\n\
             - Request Timeout: {}s\n\
             - Max Body: {} bytes",
            self.bind_address(),
            self.database.url,
            self.cors.allowed_origins,
            self.seed_default_categories,
            self.request_timeout_secs,
            self.max_body_bytes,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::DatabaseUrl;
    use serial_test::serial;

    const KEYS: &[&str] = &[
        env_keys::HOST,
        env_keys::HTTP_PORT,
        env_keys::DATABASE_URL,
        env_keys::CORS_ALLOWED_ORIGINS,
        env_keys::SEED_DEFAULT_CATEGORIES,
        env_keys::REQUEST_TIMEOUT_SECS,
        env_keys::MAX_BODY_BYTES,
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 8081);
        assert_eq!(config.bind_address(), "127.0.0.1:8081");
        assert_eq!(config.cors.allowed_origins, "*");
        assert!(config.seed_default_categories);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        clear_env();
        env::set_var(env_keys::HTTP_PORT, "9090");
        env::set_var(env_keys::DATABASE_URL, "sqlite::memory:");
        env::set_var(env_keys::SEED_DEFAULT_CATEGORIES, "false");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.database.url, DatabaseUrl::Memory);
        assert!(!config.seed_default_categories);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        env::set_var(env_keys::HTTP_PORT, "eighty");
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));
        clear_env();
    }
}
