// ABOUTME: System-wide constants and environment-based defaults for Recipe Box
// ABOUTME: Ports, database location, limits, and service identity used by config and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults plus the environment variable names that override them.

/// Service identity used in logs and health payloads
pub mod service_names {
    /// Server binary service name
    pub const RECIPE_BOX_SERVER: &str = "recipe-box-server";
    /// Terminal client name
    pub const RECIPE_CLI: &str = "recipe-cli";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port for the API server
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
}

/// Defaults applied when an environment variable is unset
pub mod defaults {
    /// Default `SQLite` database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Default CORS origin policy (any origin)
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
    /// Default base URL used by the terminal client
    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8081";
}

/// Request limits
pub mod limits {
    /// Default per-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default request body limit; image references may be inline-encoded
    pub const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;
    /// Maximum pooled store connections
    pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;
}

/// Environment variable names
pub mod env_keys {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind host
    pub const HOST: &str = "HOST";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Comma-separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Whether to seed default categories at startup
    pub const SEED_DEFAULT_CATEGORIES: &str = "SEED_DEFAULT_CATEGORIES";
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Request body limit
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
    /// Client base URL
    pub const RECIPE_API_URL: &str = "RECIPE_API_URL";
}
