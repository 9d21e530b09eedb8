// ABOUTME: Database configuration types for SQLite file and in-memory connections
// ABOUTME: Parses DATABASE_URL into a typed location and renders sqlx connection strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_keys, limits};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; anything without a `sqlite:` prefix is treated as a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DEFAULT_DATABASE_URL)
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Maximum pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: limits::DEFAULT_MAX_DB_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Load database configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            url: env::var(env_keys::DATABASE_URL)
                .map(|url| DatabaseUrl::parse_url(&url))
                .unwrap_or_default(),
            max_connections: limits::DEFAULT_MAX_DB_CONNECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_url() {
        assert_eq!(DatabaseUrl::parse_url("sqlite::memory:"), DatabaseUrl::Memory);
        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());
    }

    #[test]
    fn test_parse_file_url_round_trips() {
        let url = DatabaseUrl::parse_url("sqlite:./data/recipes.db");
        assert_eq!(
            url,
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/recipes.db")
            }
        );
        assert_eq!(url.to_connection_string(), "sqlite:./data/recipes.db");
    }

    #[test]
    fn test_bare_path_treated_as_sqlite_file() {
        let url = DatabaseUrl::parse_url("/var/lib/recipes.db");
        assert_eq!(url.to_string(), "sqlite:/var/lib/recipes.db");
    }
}
