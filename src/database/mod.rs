// ABOUTME: SQLite connection pool ownership, schema migration, and readiness probe
// ABOUTME: Exposes the recipe and category managers built over the shared pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! A [`Database`] owns the `SQLite` pool. It is created once at startup and
//! injected into request handlers through [`crate::resources::ServerResources`].

mod categories;
mod recipes;

pub use categories::{CategoriesManager, CATEGORY_IN_USE};
pub use recipes::RecipesManager;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

/// Database handle shared by all request handlers
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the configured database and run migrations
    ///
    /// File databases are created if missing. An in-memory database is held
    /// on a single pooled connection so every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .with_context(|| format!("Invalid database URL: {}", config.url))?
            .create_if_missing(true);

        if let DatabaseUrl::SQLite { path } = &config.url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {}", config.url))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(url = %config.url, "Database ready");
        Ok(db)
    }

    /// Shortcut for an isolated in-memory database
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig {
            url: DatabaseUrl::Memory,
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Recipe operations over this pool
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }

    /// Category operations over this pool
    #[must_use]
    pub fn categories(&self) -> CategoriesManager {
        CategoriesManager::new(self.pool.clone())
    }

    /// Create the `recipes` and `categories` tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                ingredients TEXT NOT NULL DEFAULT '[]',
                directions TEXT NOT NULL,
                image_url TEXT,
                cook_time INTEGER,
                servings INTEGER,
                category TEXT NOT NULL DEFAULT 'other',
                is_favorite INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create recipes table")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at)")
            .execute(&self.pool)
            .await
            .context("Failed to create recipes index")?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS categories (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create categories table")?;

        debug!("Database migrations applied");
        Ok(())
    }

    /// Trivial read used by the readiness probe; returns the recipe count
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the store cannot be queried
    pub async fn ping(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::unavailable("Database unavailable").with_source(e))?;
        Ok(row.get("count"))
    }
}

/// Fixed-width RFC 3339 timestamp so lexical order matches chronological order
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored RFC 3339 timestamp
pub(crate) fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal("Internal server error").with_source(e))
}
