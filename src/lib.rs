// ABOUTME: Main library entry point for the Recipe Box recipe management service
// ABOUTME: Provides the JSON HTTP API, its SQLite store, a client facade, and a terminal view layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Box
//!
//! A small recipe manager: recipes with ingredients, directions, cook time,
//! servings, a category, and a favorite flag, plus user-managed categories.
//!
//! ## Architecture
//!
//! - **Database**: `SQLite` store accessed through `RecipesManager` and `CategoriesManager`
//! - **Routes**: axum handlers for `/api/recipes` and `/api/categories`
//! - **Client**: typed `reqwest` facade over the same endpoints
//! - **View**: pure search, page, and render functions used by `recipe-cli`
//! - **Config**: environment-only server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_box::{config::ServerConfig, database::Database, resources::ServerResources, server};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database).await?;
//!     server::serve(Arc::new(ServerResources::new(database, config))).await
//! }
//! ```

/// HTTP client facade for the recipe API
pub mod client;

/// Environment-based configuration
pub mod config;

/// Defaults and environment variable names
pub mod constants;

/// `SQLite` store and resource managers
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Recipe and category models
pub mod models;

/// Shared handler state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server lifecycle
pub mod server;

/// Terminal view layer
pub mod view;
