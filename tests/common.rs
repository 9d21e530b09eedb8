// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, and server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_box`

use anyhow::Result;
use recipe_box::{
    config::ServerConfig,
    database::Database,
    models::{Recipe, RecipeInput},
    resources::ServerResources,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database: in-memory and migrated, with no categories
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::in_memory().await
}

/// Server resources over a fresh in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        ServerConfig::default(),
    )))
}

/// Server resources with the default categories seeded
pub async fn create_seeded_resources() -> Result<Arc<ServerResources>> {
    let resources = create_test_resources().await?;
    resources.database.categories().seed_defaults().await?;
    Ok(resources)
}

/// A valid recipe payload
pub fn sample_input(title: &str) -> RecipeInput {
    RecipeInput::new(
        title,
        vec!["2 cups flour".to_owned(), "1 cup milk".to_owned()],
        "Mix everything and bake for 20 minutes.",
    )
}

/// Insert a recipe directly through the store
pub async fn insert_recipe(database: &Database, title: &str, category: &str) -> Result<Recipe> {
    let mut input = sample_input(title);
    category.clone_into(&mut input.category);
    Ok(database.recipes().create(&input).await?)
}
