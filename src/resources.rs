// ABOUTME: Shared resource container injected into every route handler
// ABOUTME: Holds the database handle and the loaded server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Handlers receive it as `State<Arc<ServerResources>>`; there is no global
/// database handle.
#[derive(Clone)]
pub struct ServerResources {
    /// Store access
    pub database: Arc<Database>,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle a database and configuration
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database: Arc::new(database),
            config: Arc::new(config),
        }
    }
}
