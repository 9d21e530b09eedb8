// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration: server, database, CORS, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Recipe Box server
//!
//! All settings come from environment variables; there is no config file.

/// Database location and pool settings
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, ServerConfig};
