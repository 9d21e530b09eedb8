// ABOUTME: Route module organization for the Recipe Box HTTP endpoints
// ABOUTME: Assembles recipe, category, and health routes with the shared middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Recipe Box server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the database managers.

/// Category CRUD routes
pub mod categories;
/// JSON body extraction with enveloped rejections
pub mod extract;
/// Health check and readiness routes
pub mod health;
/// Recipe CRUD and favorite routes
pub mod recipes;

pub use categories::CategoryRoutes;
pub use extract::JsonBody;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;

use crate::{errors::AppError, middleware, resources::ServerResources};
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;

/// Build the complete application router with its middleware stack
///
/// Layers: request tracing, CORS, per-request timeout, and body size limit,
/// all driven by the configuration held in `resources`.
pub fn router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    Router::new()
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(CategoryRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .method_not_allowed_fallback(|| async { AppError::method_not_allowed() })
        .fallback(|| async { AppError::not_found("Route") })
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(middleware::setup_cors(&config))
        .layer(middleware::trace_layer())
}
