// ABOUTME: Route handlers for the categories REST API
// ABOUTME: Bare-array listing, create and rename with uniqueness checks, guarded delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category routes

use super::extract::JsonBody;
use crate::{
    database::CategoriesManager,
    errors::AppError,
    models::{normalize_category_name, MessageResponse},
    resources::ServerResources,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

/// Category routes handler
pub struct CategoryRoutes;

impl CategoryRoutes {
    /// Create all category routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/categories",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/categories/:id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    fn manager(resources: &ServerResources) -> CategoriesManager {
        resources.database.categories()
    }

    /// Handle GET /api/categories - List categories by name
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let categories = Self::manager(&resources).list().await?;
        Ok((StatusCode::OK, Json(categories)).into_response())
    }

    /// Handle POST /api/categories - Create a category
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(body): JsonBody,
    ) -> Result<Response, AppError> {
        let name = normalize_category_name(&body)?;
        let category = Self::manager(&resources).create(&name).await?;

        info!(category_id = %category.id, name = %category.name, "Category created");
        Ok((StatusCode::CREATED, Json(category)).into_response())
    }

    /// Handle PUT /api/categories/:id - Rename a category
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        JsonBody(body): JsonBody,
    ) -> Result<Response, AppError> {
        let name = normalize_category_name(&body)?;
        let category = Self::manager(&resources)
            .update(&id, &name)
            .await?
            .ok_or_else(|| AppError::not_found("Category"))?;

        Ok((StatusCode::OK, Json(category)).into_response())
    }

    /// Handle DELETE /api/categories/:id - Delete an unused category
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        if !Self::manager(&resources).delete(&id).await? {
            return Err(AppError::not_found("Category"));
        }

        info!(category_id = %id, "Category deleted");
        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Category deleted successfully")),
        )
            .into_response())
    }
}
