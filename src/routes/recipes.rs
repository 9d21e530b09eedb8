// ABOUTME: Route handlers for the recipes REST API
// ABOUTME: List, fetch, create, replace, favorite toggle, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! Every handler validates its input, delegates to [`RecipesManager`], and
//! turns failures into an [`AppError`] which renders as `{ "error": ... }`.

use super::extract::JsonBody;
use crate::{
    database::RecipesManager,
    errors::AppError,
    models::{
        DeleteRecipeResponse, FavoriteUpdate, RecipeInput, RecipeListResponse, RecipeResponse,
    },
    resources::ServerResources,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recipes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/recipes/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .patch(Self::handle_set_favorite)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    fn manager(resources: &ServerResources) -> RecipesManager {
        resources.database.recipes()
    }

    /// Handle GET /api/recipes - List all recipes, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = Self::manager(&resources).list().await?;
        Ok((StatusCode::OK, Json(RecipeListResponse { recipes })).into_response())
    }

    /// Handle GET /api/recipes/:id - Get a specific recipe
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = Self::manager(&resources)
            .get(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        Ok((StatusCode::OK, Json(RecipeResponse { recipe })).into_response())
    }

    /// Handle POST /api/recipes - Create a recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(body): JsonBody,
    ) -> Result<Response, AppError> {
        let input = RecipeInput::from_json(&body)?;
        let recipe = Self::manager(&resources).create(&input).await?;

        info!(recipe_id = %recipe.id, category = %recipe.category, "Recipe created");
        Ok((StatusCode::CREATED, Json(RecipeResponse { recipe })).into_response())
    }

    /// Handle PUT /api/recipes/:id - Replace a recipe's editable fields
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        JsonBody(body): JsonBody,
    ) -> Result<Response, AppError> {
        let input = RecipeInput::from_json(&body)?;
        let recipe = Self::manager(&resources)
            .update(&id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        Ok((StatusCode::OK, Json(RecipeResponse { recipe })).into_response())
    }

    /// Handle PATCH /api/recipes/:id - Set the favorite flag; responds with the bare recipe
    async fn handle_set_favorite(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        JsonBody(body): JsonBody,
    ) -> Result<Response, AppError> {
        let update = FavoriteUpdate::from_json(&body)?;
        let recipe = Self::manager(&resources)
            .set_favorite(&id, update.is_favorite)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle DELETE /api/recipes/:id - Delete a recipe
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = Self::manager(&resources)
            .delete(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        info!(recipe_id = %deleted.id, "Recipe deleted");
        let response = DeleteRecipeResponse {
            message: "Recipe deleted successfully".to_owned(),
            data: vec![deleted],
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
