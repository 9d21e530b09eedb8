// ABOUTME: Recipe endpoint calls for the client facade
// ABOUTME: Unwraps the `{ recipes }` and `{ recipe }` envelopes into plain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiClient, ClientResult};
use crate::models::{
    DeleteRecipeResponse, FavoriteUpdate, Recipe, RecipeInput, RecipeListResponse, RecipeResponse,
};

/// Recipe operations
pub struct RecipeApi<'a> {
    api: &'a ApiClient,
}

impl<'a> RecipeApi<'a> {
    pub(super) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch all recipes, newest first
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn get_recipes(&self) -> ClientResult<Vec<Recipe>> {
        let url = self.api.endpoint(&["api", "recipes"]);
        let response: RecipeListResponse = self
            .api
            .send(self.api.client.get(url), "Failed to fetch recipes")
            .await?;
        Ok(response.recipes)
    }

    /// Fetch a single recipe
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn get_recipe(&self, id: &str) -> ClientResult<Recipe> {
        let url = self.api.endpoint(&["api", "recipes", id]);
        let response: RecipeResponse = self
            .api
            .send(self.api.client.get(url), "Failed to fetch recipe")
            .await?;
        Ok(response.recipe)
    }

    /// Create a recipe
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn create_recipe(&self, input: &RecipeInput) -> ClientResult<Recipe> {
        let url = self.api.endpoint(&["api", "recipes"]);
        let response: RecipeResponse = self
            .api
            .send(self.api.client.post(url).json(input), "Failed to create recipe")
            .await?;
        Ok(response.recipe)
    }

    /// Replace a recipe's editable fields
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn update_recipe(&self, id: &str, input: &RecipeInput) -> ClientResult<Recipe> {
        let url = self.api.endpoint(&["api", "recipes", id]);
        let response: RecipeResponse = self
            .api
            .send(self.api.client.put(url).json(input), "Failed to update recipe")
            .await?;
        Ok(response.recipe)
    }

    /// Delete a recipe, returning the server's confirmation
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn delete_recipe(&self, id: &str) -> ClientResult<DeleteRecipeResponse> {
        let url = self.api.endpoint(&["api", "recipes", id]);
        self.api
            .send(self.api.client.delete(url), "Failed to delete recipe")
            .await
    }

    /// Set the favorite flag
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn update_favorite(&self, id: &str, is_favorite: bool) -> ClientResult<Recipe> {
        let url = self.api.endpoint(&["api", "recipes", id]);
        self.api
            .send(
                self.api.client.patch(url).json(&FavoriteUpdate { is_favorite }),
                "Failed to update favorite status",
            )
            .await
    }
}
