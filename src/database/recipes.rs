// ABOUTME: Database operations for recipes
// ABOUTME: List newest-first, fetch, create, replace, favorite toggle, and delete with returned row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp};
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeInput};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

const RECIPE_COLUMNS: &str = "id, title, ingredients, directions, image_url, cook_time, servings, \
                              category, is_favorite, created_at";

/// Recipe database operations manager
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All recipes, newest first; ties fall back to insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY created_at DESC, rowid DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to fetch recipes", e))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Get a recipe by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, recipe_id: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"))
            .bind(recipe_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx("Failed to fetch recipe", e))?;

        row.as_ref().map(row_to_recipe).transpose()
    }

    /// Insert a new recipe; the store assigns `id`, `created_at`, and `is_favorite = false`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn create(&self, input: &RecipeInput) -> AppResult<Recipe> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let ingredients_json = serde_json::to_string(&input.ingredients)?;

        sqlx::query(
            r"
            INSERT INTO recipes (
                id, title, ingredients, directions, image_url,
                cook_time, servings, category, is_favorite, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0, $9)
            ",
        )
        .bind(&id)
        .bind(&input.title)
        .bind(&ingredients_json)
        .bind(&input.directions)
        .bind(&input.image_url)
        .bind(input.cook_time.map(i64::from))
        .bind(input.servings.map(i64::from))
        .bind(&input.category)
        .bind(format_timestamp(now))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to create recipe", e))?;

        self.get(&id)
            .await?
            .ok_or_else(|| AppError::internal("Failed to create recipe"))
    }

    /// Replace the editable fields of a recipe
    ///
    /// `is_favorite` and `created_at` are left untouched. Returns `None` when
    /// no recipe has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn update(&self, recipe_id: &str, input: &RecipeInput) -> AppResult<Option<Recipe>> {
        let ingredients_json = serde_json::to_string(&input.ingredients)?;

        let result = sqlx::query(
            r"
            UPDATE recipes SET
                title = $1, ingredients = $2, directions = $3, image_url = $4,
                cook_time = $5, servings = $6, category = $7
            WHERE id = $8
            ",
        )
        .bind(&input.title)
        .bind(&ingredients_json)
        .bind(&input.directions)
        .bind(&input.image_url)
        .bind(input.cook_time.map(i64::from))
        .bind(input.servings.map(i64::from))
        .bind(&input.category)
        .bind(recipe_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to update recipe", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(recipe_id).await
    }

    /// Set the favorite flag
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn set_favorite(
        &self,
        recipe_id: &str,
        is_favorite: bool,
    ) -> AppResult<Option<Recipe>> {
        let result = sqlx::query("UPDATE recipes SET is_favorite = $1 WHERE id = $2")
            .bind(i64::from(is_favorite))
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx("Failed to update favorite status", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(recipe_id).await
    }

    /// Delete a recipe, returning the removed row
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, recipe_id: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(&format!(
            "DELETE FROM recipes WHERE id = $1 RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to delete recipe", e))?;

        row.as_ref().map(row_to_recipe).transpose()
    }

    /// Count recipes filed under a category, referenced either by id or by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count_in_category(&self, category_id: &str, category_name: &str) -> AppResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM recipes WHERE category = $1 OR category = $2",
        )
        .bind(category_id)
        .bind(category_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to check category usage", e))?;

        Ok(row.get("count"))
    }
}

/// Convert a database row to a Recipe struct
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let ingredients_json: String = row.get("ingredients");
    let cook_time: Option<i64> = row.get("cook_time");
    let servings: Option<i64> = row.get("servings");
    let is_favorite: i64 = row.get("is_favorite");
    let created_at: String = row.get("created_at");

    Ok(Recipe {
        id: row.get("id"),
        title: row.get("title"),
        ingredients: serde_json::from_str(&ingredients_json)?,
        directions: row.get("directions"),
        image_url: row.get("image_url"),
        cook_time: cook_time.and_then(|n| u32::try_from(n).ok()),
        servings: servings.and_then(|n| u32::try_from(n).ok()),
        category: row.get("category"),
        is_favorite: is_favorite == 1,
        created_at: parse_timestamp(&created_at)?,
    })
}
