// ABOUTME: Database operations for recipe categories
// ABOUTME: Unique lowercase names, rename with conflict checks, and guarded deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, RecipesManager};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, DEFAULT_CATEGORIES};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// Conflict message returned when deleting a category that recipes still use
pub const CATEGORY_IN_USE: &str =
    "Cannot delete category that is being used by recipes. Please reassign those recipes first.";

/// Category database operations manager
pub struct CategoriesManager {
    pool: SqlitePool,
}

impl CategoriesManager {
    /// Create a new categories manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All categories ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name, created_at FROM categories ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx("Failed to fetch categories", e))?;

        rows.iter().map(row_to_category).collect()
    }

    /// Get a category by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, category_id: &str) -> AppResult<Option<Category>> {
        let row = sqlx::query("SELECT id, name, created_at FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx("Failed to fetch category", e))?;

        row.as_ref().map(row_to_category).transpose()
    }

    /// Look up a category by its normalized name, optionally ignoring one ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn find_by_name(
        &self,
        name: &str,
        excluding_id: Option<&str>,
    ) -> AppResult<Option<Category>> {
        let row = sqlx::query(
            r"
            SELECT id, name, created_at FROM categories
            WHERE name = $1 AND ($2 IS NULL OR id != $2)
            ",
        )
        .bind(name)
        .bind(excluding_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Failed to check category", e))?;

        row.as_ref().map(row_to_category).transpose()
    }

    /// Create a category from an already-normalized name
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the name is taken, or an error if
    /// the database operation fails
    pub async fn create(&self, name: &str) -> AppResult<Category> {
        if self.find_by_name(name, None).await?.is_some() {
            return Err(AppError::conflict("Category already exists"));
        }

        let id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO categories (id, name, created_at) VALUES ($1, $2, $3)")
            .bind(&id)
            .bind(name)
            .bind(format_timestamp(Utc::now()))
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("Failed to create category", "Category already exists", e))?;

        self.get(&id)
            .await?
            .ok_or_else(|| AppError::internal("Failed to create category"))
    }

    /// Rename a category; returns `None` when no category has this ID
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if another category already has the
    /// name, or an error if the database operation fails
    pub async fn update(&self, category_id: &str, name: &str) -> AppResult<Option<Category>> {
        if self.find_by_name(name, Some(category_id)).await?.is_some() {
            return Err(AppError::conflict("Category name already exists"));
        }

        let result = sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                write_error("Failed to update category", "Category name already exists", e)
            })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(category_id).await
    }

    /// Delete a category that no recipe references
    ///
    /// A recipe references a category when its `category` field holds the
    /// category's ID or its name. Returns `false` when nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if recipes still reference the
    /// category, or an error if the database operation fails
    pub async fn delete(&self, category_id: &str) -> AppResult<bool> {
        let name = self
            .get(category_id)
            .await?
            .map_or_else(|| category_id.to_owned(), |c| c.name);

        let in_use = RecipesManager::new(self.pool.clone())
            .count_in_category(category_id, &name)
            .await?;
        if in_use > 0 {
            return Err(AppError::conflict(CATEGORY_IN_USE));
        }

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx("Failed to delete category", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert the default category list, skipping names that already exist
    ///
    /// Returns the number of categories inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn seed_defaults(&self) -> AppResult<u64> {
        let mut inserted = 0;
        for name in DEFAULT_CATEGORIES {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO categories (id, name, created_at) VALUES ($1, $2, $3)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(*name)
            .bind(format_timestamp(Utc::now()))
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx("Failed to seed categories", e))?;
            inserted += result.rows_affected();
        }

        debug!(inserted, "Seeded default categories");
        Ok(inserted)
    }
}

/// Unique-index violations surface as the same conflict the pre-check reports
fn write_error(message: &str, conflict_message: &str, error: sqlx::Error) -> AppError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::conflict(conflict_message).with_source(error)
        }
        _ => AppError::from_sqlx(message, error),
    }
}

/// Convert a database row to a Category struct
fn row_to_category(row: &SqliteRow) -> AppResult<Category> {
    let created_at: String = row.get("created_at");
    Ok(Category {
        id: row.get("id"),
        name: row.get("name"),
        created_at: parse_timestamp(&created_at)?,
    })
}
