// ABOUTME: Entity models for recipes and categories
// ABOUTME: Re-exports record types, validated input shapes, and JSON response envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod category;
mod envelopes;
mod recipe;

pub use category::{normalize_category_name, Category, DEFAULT_CATEGORIES, DEFAULT_CATEGORY};
pub use envelopes::{DeleteRecipeResponse, MessageResponse, RecipeListResponse, RecipeResponse};
pub use recipe::{FavoriteUpdate, Recipe, RecipeInput, MISSING_RECIPE_FIELDS};
