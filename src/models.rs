// ABOUTME: Re-exports the recipe and category data models from recipe-core
// ABOUTME: Shared by the store layer, HTTP routes, client facade, and view layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Recipe`: a stored recipe with ingredients, directions, and favorite flag
//! - `RecipeInput`: a validated create or replace payload
//! - `Category`: a user-managed, uniquely named recipe category
//! - Response envelopes shared by the routes and the client facade

pub use recipe_core::models::{
    normalize_category_name, Category, DeleteRecipeResponse, FavoriteUpdate, MessageResponse,
    Recipe, RecipeInput, RecipeListResponse, RecipeResponse, DEFAULT_CATEGORIES, DEFAULT_CATEGORY,
    MISSING_RECIPE_FIELDS,
};
