// ABOUTME: JSON response envelopes shared by the HTTP routes and the client facade
// ABOUTME: Recipe endpoints wrap their payloads; category endpoints return bare records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// `{ "recipes": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeListResponse {
    /// Recipes, newest first
    pub recipes: Vec<Recipe>,
}

/// `{ "recipe": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeResponse {
    /// The fetched, created, or updated recipe
    pub recipe: Recipe,
}

/// `{ "message": "...", "data": [...] }` returned by recipe deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRecipeResponse {
    /// Confirmation text
    pub message: String,
    /// The deleted rows
    pub data: Vec<Recipe>,
}

/// `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation text
    pub message: String,
}

impl MessageResponse {
    /// Wrap a confirmation message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
