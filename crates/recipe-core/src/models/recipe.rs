// ABOUTME: Recipe record plus validation of create/update and favorite payloads
// ABOUTME: Required fields are title, ingredients, directions; numeric fields are positive or absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::category::DEFAULT_CATEGORY;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error text returned when any required recipe field is missing
pub const MISSING_RECIPE_FIELDS: &str = "Missing required fields: title, ingredients, directions";

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque identifier assigned by the store
    pub id: String,
    /// Display title (never empty)
    pub title: String,
    /// Ordered ingredient lines
    pub ingredients: Vec<String>,
    /// Free-text directions
    pub directions: String,
    /// URL or inline-encoded image
    pub image_url: Option<String>,
    /// Cook time in minutes
    pub cook_time: Option<u32>,
    /// Number of servings
    pub servings: Option<u32>,
    /// Category name, `other` when unset
    pub category: String,
    /// Whether the recipe is marked as favorite
    #[serde(default)]
    pub is_favorite: bool,
    /// Creation timestamp assigned by the store
    pub created_at: DateTime<Utc>,
}

/// Validated payload for creating or fully replacing a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Display title
    pub title: String,
    /// Ordered ingredient lines
    pub ingredients: Vec<String>,
    /// Free-text directions
    pub directions: String,
    /// URL or inline-encoded image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Cook time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    /// Number of servings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Category name
    pub category: String,
}

impl RecipeInput {
    /// Build a payload with only the required fields set
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        ingredients: Vec<String>,
        directions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients,
            directions: directions.into(),
            image_url: None,
            cook_time: None,
            servings: None,
            category: DEFAULT_CATEGORY.to_owned(),
        }
    }

    /// Validate a raw JSON request body
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when title, ingredients, or directions is
    /// absent or empty, and `InvalidInput` when a field has the wrong type or a
    /// numeric field is not a positive integer
    pub fn from_json(body: &Value) -> AppResult<Self> {
        let title = body.get("title").filter(|v| is_present(v));
        let ingredients = body.get("ingredients").filter(|v| !v.is_null());
        let directions = body.get("directions").filter(|v| is_present(v));

        let (Some(title), Some(ingredients), Some(directions)) = (title, ingredients, directions)
        else {
            return Err(AppError::missing_fields(MISSING_RECIPE_FIELDS));
        };

        Ok(Self {
            title: required_string("title", title)?,
            ingredients: ingredient_lines(ingredients)?,
            directions: required_string("directions", directions)?,
            image_url: optional_string("image_url", body.get("image_url"))?,
            cook_time: positive_int("cook_time", body.get("cook_time"))?,
            servings: positive_int("servings", body.get("servings"))?,
            category: optional_string("category", body.get("category"))?
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
        })
    }
}

/// Payload of the favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteUpdate {
    /// New favorite state
    pub is_favorite: bool,
}

impl FavoriteUpdate {
    /// Validate a raw JSON request body
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `is_favorite` is a JSON boolean
    pub fn from_json(body: &Value) -> AppResult<Self> {
        match body.get("is_favorite") {
            Some(Value::Bool(is_favorite)) => Ok(Self {
                is_favorite: *is_favorite,
            }),
            _ => Err(AppError::invalid_input("is_favorite must be a boolean")),
        }
    }
}

/// Null and the empty string count as "not provided"
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn required_string(field: &str, value: &Value) -> AppResult<String> {
    value
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| AppError::invalid_input(format!("{field} must be a string")))
}

fn ingredient_lines(value: &Value) -> AppResult<Vec<String>> {
    let invalid = || AppError::invalid_input("ingredients must be a list of strings");
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|line| line.as_str().map(ToOwned::to_owned).ok_or_else(invalid))
        .collect()
}

fn optional_string(field: &str, value: Option<&Value>) -> AppResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::invalid_input(format!("{field} must be a string"))),
    }
}

/// Zero, empty string, null, and absence all mean "not set"
fn positive_int(field: &str, value: Option<&Value>) -> AppResult<Option<u32>> {
    let invalid = || AppError::invalid_input(format!("{field} must be a positive integer"));
    let parsed = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(invalid)?,
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<u64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };
    if parsed == 0 {
        return Ok(None);
    }
    u32::try_from(parsed).map(Some).map_err(|_| invalid())
}
