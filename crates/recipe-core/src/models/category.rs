// ABOUTME: Category record and name normalization rules
// ABOUTME: Names are trimmed, lowercased, and unique across all categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category assigned to recipes created without one
pub const DEFAULT_CATEGORY: &str = "other";

/// Categories seeded into an empty store (`other` is implicit and always valid)
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "cakes",
    "cookies",
    "pastries",
    "other desserts",
    "breakfast",
    "lunch",
    "dinner",
    "drinks",
];

/// A user-managed recipe category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque identifier assigned by the store
    pub id: String,
    /// Trimmed, lowercased, unique name
    pub name: String,
    /// Creation timestamp assigned by the store
    pub created_at: DateTime<Utc>,
}

/// Extract and normalize the `name` field of a category payload
///
/// # Errors
///
/// Returns `InvalidInput` if `name` is absent, not a string, or blank
pub fn normalize_category_name(body: &Value) -> AppResult<String> {
    match body.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.trim().to_lowercase()),
        _ => Err(AppError::invalid_input("Category name is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_name_is_trimmed_and_lowercased() {
        let name = normalize_category_name(&json!({ "name": "  Breakfast " })).unwrap();
        assert_eq!(name, "breakfast");
    }

    #[test]
    fn test_blank_or_non_string_name_rejected() {
        for body in [
            json!({}),
            json!({ "name": "   " }),
            json!({ "name": 42 }),
            json!({ "name": null }),
        ] {
            let err = normalize_category_name(&body).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
            assert_eq!(err.message, "Category name is required");
        }
    }
}
