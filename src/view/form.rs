// ABOUTME: Recipe form fields as entered by the user and their conversion into an API payload
// ABOUTME: Ingredients are typed one per line; numeric fields are optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeInput, DEFAULT_CATEGORY, MISSING_RECIPE_FIELDS};

/// Split free text into ingredient lines: one per line, trimmed, blanks dropped
#[must_use]
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Raw recipe form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    /// Title
    pub title: String,
    /// Ingredients, one per line
    pub ingredients: String,
    /// Directions
    pub directions: String,
    /// Image URL
    pub image_url: String,
    /// Cook time in minutes
    pub cook_time: String,
    /// Servings
    pub servings: String,
    /// Category name
    pub category: String,
}

impl RecipeForm {
    /// Prefill the form from an existing recipe for editing
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.join("\n"),
            directions: recipe.directions.clone(),
            image_url: recipe.image_url.clone().unwrap_or_default(),
            cook_time: recipe.cook_time.map(|n| n.to_string()).unwrap_or_default(),
            servings: recipe.servings.map(|n| n.to_string()).unwrap_or_default(),
            category: recipe.category.clone(),
        }
    }

    /// Build the API payload
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when title, ingredients, or directions
    /// is blank, and `InvalidInput` when a number field is not a whole number
    pub fn to_input(&self) -> AppResult<RecipeInput> {
        let ingredients = parse_ingredients(&self.ingredients);
        if self.title.trim().is_empty() || ingredients.is_empty() || self.directions.trim().is_empty()
        {
            return Err(AppError::missing_fields(MISSING_RECIPE_FIELDS));
        }

        let category = self.category.trim().to_lowercase();
        Ok(RecipeInput {
            title: self.title.trim().to_owned(),
            ingredients,
            directions: self.directions.trim().to_owned(),
            image_url: Some(self.image_url.trim())
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned),
            cook_time: parse_number("cook_time", &self.cook_time)?,
            servings: parse_number("servings", &self.servings)?,
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_owned()
            } else {
                category
            },
        })
    }
}

fn parse_number(field: &str, raw: &str) -> AppResult<Option<u32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(|n| (n > 0).then_some(n))
        .map_err(|_| AppError::invalid_input(format!("{field} must be a positive integer")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::ErrorCode;

    #[test]
    fn test_parse_ingredients_trims_and_drops_blanks() {
        let lines = parse_ingredients("  2 eggs \n\n1 cup milk\r\n   \nflour");
        assert_eq!(lines, vec!["2 eggs", "1 cup milk", "flour"]);
    }

    #[test]
    fn test_form_to_input() {
        let form = RecipeForm {
            title: " Crepes ".into(),
            ingredients: "eggs\nmilk\n".into(),
            directions: "Whisk and fry".into(),
            cook_time: "15".into(),
            category: "Breakfast".into(),
            ..RecipeForm::default()
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.title, "Crepes");
        assert_eq!(input.ingredients, vec!["eggs", "milk"]);
        assert_eq!(input.cook_time, Some(15));
        assert_eq!(input.servings, None);
        assert_eq!(input.image_url, None);
        assert_eq!(input.category, "breakfast");
    }

    #[test]
    fn test_form_requires_fields() {
        let form = RecipeForm {
            title: "Crepes".into(),
            ingredients: "\n  \n".into(),
            directions: "Whisk".into(),
            ..RecipeForm::default()
        };
        let err = form.to_input().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_form_rejects_bad_numbers() {
        let form = RecipeForm {
            title: "Crepes".into(),
            ingredients: "eggs".into(),
            directions: "Whisk".into(),
            servings: "a few".into(),
            ..RecipeForm::default()
        };
        let err = form.to_input().unwrap_err();
        assert_eq!(err.message, "servings must be a positive integer");
    }
}
