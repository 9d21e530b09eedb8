// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: Provides recipe and category commands plus the shared recipe field flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod categories;
pub mod recipes;

use clap::Args;
use recipe_box::view::RecipeForm;

/// Recipe fields accepted by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct RecipeArgs {
    /// Recipe title
    #[arg(long)]
    pub title: Option<String>,

    /// Ingredients, one per line
    #[arg(long)]
    pub ingredients: Option<String>,

    /// A single ingredient (repeatable, appended after --ingredients)
    #[arg(long = "ingredient")]
    pub ingredient: Vec<String>,

    /// Directions text
    #[arg(long)]
    pub directions: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Cook time in minutes
    #[arg(long)]
    pub cook_time: Option<String>,

    /// Number of servings
    #[arg(long)]
    pub servings: Option<String>,

    /// Category name (defaults to "other")
    #[arg(long)]
    pub category: Option<String>,
}

impl RecipeArgs {
    /// Overlay the given flags onto a form; unset flags keep the form's value
    pub fn apply_to(self, form: &mut RecipeForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if self.ingredients.is_some() || !self.ingredient.is_empty() {
            let mut lines: Vec<String> = self.ingredients.into_iter().collect();
            lines.extend(self.ingredient);
            form.ingredients = lines.join("\n");
        }
        if let Some(directions) = self.directions {
            form.directions = directions;
        }
        if let Some(image_url) = self.image_url {
            form.image_url = image_url;
        }
        if let Some(cook_time) = self.cook_time {
            form.cook_time = cook_time;
        }
        if let Some(servings) = self.servings {
            form.servings = servings;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_keep_form_values() {
        let mut form = RecipeForm {
            title: "Soup".to_owned(),
            ingredients: "water\nsalt".to_owned(),
            cook_time: "30".to_owned(),
            ..RecipeForm::default()
        };
        RecipeArgs {
            servings: Some("4".to_owned()),
            ..RecipeArgs::default()
        }
        .apply_to(&mut form);

        assert_eq!(form.title, "Soup");
        assert_eq!(form.ingredients, "water\nsalt");
        assert_eq!(form.cook_time, "30");
        assert_eq!(form.servings, "4");
    }

    #[test]
    fn test_ingredient_flags_replace_and_append() {
        let mut form = RecipeForm {
            ingredients: "old".to_owned(),
            ..RecipeForm::default()
        };
        RecipeArgs {
            ingredients: Some("flour\nmilk".to_owned()),
            ingredient: vec!["eggs".to_owned()],
            ..RecipeArgs::default()
        }
        .apply_to(&mut form);

        assert_eq!(form.ingredients, "flour\nmilk\neggs");
    }
}
