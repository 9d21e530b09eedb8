// ABOUTME: Recipe list pages (all, favorites, per-category) and sidebar category ordering
// ABOUTME: Each page picks its recipe subset, search scope, titles, and empty-state text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::search::SearchScope;
use crate::models::{Category, Recipe, DEFAULT_CATEGORY};

/// A recipe list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// All recipes
    Home,
    /// Recipes marked as favorite
    Favorites,
    /// Recipes in one category
    Category(String),
}

impl Page {
    /// Only the main list searches directions
    #[must_use]
    pub const fn search_scope(&self) -> SearchScope {
        match self {
            Self::Home => SearchScope::WithDirections,
            Self::Favorites | Self::Category(_) => SearchScope::TitleAndIngredients,
        }
    }

    /// Whether `recipe` belongs on this page before searching
    #[must_use]
    pub fn includes(&self, recipe: &Recipe) -> bool {
        match self {
            Self::Home => true,
            Self::Favorites => recipe.is_favorite,
            Self::Category(name) => recipe.category.to_lowercase() == name.to_lowercase(),
        }
    }

    /// A category page is valid for `other` or any known category name
    #[must_use]
    pub fn is_valid(&self, categories: &[Category]) -> bool {
        match self {
            Self::Home | Self::Favorites => true,
            Self::Category(name) => {
                let wanted = name.to_lowercase();
                wanted == DEFAULT_CATEGORY
                    || categories.iter().any(|c| c.name.to_lowercase() == wanted)
            }
        }
    }

    /// Page heading
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Home => "All Recipes".to_owned(),
            Self::Favorites => "Favorite Recipes".to_owned(),
            Self::Category(name) => format!("{} Recipes", capitalize(name)),
        }
    }

    /// Text shown when the page has no recipes at all
    #[must_use]
    pub fn empty_message(&self) -> String {
        match self {
            Self::Home => "No recipes yet!".to_owned(),
            Self::Favorites => "No favorite recipes yet".to_owned(),
            Self::Category(name) => format!("No {name} recipes yet"),
        }
    }

    /// Text shown when a search filters every recipe out
    #[must_use]
    pub fn no_matches_message(&self) -> String {
        match self {
            Self::Home => "No recipes found".to_owned(),
            Self::Favorites => "No favorite recipes found".to_owned(),
            Self::Category(name) => format!("No {name} recipes found"),
        }
    }
}

/// Sort categories alphabetically, ignoring case
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by_key(|c| c.name.to_lowercase());
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(name: &str) -> Category {
        Category {
            id: format!("id-{name}"),
            name: name.to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_other_is_always_a_valid_category() {
        assert!(Page::Category("other".into()).is_valid(&[]));
        assert!(Page::Category("Other".into()).is_valid(&[]));
    }

    #[test]
    fn test_category_validation_is_case_insensitive() {
        let known = vec![category("breakfast")];
        assert!(Page::Category("Breakfast".into()).is_valid(&known));
        assert!(!Page::Category("brunch".into()).is_valid(&known));
    }

    #[test]
    fn test_titles() {
        assert_eq!(Page::Home.title(), "All Recipes");
        assert_eq!(Page::Category("cakes".into()).title(), "Cakes Recipes");
    }

    #[test]
    fn test_sort_categories_ignores_case() {
        let mut list = vec![category("dinner"), category("Breakfast"), category("cakes")];
        sort_categories(&mut list);
        let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Breakfast", "cakes", "dinner"]);
    }

    #[test]
    fn test_only_home_searches_directions() {
        assert_eq!(Page::Home.search_scope(), SearchScope::WithDirections);
        assert_eq!(
            Page::Favorites.search_scope(),
            SearchScope::TitleAndIngredients
        );
    }
}
