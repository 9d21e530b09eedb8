// ABOUTME: View state for a recipe list page and the pure render step that turns it into a screen
// ABOUTME: Also holds the optimistic favorite toggle and its revert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::pages::Page;
use super::search;
use crate::models::{Category, Recipe};
use chrono::{DateTime, Utc};

/// Message shown when the recipe list cannot be fetched
pub const LOAD_RECIPES_FAILED: &str = "Failed to load recipes. Please try again later.";

/// A value fetched from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Fetch in flight
    Loading,
    /// Fetch failed with a user-facing message
    Failed(String),
    /// Fetch completed
    Ready(T),
}

/// Summary of one recipe as shown in a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    /// Recipe ID
    pub id: String,
    /// Title
    pub title: String,
    /// Cook time in minutes
    pub cook_time: Option<u32>,
    /// Servings
    pub servings: Option<u32>,
    /// Category name
    pub category: String,
    /// Favorite marker
    pub is_favorite: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            category: recipe.category.clone(),
            is_favorite: recipe.is_favorite,
            created_at: recipe.created_at,
        }
    }
}

/// What a list page displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Recipes are still loading
    Loading,
    /// Recipes failed to load
    Error(String),
    /// The page has no recipes at all
    Empty,
    /// The search filtered every recipe out
    NoMatches(String),
    /// The requested category does not exist
    InvalidCategory(String),
    /// Recipes to show, in list order
    Recipes(Vec<RecipeCard>),
}

/// Token returned by an optimistic favorite change, used to undo it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRevert {
    recipe_id: String,
    previous: bool,
}

/// Everything a list page renders from
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Fetched recipes, newest first
    pub recipes: Loadable<Vec<Recipe>>,
    /// Known categories
    pub categories: Vec<Category>,
    /// Current search text
    pub query: String,
    /// Current page
    pub page: Page,
}

impl ViewState {
    /// Fresh state for `page` with recipes still loading
    #[must_use]
    pub const fn new(page: Page) -> Self {
        Self {
            recipes: Loadable::Loading,
            categories: Vec::new(),
            query: String::new(),
            page,
        }
    }

    /// Record the result of a recipe fetch
    pub fn recipes_loaded<E>(&mut self, result: Result<Vec<Recipe>, E>) {
        self.recipes = match result {
            Ok(recipes) => Loadable::Ready(recipes),
            Err(_) => Loadable::Failed(LOAD_RECIPES_FAILED.to_owned()),
        };
    }

    /// Flip a recipe's favorite flag locally before the server confirms it
    ///
    /// Returns `None` when recipes are not loaded or the ID is unknown.
    #[must_use]
    pub fn apply_favorite(&mut self, recipe_id: &str, is_favorite: bool) -> Option<FavoriteRevert> {
        let recipe = self.recipe_mut(recipe_id)?;
        let previous = recipe.is_favorite;
        recipe.is_favorite = is_favorite;
        Some(FavoriteRevert {
            recipe_id: recipe_id.to_owned(),
            previous,
        })
    }

    /// Undo an optimistic favorite change after the server rejected it
    pub fn revert_favorite(&mut self, revert: FavoriteRevert) {
        if let Some(recipe) = self.recipe_mut(&revert.recipe_id) {
            recipe.is_favorite = revert.previous;
        }
    }

    /// Replace a local recipe with the server's copy
    pub fn replace_recipe(&mut self, updated: Recipe) {
        if let Some(recipe) = self.recipe_mut(&updated.id) {
            *recipe = updated;
        }
    }

    fn recipe_mut(&mut self, recipe_id: &str) -> Option<&mut Recipe> {
        match &mut self.recipes {
            Loadable::Ready(recipes) => recipes.iter_mut().find(|r| r.id == recipe_id),
            Loadable::Loading | Loadable::Failed(_) => None,
        }
    }
}

/// Compute the screen for the current state
#[must_use]
pub fn render(state: &ViewState) -> Screen {
    let recipes = match &state.recipes {
        Loadable::Loading => return Screen::Loading,
        Loadable::Failed(message) => return Screen::Error(message.clone()),
        Loadable::Ready(recipes) => recipes,
    };

    if let Page::Category(name) = &state.page {
        if !state.page.is_valid(&state.categories) {
            return Screen::InvalidCategory(name.clone());
        }
    }

    let on_page: Vec<&Recipe> = recipes.iter().filter(|r| state.page.includes(r)).collect();
    if on_page.is_empty() {
        return Screen::Empty;
    }

    let found = search::filter(on_page, &state.query, state.page.search_scope());
    if found.is_empty() {
        return Screen::NoMatches(state.query.trim().to_owned());
    }

    Screen::Recipes(found.into_iter().map(RecipeCard::from).collect())
}
