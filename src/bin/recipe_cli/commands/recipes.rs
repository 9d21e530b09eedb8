// ABOUTME: Recipe commands for recipe-cli
// ABOUTME: Lists pages with search, shows, adds, edits, favorites, and deletes recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use recipe_box::client::ApiClient;
use recipe_box::view::{render, text, Page, RecipeForm, ViewState};
use tracing::{debug, warn};

use super::RecipeArgs;
use crate::helpers::require_confirmation;

/// Print one list page, optionally filtered by a search query
pub async fn list(api: &ApiClient, page: Page, search: Option<String>) -> Result<()> {
    let mut state = ViewState::new(page);

    if matches!(state.page, Page::Category(_)) {
        state.categories = match api.categories().get_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!("Failed to load categories: {e}");
                Vec::new()
            }
        };
    }

    let result = api.recipes().get_recipes().await;
    if let Err(e) = &result {
        debug!("Recipe fetch failed: {e}");
    }
    state.recipes_loaded(result);
    state.query = search.unwrap_or_default();

    print!("{}", text::render_screen(&render(&state), &state.page));
    Ok(())
}

/// Print one recipe in full
pub async fn show(api: &ApiClient, id: &str) -> Result<()> {
    let recipe = api.recipes().get_recipe(id).await?;
    print!("{}", text::render_recipe(&recipe));
    Ok(())
}

/// Create a recipe from flags
pub async fn add(api: &ApiClient, fields: RecipeArgs) -> Result<()> {
    let mut form = RecipeForm::default();
    fields.apply_to(&mut form);
    let input = form.to_input()?;

    let recipe = api.recipes().create_recipe(&input).await?;
    println!("Created recipe {}", recipe.id);
    print!("{}", text::render_recipe(&recipe));
    Ok(())
}

/// Update a recipe, starting from its current values
pub async fn edit(api: &ApiClient, id: &str, fields: RecipeArgs) -> Result<()> {
    let recipes = api.recipes();
    let current = recipes
        .get_recipe(id)
        .await
        .with_context(|| format!("Cannot edit recipe {id}"))?;

    let mut form = RecipeForm::from_recipe(&current);
    fields.apply_to(&mut form);
    let input = form.to_input()?;

    let updated = recipes.update_recipe(id, &input).await?;
    println!("Updated recipe {}", updated.id);
    print!("{}", text::render_recipe(&updated));
    Ok(())
}

/// Set the favorite flag, showing the list as it changes
///
/// The card flips before the server answers and flips back if it refuses.
pub async fn favorite(api: &ApiClient, id: &str, is_favorite: bool) -> Result<()> {
    let recipes = api.recipes();
    let mut state = ViewState::new(Page::Home);
    state.recipes_loaded(recipes.get_recipes().await);

    let revert = state.apply_favorite(id, is_favorite);
    if revert.is_none() {
        debug!(recipe_id = %id, "Recipe not in the loaded list");
    }

    match recipes.update_favorite(id, is_favorite).await {
        Ok(updated) => {
            state.replace_recipe(updated);
            print!("{}", text::render_screen(&render(&state), &state.page));
            Ok(())
        }
        Err(e) => {
            if let Some(revert) = revert {
                state.revert_favorite(revert);
            }
            print!("{}", text::render_screen(&render(&state), &state.page));
            Err(e).context("Failed to update favorite status")
        }
    }
}

/// Delete a recipe after confirmation
pub async fn delete(api: &ApiClient, id: &str, confirmed: bool) -> Result<()> {
    require_confirmation(confirmed, &format!("recipe {id}"))?;

    let response = api.recipes().delete_recipe(id).await?;
    println!("{}", response.message);
    for recipe in &response.data {
        println!("  {}  [{}]", recipe.title, recipe.id);
    }
    Ok(())
}
