// ABOUTME: Category commands for recipe-cli
// ABOUTME: Lists, creates, renames, and deletes categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use recipe_box::client::ApiClient;
use recipe_box::view::{sort_categories, text};

use crate::helpers::require_confirmation;

/// Print categories alphabetically
pub async fn list(api: &ApiClient) -> Result<()> {
    let mut categories = api.categories().get_categories().await?;
    sort_categories(&mut categories);
    print!("{}", text::render_categories(&categories));
    Ok(())
}

/// Create a category
pub async fn add(api: &ApiClient, name: &str) -> Result<()> {
    let category = api.categories().create_category(name).await?;
    println!("Created category {}  [{}]", category.name, category.id);
    Ok(())
}

/// Rename a category
pub async fn rename(api: &ApiClient, id: &str, name: &str) -> Result<()> {
    let category = api.categories().update_category(id, name).await?;
    println!("Renamed category to {}", category.name);
    Ok(())
}

/// Delete a category after confirmation
pub async fn delete(api: &ApiClient, id: &str, confirmed: bool) -> Result<()> {
    require_confirmation(confirmed, &format!("category {id}"))?;
    let response = api.categories().delete_category(id).await?;
    println!("{}", response.message);
    Ok(())
}
