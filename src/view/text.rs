// ABOUTME: Plain-text rendering of screens, recipe details, and category lists for the terminal
// ABOUTME: Cards show title, cook time, servings, favorite marker, and the date added
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::pages::Page;
use super::state::{RecipeCard, Screen};
use crate::models::{Category, Recipe};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// `Mar 5, 2024`
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Render a list screen under the page heading
#[must_use]
pub fn render_screen(screen: &Screen, page: &Page) -> String {
    let mut out = format!("{}\n\n", page.title());
    match screen {
        Screen::Loading => out.push_str("Loading..."),
        Screen::Error(message) => {
            let _ = write!(out, "Error\n{message}");
        }
        Screen::Empty => out.push_str(&page.empty_message()),
        Screen::NoMatches(query) => {
            let _ = write!(out, "{}\nNothing matches \"{query}\".", page.no_matches_message());
        }
        Screen::InvalidCategory(name) => {
            let _ = write!(out, "Invalid Category\nThe category \"{name}\" does not exist.");
        }
        Screen::Recipes(cards) => {
            let lines: Vec<String> = cards.iter().map(render_card).collect();
            out.push_str(&lines.join("\n"));
        }
    }
    out.push('\n');
    out
}

/// One line per recipe card
#[must_use]
pub fn render_card(card: &RecipeCard) -> String {
    let marker = if card.is_favorite { '★' } else { '☆' };
    let mut line = format!("{marker} {}", card.title);
    if let Some(minutes) = card.cook_time {
        let _ = write!(line, "  {minutes}m");
    }
    if let Some(servings) = card.servings {
        let _ = write!(line, "  serves {servings}");
    }
    let _ = write!(
        line,
        "  Added {}  [{}]",
        format_date(card.created_at),
        card.id
    );
    line
}

/// Full recipe view
#[must_use]
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let marker = if recipe.is_favorite { " ★" } else { "" };
    let _ = writeln!(out, "{}{marker}", recipe.title);
    let _ = writeln!(out, "Category: {}", recipe.category);
    if let Some(minutes) = recipe.cook_time {
        let _ = writeln!(out, "Cook time: {minutes} minutes");
    }
    if let Some(servings) = recipe.servings {
        let _ = writeln!(out, "Servings: {servings} servings");
    }
    if let Some(image) = &recipe.image_url {
        let _ = writeln!(out, "Image: {image}");
    }
    let _ = writeln!(out, "Added on {}", format_date(recipe.created_at));

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {ingredient}");
    }
    let _ = write!(out, "\nDirections\n{}\n", recipe.directions);
    out
}

/// Sidebar-style category list
#[must_use]
pub fn render_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories\n".to_owned();
    }
    categories
        .iter()
        .map(|c| format!("{}  [{}]\n", c.name, c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn card(favorite: bool) -> RecipeCard {
        RecipeCard {
            id: "r1".into(),
            title: "Pancakes".into(),
            cook_time: Some(25),
            servings: Some(4),
            category: "breakfast".into(),
            is_favorite: favorite,
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 0).unwrap();
        assert_eq!(format_date(at), "Mar 5, 2024");
    }

    #[test]
    fn test_card_line() {
        assert_eq!(
            render_card(&card(true)),
            "★ Pancakes  25m  serves 4  Added Mar 5, 2024  [r1]"
        );
        assert!(render_card(&card(false)).starts_with("☆ Pancakes"));
    }

    #[test]
    fn test_screen_messages() {
        let favorites = Page::Favorites;
        assert!(render_screen(&Screen::Empty, &favorites).contains("No favorite recipes yet"));

        let page = Page::Category("brunch".into());
        let text = render_screen(&Screen::InvalidCategory("brunch".into()), &page);
        assert!(text.starts_with("Brunch Recipes"));
        assert!(text.contains("The category \"brunch\" does not exist."));

        let text = render_screen(&Screen::NoMatches("kale".into()), &Page::Home);
        assert!(text.contains("No recipes found"));
    }
}
