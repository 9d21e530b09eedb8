// ABOUTME: Case-insensitive recipe search over titles, ingredients, and optionally directions
// ABOUTME: Pure functions re-run against the in-memory collection on every query change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Recipe;

/// Which recipe fields a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Title and ingredient lines
    TitleAndIngredients,
    /// Title, ingredient lines, and directions
    WithDirections,
}

/// Whether `recipe` matches `query` within `scope`
///
/// Matching is a case-insensitive substring test. A blank query matches
/// every recipe.
#[must_use]
pub fn matches(recipe: &Recipe, query: &str, scope: SearchScope) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&recipe.title)
        || recipe.ingredients.iter().any(|line| contains(line))
        || (scope == SearchScope::WithDirections && contains(&recipe.directions))
}

/// Keep the recipes matching `query`, preserving order
#[must_use]
pub fn filter<'a, I>(recipes: I, query: &str, scope: SearchScope) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .filter(|recipe| matches(recipe, query, scope))
        .collect()
}
