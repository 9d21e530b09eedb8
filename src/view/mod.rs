// ABOUTME: Terminal view layer: search, pages, view state, form parsing, and text rendering
// ABOUTME: Side-effect-free; the CLI fetches data and feeds it through these functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # View Layer
//!
//! Everything the terminal client shows is derived from a [`ViewState`] by
//! [`render`], then turned into text by [`text::render_screen`]. The state is
//! recomputed after every fetch or input.

/// Recipe form parsing
pub mod form;
/// List pages and category ordering
pub mod pages;
/// Recipe search
pub mod search;
/// View state and rendering
pub mod state;
/// Terminal text output
pub mod text;

pub use form::{parse_ingredients, RecipeForm};
pub use pages::{sort_categories, Page};
pub use search::{matches, SearchScope};
pub use state::{render, FavoriteRevert, Loadable, RecipeCard, Screen, ViewState};
