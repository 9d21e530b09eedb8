// ABOUTME: Recipe CLI - terminal client for browsing and managing recipes over the HTTP API
// ABOUTME: Lists, searches, adds, edits, favorites, and deletes recipes; manages categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # All recipes, searching titles, ingredients, and directions
//! recipe-cli list --search banana
//!
//! # Favorites and a single category
//! recipe-cli favorites
//! recipe-cli category breakfast --search egg
//!
//! # Add a recipe (ingredients one per line, or repeat --ingredient)
//! recipe-cli add --title Pancakes --ingredient flour --ingredient milk --directions "Mix and fry"
//!
//! # Mark as favorite, then delete
//! recipe-cli favorite 3f2c... && recipe-cli delete 3f2c... --yes
//!
//! # Categories
//! recipe-cli categories add Brunch
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_box::{
    client::ApiClient,
    constants::{defaults, env_keys},
    logging::LoggingConfig,
    view::Page,
};
use tracing::debug;

use commands::RecipeArgs;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe Box terminal client",
    long_about = "Browse, search, and manage recipes and categories on a Recipe Box server."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the Recipe Box server
    #[arg(
        long,
        global = true,
        env = env_keys::RECIPE_API_URL,
        default_value = defaults::DEFAULT_API_URL
    )]
    api_url: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List all recipes, newest first
    List {
        /// Filter by title, ingredient, or directions text
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// List favorite recipes
    Favorites {
        /// Filter by title or ingredient
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// List recipes in one category
    Category {
        /// Category name
        name: String,

        /// Filter by title or ingredient
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show one recipe in full
    Show {
        /// Recipe ID
        id: String,
    },

    /// Add a recipe
    Add(RecipeArgs),

    /// Edit a recipe; only the given fields change
    Edit {
        /// Recipe ID
        id: String,

        #[command(flatten)]
        fields: RecipeArgs,
    },

    /// Mark a recipe as favorite
    Favorite {
        /// Recipe ID
        id: String,

        /// Remove the favorite mark instead
        #[arg(long)]
        off: bool,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Category management
    Categories {
        #[command(subcommand)]
        action: CategoryCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CategoryCommand {
    /// List categories alphabetically
    List,

    /// Create a category
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Category ID
        id: String,

        /// New name
        name: String,
    },

    /// Delete a category no recipe uses
    Delete {
        /// Category ID
        id: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let api = ApiClient::new(&cli.api_url)?;
    debug!(api_url = %api.base_url(), "Using Recipe Box server");

    match cli.command {
        Command::List { search } => commands::recipes::list(&api, Page::Home, search).await,
        Command::Favorites { search } => {
            commands::recipes::list(&api, Page::Favorites, search).await
        }
        Command::Category { name, search } => {
            commands::recipes::list(&api, Page::Category(name), search).await
        }
        Command::Show { id } => commands::recipes::show(&api, &id).await,
        Command::Add(fields) => commands::recipes::add(&api, fields).await,
        Command::Edit { id, fields } => commands::recipes::edit(&api, &id, fields).await,
        Command::Favorite { id, off } => commands::recipes::favorite(&api, &id, !off).await,
        Command::Delete { id, yes } => commands::recipes::delete(&api, &id, yes).await,
        Command::Categories { action } => match action {
            CategoryCommand::List => commands::categories::list(&api).await,
            CategoryCommand::Add { name } => commands::categories::add(&api, &name).await,
            CategoryCommand::Rename { id, name } => {
                commands::categories::rename(&api, &id, &name).await
            }
            CategoryCommand::Delete { id, yes } => {
                commands::categories::delete(&api, &id, yes).await
            }
        },
    }
}
