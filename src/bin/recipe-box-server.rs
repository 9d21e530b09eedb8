// ABOUTME: Recipe Box HTTP server binary
// ABOUTME: Loads configuration, opens the database, seeds categories, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Box Server Binary
//!
//! ```bash
//! HTTP_PORT=8081 DATABASE_URL=sqlite:./data/recipes.db recipe-box-server
//! recipe-box-server --http-port 9000 --database-url sqlite::memory:
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use recipe_box::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-box-server")]
#[command(about = "Recipe Box - recipe and category API server")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/recipes.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&url);
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let database = Database::new(&config.database)
        .await
        .context("Failed to initialize database")?;

    if config.seed_default_categories {
        let inserted = database
            .categories()
            .seed_defaults()
            .await
            .context("Failed to seed default categories")?;
        info!("Seeded {inserted} default categories");
    }

    let resources = Arc::new(ServerResources::new(database, config));

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
