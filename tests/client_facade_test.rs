// ABOUTME: End-to-end tests of the HTTP client facade against a live server
// ABOUTME: Serves the router on an ephemeral port and drives it through ApiClient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use recipe_box::client::{ApiClient, ClientError};
use recipe_box::models::RecipeInput;
use recipe_box::server;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    client: ApiClient,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let resources = common::create_seeded_resources().await.unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve_on(listener, resources, async move {
            let _ = rx.await;
        }));

        Self {
            client: ApiClient::new(&format!("http://{addr}")).unwrap(),
            shutdown: Some(tx),
            handle,
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

fn omelette() -> RecipeInput {
    let mut input = RecipeInput::new(
        "Omelette",
        vec!["3 eggs".to_owned(), "butter".to_owned()],
        "Beat the eggs and cook gently.",
    );
    input.cook_time = Some(10);
    input.category = "breakfast".to_owned();
    input
}

#[tokio::test]
async fn test_recipe_lifecycle() {
    let server = TestServer::start().await;
    let recipes = server.client.recipes();

    assert!(recipes.get_recipes().await.unwrap().is_empty());

    let created = recipes.create_recipe(&omelette()).await.unwrap();
    assert_eq!(created.title, "Omelette");
    assert_eq!(created.cook_time, Some(10));

    let fetched = recipes.get_recipe(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    let mut edit = omelette();
    edit.title = "Cheese Omelette".to_owned();
    let updated = recipes.update_recipe(&created.id, &edit).await.unwrap();
    assert_eq!(updated.title, "Cheese Omelette");

    let favorite = recipes.update_favorite(&created.id, true).await.unwrap();
    assert!(favorite.is_favorite);

    let deleted = recipes.delete_recipe(&created.id).await.unwrap();
    assert_eq!(deleted.message, "Recipe deleted successfully");
    assert_eq!(deleted.data.len(), 1);
    assert_eq!(deleted.data[0].id, created.id);

    server.stop().await;
}

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let server = TestServer::start().await;

    let err = server.client.recipes().get_recipe("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Recipe not found");

    let mut invalid = omelette();
    invalid.title = String::new();
    let err = server
        .client
        .recipes()
        .create_recipe(&invalid)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.to_string(),
        "Missing required fields: title, ingredients, directions"
    );

    server.stop().await;
}

#[tokio::test]
async fn test_category_lifecycle() {
    let server = TestServer::start().await;
    let categories = server.client.categories();

    let seeded = categories.get_categories().await.unwrap();
    assert!(seeded.iter().any(|c| c.name == "breakfast"));

    let brunch = categories.create_category("Brunch").await.unwrap();
    assert_eq!(brunch.name, "brunch");

    let err = categories.create_category("brunch").await.unwrap_err();
    assert_eq!(err.status(), Some(409));

    let renamed = categories
        .update_category(&brunch.id, "Weekend Brunch")
        .await
        .unwrap();
    assert_eq!(renamed.name, "weekend brunch");

    let response = categories.delete_category(&brunch.id).await.unwrap();
    assert_eq!(response.message, "Category deleted successfully");

    server.stop().await;
}

#[tokio::test]
async fn test_in_use_category_cannot_be_deleted() {
    let server = TestServer::start().await;
    server.client.recipes().create_recipe(&omelette()).await.unwrap();

    let breakfast = server
        .client
        .categories()
        .get_categories()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == "breakfast")
        .unwrap();

    let err = server
        .client
        .categories()
        .delete_category(&breakfast.id)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));

    server.stop().await;
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}")).unwrap();
    let err = client.recipes().get_recipes().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}
