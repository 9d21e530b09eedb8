// ABOUTME: Integration tests for the categories store
// ABOUTME: Covers uniqueness, rename conflicts, in-use protection, and default seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use common::{create_test_database, insert_recipe};
use recipe_box::database::CATEGORY_IN_USE;
use recipe_box::errors::ErrorCode;
use recipe_box::models::DEFAULT_CATEGORIES;

#[tokio::test]
async fn test_create_and_list_alphabetically() {
    let db = create_test_database().await.unwrap();
    db.categories().create("soups").await.unwrap();
    db.categories().create("brunch").await.unwrap();
    db.categories().create("mains").await.unwrap();

    let names: Vec<String> = db
        .categories()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["brunch", "mains", "soups"]);
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let db = create_test_database().await.unwrap();
    db.categories().create("brunch").await.unwrap();

    let err = db.categories().create("brunch").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.message, "Category already exists");
    assert_eq!(db.categories().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rename() {
    let db = create_test_database().await.unwrap();
    let category = db.categories().create("brunch").await.unwrap();

    let renamed = db
        .categories()
        .update(&category.id, "late breakfast")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.id, category.id);
    assert_eq!(renamed.name, "late breakfast");
    assert_eq!(renamed.created_at, category.created_at);
}

#[tokio::test]
async fn test_rename_to_own_name_is_allowed() {
    let db = create_test_database().await.unwrap();
    let category = db.categories().create("brunch").await.unwrap();

    let same = db.categories().update(&category.id, "brunch").await.unwrap();
    assert_eq!(same.unwrap().name, "brunch");
}

#[tokio::test]
async fn test_rename_to_taken_name_conflicts() {
    let db = create_test_database().await.unwrap();
    db.categories().create("brunch").await.unwrap();
    let soups = db.categories().create("soups").await.unwrap();

    let err = db.categories().update(&soups.id, "brunch").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.message, "Category name already exists");
}

#[tokio::test]
async fn test_rename_missing_returns_none() {
    let db = create_test_database().await.unwrap();
    assert!(db
        .categories()
        .update("missing", "anything")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_unused() {
    let db = create_test_database().await.unwrap();
    let category = db.categories().create("brunch").await.unwrap();

    assert!(db.categories().delete(&category.id).await.unwrap());
    assert!(db.categories().get(&category.id).await.unwrap().is_none());
    assert!(!db.categories().delete(&category.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_in_use_by_name_conflicts() {
    let db = create_test_database().await.unwrap();
    let category = db.categories().create("brunch").await.unwrap();
    insert_recipe(&db, "Eggs Benedict", "brunch").await.unwrap();

    let err = db.categories().delete(&category.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.message, CATEGORY_IN_USE);
    assert!(db.categories().get(&category.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_in_use_by_id_conflicts() {
    let db = create_test_database().await.unwrap();
    let category = db.categories().create("brunch").await.unwrap();
    insert_recipe(&db, "Hash", &category.id).await.unwrap();

    let err = db.categories().delete(&category.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_seed_defaults_is_idempotent() {
    let db = create_test_database().await.unwrap();
    db.categories().create("cakes").await.unwrap();

    let inserted = db.categories().seed_defaults().await.unwrap();
    assert_eq!(inserted, DEFAULT_CATEGORIES.len() as u64 - 1);
    assert_eq!(db.categories().seed_defaults().await.unwrap(), 0);
    assert_eq!(
        db.categories().list().await.unwrap().len(),
        DEFAULT_CATEGORIES.len()
    );
}
