// ABOUTME: HTTP tests for the liveness and readiness probes
// ABOUTME: Readiness reports the stored recipe count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use recipe_box::routes::router;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let resources = common::create_test_resources().await.unwrap();
    let body: Value = AxumTestRequest::get("/health")
        .send(router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_counts_recipes() {
    let resources = common::create_test_resources().await.unwrap();
    common::insert_recipe(&resources.database, "Toast", "breakfast")
        .await
        .unwrap();

    let body: Value = AxumTestRequest::get("/ready")
        .send(router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["recipes"], 1);
}
