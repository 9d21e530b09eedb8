// ABOUTME: Category endpoint calls for the client facade
// ABOUTME: Category responses are bare records, not envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiClient, ClientResult};
use crate::models::{Category, MessageResponse};
use serde_json::json;

/// Category operations
pub struct CategoryApi<'a> {
    api: &'a ApiClient,
}

impl<'a> CategoryApi<'a> {
    pub(super) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch all categories ordered by name
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn get_categories(&self) -> ClientResult<Vec<Category>> {
        let url = self.api.endpoint(&["api", "categories"]);
        self.api
            .send(self.api.client.get(url), "Failed to fetch categories")
            .await
    }

    /// Create a category; the server normalizes the name
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn create_category(&self, name: &str) -> ClientResult<Category> {
        let url = self.api.endpoint(&["api", "categories"]);
        self.api
            .send(
                self.api.client.post(url).json(&json!({ "name": name })),
                "Failed to create category",
            )
            .await
    }

    /// Rename a category
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn update_category(&self, id: &str, name: &str) -> ClientResult<Category> {
        let url = self.api.endpoint(&["api", "categories", id]);
        self.api
            .send(
                self.api.client.put(url).json(&json!({ "name": name })),
                "Failed to update category",
            )
            .await
    }

    /// Delete a category
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` if the request fails or the server rejects it
    pub async fn delete_category(&self, id: &str) -> ClientResult<MessageResponse> {
        let url = self.api.endpoint(&["api", "categories", id]);
        self.api
            .send(self.api.client.delete(url), "Failed to delete category")
            .await
    }
}
