// ABOUTME: JSON body extractor that reports malformed input through the error envelope
// ABOUTME: Replaces axum's plain-text JSON rejection with a 400 `{ error }` response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::Value;
use tracing::debug;

/// Raw JSON request body, validated by the handler
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(&rejection)),
        }
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> AppError {
    debug!(reason = %rejection.body_text(), "Rejected request body");
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::invalid_input("Expected a JSON request body")
        }
        JsonRejection::BytesRejection(_) => {
            AppError::invalid_input("Request body could not be read")
        }
        _ => AppError::invalid_input("Invalid JSON body"),
    }
}
