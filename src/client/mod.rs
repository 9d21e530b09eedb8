// ABOUTME: HTTP client facade for the Recipe Box API
// ABOUTME: Typed recipe and category calls that surface server `{ error }` messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Box API client
//!
//! [`ApiClient`] owns the base URL and a pooled `reqwest` client. The
//! [`RecipeApi`] and [`CategoryApi`] views borrow it and expose one method per
//! endpoint. A non-2xx response becomes [`ClientError::Api`] carrying the
//! server's error message, or the operation's fallback text when the body has
//! none.

mod categories;
mod recipes;

pub use categories::CategoryApi;
pub use recipes::RecipeApi;

use crate::errors::ErrorResponse;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Default request timeout for client calls
const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors returned by the client facade
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided or fallback message
        message: String,
    },
    /// The request never produced a response
    #[error("Could not reach the recipe server: {0}")]
    Transport(#[source] reqwest::Error),
    /// A success response did not have the expected shape
    #[error("Unexpected response from the recipe server: {0}")]
    Decode(#[source] reqwest::Error),
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    /// The configured base URL is unusable
    #[error("Invalid API URL {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ClientError {
    /// HTTP status for API errors
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client result alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Shared HTTP client bound to one server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:8081`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if the URL does not parse or cannot carry a path,
    /// or `Build` if the HTTP client cannot be constructed
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot have a path".to_owned()));
        }

        let client = Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            base_url: parsed,
            client,
        })
    }

    /// Base URL this client talks to
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Recipe endpoints
    #[must_use]
    pub const fn recipes(&self) -> RecipeApi<'_> {
        RecipeApi::new(self)
    }

    /// Category endpoints
    #[must_use]
    pub const fn categories(&self) -> CategoryApi<'_> {
        CategoryApi::new(self)
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a request and decode a success body, or map the failure
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> ClientResult<T> {
        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();

        if !status.is_success() {
            return Err(api_error(status, response.text().await.ok(), fallback));
        }

        response.json::<T>().await.map_err(ClientError::Decode)
    }
}

/// Prefer the server's `{ error }` text, else the per-operation fallback
fn api_error(status: StatusCode, body: Option<String>, fallback: &str) -> ClientError {
    let message = body
        .as_deref()
        .and_then(|text| serde_json::from_str::<ErrorResponse>(text).ok())
        .map(|e| e.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_owned());

    debug!(status = status.as_u16(), %message, "API request failed");
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
