// ABOUTME: Re-exports the unified error system from recipe-core
// ABOUTME: Gives server modules a single crate::errors import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `recipe-core` so the client and server share one
//! definition. The `http-response` and `database-errors` features are enabled
//! for this crate, so [`AppError`] converts from `sqlx::Error` and renders as
//! an axum response carrying `{ "error": message }`.

pub use recipe_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
