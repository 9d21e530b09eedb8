// ABOUTME: Core types and constants for the Recipe Box platform
// ABOUTME: Foundation crate with error handling and entity models shared by server and client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types for Recipe Box. Both the HTTP
//! server and the terminal client depend on it, so it stays free of any
//! store or transport code unless the matching feature is enabled.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the `{ error }` envelope
//! - **models**: `Recipe` and `Category` records plus their input validation rules

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Entity models (Recipe, Category) and input normalization
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
