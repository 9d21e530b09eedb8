// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides the CORS layer and the per-request tracing span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from server configuration
pub mod cors;
/// Request span creation
pub mod tracing;

pub use self::cors::setup_cors;
pub use self::tracing::{trace_layer, REQUEST_ID_HEADER};
