// ABOUTME: Shared helpers for recipe-cli commands
// ABOUTME: Deletion confirmation guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};

/// Destructive commands run only with an explicit `--yes`
pub fn require_confirmation(confirmed: bool, what: &str) -> Result<()> {
    if !confirmed {
        bail!("Refusing to delete {what} without --yes");
    }
    Ok(())
}
