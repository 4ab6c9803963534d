// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod view;

use std::path::{Path, PathBuf};

use anyhow::Result;
use bm_core::Snapshot;

use crate::exit_error::{ExitError, EXIT_FAILURE, EXIT_USAGE};

/// Resolve the snapshot path from the flag or `BM_SNAPSHOT`.
pub fn resolve_snapshot_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    flag.or_else(crate::env::snapshot_path).ok_or_else(|| {
        ExitError::new(EXIT_USAGE, "no snapshot given: pass --snapshot or set BM_SNAPSHOT").into()
    })
}

/// Load and validate a snapshot, mapping failures to exit code 1.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    tracing::debug!(path = %path.display(), "loading snapshot");
    Snapshot::load(path).map_err(|e| ExitError::new(EXIT_FAILURE, e.to_string()).into())
}
