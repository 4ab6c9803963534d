// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Default log filter when `BM_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Snapshot file to read when `--snapshot` is not given
pub fn snapshot_path() -> Option<PathBuf> {
    std::env::var("BM_SNAPSHOT").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Tracing filter directives, e.g. `bm_core=debug`
pub fn log_filter() -> String {
    std::env::var("BM_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
