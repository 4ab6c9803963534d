// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal build outcomes.

use serde::{Deserialize, Serialize};

/// Terminal outcome of a completed build, ordered from best to worst.
///
/// A build that has not finished yet has no result at all; callers model
/// that as `Option<BuildResult>` rather than a dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildResult {
    Success,
    /// Built, but tests or quality gates reported problems
    Unstable,
    Failure,
    /// Skipped, e.g. an upstream step failed before this one ran
    NotBuilt,
    Aborted,
}

impl BuildResult {
    /// Whether this is the only outcome a dashboard treats as good.
    pub fn is_success(self) -> bool {
        self == BuildResult::Success
    }

    pub fn is_worse_than(self, other: BuildResult) -> bool {
        self > other
    }

    pub fn is_better_or_equal_to(self, other: BuildResult) -> bool {
        self <= other
    }
}

crate::simple_display! {
    BuildResult {
        Success => "SUCCESS",
        Unstable => "UNSTABLE",
        Failure => "FAILURE",
        NotBuilt => "NOT_BUILT",
        Aborted => "ABORTED",
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
