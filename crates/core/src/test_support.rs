// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Build, BuildResult, ChangeEntry, Job, ScmRecord, Snapshot};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for build history types.
pub mod strategies {
    use crate::BuildResult;
    use proptest::prelude::*;

    pub fn arb_build_result() -> impl Strategy<Value = BuildResult> {
        prop_oneof![
            Just(BuildResult::Success),
            Just(BuildResult::Unstable),
            Just(BuildResult::Failure),
            Just(BuildResult::NotBuilt),
            Just(BuildResult::Aborted),
        ]
    }

    /// A finished result, or `None` for a build still in progress.
    pub fn arb_outcome() -> impl Strategy<Value = Option<BuildResult>> {
        prop_oneof![3 => arb_build_result().prop_map(Some), 1 => Just(None)]
    }
}

// ── Build factory functions ─────────────────────────────────────────────

/// Finished build with the given result, blaming `culprits`.
pub fn finished(number: u32, result: BuildResult, culprits: &[&str]) -> Build {
    let scm = culprits.iter().fold(ScmRecord::new(), |scm, name| scm.culprit(*name));
    Build::builder()
        .number(number)
        .url(format!("job/build/{number}/"))
        .result(result)
        .scm(scm)
        .build()
}

/// Build still executing, started at `started_at_ms` with the given estimate.
pub fn running(number: u32, started_at_ms: u64, estimated_duration_ms: i64) -> Build {
    Build::builder()
        .number(number)
        .started_at_ms(started_at_ms)
        .estimated_duration_ms(estimated_duration_ms)
        .running()
        .build()
}

/// Change log entry whose message is derived from the commit id.
pub fn change(commit_id: &str, author: &str) -> ChangeEntry {
    ChangeEntry::new(commit_id, author, format!("commit {commit_id}"))
}

/// Job with `builds` listed most recent first.
pub fn job(id: &str, builds: Vec<Build>) -> Job {
    Job::builder().id(id).url(format!("job/{id}/")).builds(builds).build()
}

/// Job with builds and downstream references.
pub fn job_with_downstream(id: &str, builds: Vec<Build>, downstream: &[&str]) -> Job {
    let mut job = job(id, builds);
    job.downstream = downstream.iter().map(|d| (*d).into()).collect();
    job
}

/// Validated snapshot; panics on invalid fixtures.
#[allow(clippy::expect_used)]
pub fn snapshot(jobs: Vec<Job>) -> Snapshot {
    Snapshot::new(jobs).expect("valid test snapshot")
}
