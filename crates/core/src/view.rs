// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard view of a job.
//!
//! [`JobView`] borrows a job from a [`JobSource`] and derives everything a
//! build monitor shows for it. Nothing is cached: each accessor reads the
//! snapshot again, so two views over the same snapshot and reference time
//! always agree.

use crate::build::Build;
use crate::clock::{Clock, SystemClock};
use crate::job::Job;
use crate::result::BuildResult;
use crate::source::JobSource;
use crate::status::{Health, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Serializable result of evaluating a [`JobView`], downstream jobs included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub name: String,
    pub url: String,
    pub status: Status,
    pub build_name: Option<String>,
    pub build_url: Option<String>,
    pub progress: u8,
    pub culprits: BTreeSet<String>,
    pub changes: Vec<String>,
    pub downstream_jobs: Vec<JobStatus>,
}

/// Derived, point-in-time view of one job.
pub struct JobView<'a, S: JobSource + ?Sized, C: Clock = SystemClock> {
    source: &'a S,
    job: &'a Job,
    clock: C,
    reference_ms: u64,
}

impl<'a, S: JobSource + ?Sized> JobView<'a, S, SystemClock> {
    /// View at the current wall-clock time.
    pub fn of(source: &'a S, job: &'a Job) -> Self {
        Self::with_clock(source, job, SystemClock)
    }

    /// View at an explicit reference time (epoch ms).
    ///
    /// Only this view's progress uses `reference_ms`; downstream views still
    /// read the wall clock when they are created.
    pub fn at(source: &'a S, job: &'a Job, reference_ms: u64) -> Self {
        Self { source, job, clock: SystemClock, reference_ms }
    }
}

impl<'a, S: JobSource + ?Sized, C: Clock> JobView<'a, S, C> {
    /// View at the clock's current reading. The clock is sampled again for
    /// every downstream view.
    pub fn with_clock(source: &'a S, job: &'a Job, clock: C) -> Self {
        let reference_ms = clock.epoch_ms();
        Self { source, job, clock, reference_ms }
    }

    pub fn reference_ms(&self) -> u64 {
        self.reference_ms
    }

    pub fn name(&self) -> &'a str {
        self.job.name()
    }

    pub fn url(&self) -> &'a str {
        &self.job.url
    }

    /// Own health and running state, marked failing when any downstream job
    /// is failing and idle.
    pub fn status(&self) -> Status {
        let status = self.own_status();
        if self.downstream_jobs().iter().any(|d| d.status().is_failing_idle()) {
            status.escalated()
        } else {
            status
        }
    }

    pub fn build_name(&self) -> Option<String> {
        self.last_build().map(Build::display_name)
    }

    pub fn build_url(&self) -> Option<&'a str> {
        self.last_build().map(|b| b.url.as_str())
    }

    /// Percentage of the estimated duration elapsed at the reference time.
    ///
    /// 0 when not building; 100 once the estimate is exceeded or when there
    /// is no estimate.
    pub fn progress(&self) -> u8 {
        let Some(build) = self.last_build().filter(|b| b.is_running()) else {
            return 0;
        };

        let Some(elapsed) = self.reference_ms.checked_sub(build.started_at_ms) else {
            return 0;
        };
        let elapsed = i64::try_from(elapsed).unwrap_or(i64::MAX);
        let estimated = build.estimated_duration_ms;

        if elapsed > estimated {
            return 100;
        }
        if estimated > 0 {
            // elapsed <= estimated here, so the quotient is at most 100
            return (elapsed.saturating_mul(100) / estimated) as u8;
        }
        100
    }

    /// Contributors blamed for the failures since the last successful build.
    ///
    /// Builds still running are walked past but not blamed.
    pub fn culprits(&self) -> BTreeSet<String> {
        self.job
            .history()
            .take_while(|build| !build.is_success())
            .filter(|build| !build.is_running())
            .flat_map(|build| build.culprits().iter().cloned())
            .collect()
    }

    /// Change log of the last build as `<commit>: <author> - <message>`.
    pub fn changes(&self) -> Vec<String> {
        self.last_build()
            .map(|build| build.changes().iter().map(|c| c.summary()).collect())
            .unwrap_or_default()
    }

    /// Views of the jobs triggered by this job's last build.
    pub fn downstream_jobs(&self) -> Vec<JobView<'a, S, C>> {
        self.source
            .downstream_of(self.job)
            .into_iter()
            .map(|child| JobView::with_clock(self.source, child, self.clock.clone()))
            .collect()
    }

    /// Evaluate every field into a serializable tree.
    ///
    /// Each downstream job is evaluated once and its status reused for
    /// escalation, so the result matches calling the accessors one by one.
    pub fn to_status(&self) -> JobStatus {
        let downstream_jobs: Vec<JobStatus> =
            self.downstream_jobs().iter().map(|d| d.to_status()).collect();

        let own = self.own_status();
        let status = if downstream_jobs.iter().any(|d| d.status.is_failing_idle()) {
            own.escalated()
        } else {
            own
        };
        tracing::debug!(job = %self.job.id, %status, downstream = downstream_jobs.len(), "evaluated job view");

        JobStatus {
            name: self.name().to_string(),
            url: self.url().to_string(),
            status,
            build_name: self.build_name(),
            build_url: self.build_url().map(str::to_string),
            progress: self.progress(),
            culprits: self.culprits(),
            changes: self.changes(),
            downstream_jobs,
        }
    }

    fn last_build(&self) -> Option<&'a Build> {
        self.job.last_build()
    }

    fn is_running(&self) -> bool {
        self.last_build().is_some_and(Build::is_running)
    }

    /// Result of the last finished build: a running build has none yet, so
    /// look one build back. `None` when that build has no result either.
    fn last_result(&self) -> Option<BuildResult> {
        let mut build = self.last_build();
        if self.is_running() {
            build = build.and_then(|b| self.job.previous_build(b));
        }
        match build {
            Some(build) => build.result,
            None => Some(BuildResult::NotBuilt),
        }
    }

    fn own_status(&self) -> Status {
        let health = if self.last_result().is_some_and(BuildResult::is_success) {
            Health::Successful
        } else {
            Health::Failing
        };
        Status::new(health, self.is_running())
    }
}

impl<S: JobSource + ?Sized, C: Clock> fmt::Display for JobView<'_, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
