// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read contract the build system provides to the view model.

use crate::job::{Job, JobId};

/// Read-only access to jobs by id.
///
/// Implementations must be stable for the duration of one view computation;
/// the view model never writes through this trait. Jobs handed out must be
/// normalized (see [`Job::normalize`]) so history reads most recent first.
pub trait JobSource {
    fn job(&self, id: &JobId) -> Option<&Job>;

    /// Jobs directly downstream of the project that owns `job`'s last build,
    /// in the order the project lists them.
    ///
    /// Empty when the job has never built. References that do not resolve
    /// are skipped.
    fn downstream_of(&self, job: &Job) -> Vec<&Job> {
        let Some(last) = job.last_build() else {
            return Vec::new();
        };
        // An unset owning project means the job itself
        let project = if last.job.is_empty() { Some(job) } else { self.job(&last.job) };
        let Some(project) = project else {
            tracing::warn!(job = %job.id, project = %last.job, "owning project not found");
            return Vec::new();
        };
        project
            .downstream
            .iter()
            .filter_map(|id| {
                let found = self.job(id);
                if found.is_none() {
                    tracing::warn!(job = %project.id, downstream = %id, "skipping unknown downstream job");
                }
                found
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
