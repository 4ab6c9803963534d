// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identity and build history.

use crate::build::Build;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Name of a job as the build system knows it.
    ///
    /// Unique within a snapshot and used for downstream references.
    #[derive(Default)]
    pub struct JobId;
}

/// A schedulable build definition with its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub url: String,
    /// Most recent build first
    #[serde(default)]
    pub builds: Vec<Build>,
    /// Jobs triggered by this one
    #[serde(default)]
    pub downstream: Vec<JobId>,
}

impl Job {
    /// Display name if set, else the raw id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }

    pub fn last_build(&self) -> Option<&Build> {
        self.builds.first()
    }

    /// The build that ran before `build`, following the history back-link.
    ///
    /// Expects builds in most-recent-first order, see [`Job::normalize`].
    pub fn previous_build(&self, build: &Build) -> Option<&Build> {
        let index = self.builds.iter().position(|b| b.number == build.number)?;
        self.builds.get(index + 1)
    }

    /// Walk history from the last build backwards.
    pub fn history(&self) -> impl Iterator<Item = &Build> {
        self.builds.iter()
    }

    /// Order builds most recent first and default each build's owning
    /// project to this job.
    ///
    /// `Snapshot` does this on load. Other `JobSource` implementations must
    /// call it on every job they hand out before views read them.
    pub fn normalize(&mut self) {
        self.builds.sort_by(|a, b| b.number.cmp(&a.number));
        for build in &mut self.builds {
            if build.job.is_empty() {
                build.job = self.id.clone();
            }
        }
    }
}

crate::builder! {
    pub struct JobBuilder => Job {
        into {
            id: JobId = "job",
            url: String = "job/job/",
        }
        set {
            builds: Vec<Build> = Vec::new(),
            downstream: Vec<JobId> = Vec::new(),
        }
        option {
            display_name: String = None,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl JobBuilder {
    /// Append a build; call in most-recent-first order.
    pub fn build_entry(mut self, build: Build) -> Self {
        self.builds.push(build);
        self
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
