// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single execution of a job, as reported by the build system.

use crate::job::JobId;
use crate::result::BuildResult;
use serde::{Deserialize, Serialize};

/// One entry of a build's change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub commit_id: String,
    pub author: String,
    pub message: String,
}

impl ChangeEntry {
    pub fn new(
        commit_id: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { commit_id: commit_id.into(), author: author.into(), message: message.into() }
    }

    /// One-line summary: `<commit>: <author> - <message>`
    pub fn summary(&self) -> String {
        format!("{}: {} - {}", self.commit_id, self.author, self.message)
    }
}

/// Source-control data attached to builds that track changes.
///
/// Builds without this capability (e.g. ad-hoc runs with no checkout) report
/// no culprits and no changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmRecord {
    /// Full names of contributors blamed for a non-successful outcome
    #[serde(default)]
    pub culprits: Vec<String>,
    /// Change log in the order the build system reports it
    #[serde(default)]
    pub changes: Vec<ChangeEntry>,
}

impl ScmRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn culprit(mut self, name: impl Into<String>) -> Self {
        self.culprits.push(name.into());
        self
    }

    pub fn change(mut self, entry: ChangeEntry) -> Self {
        self.changes.push(entry);
        self
    }
}

/// A build of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub number: u32,
    /// Owning project. Filled with the enclosing job's id when a snapshot
    /// omits it.
    #[serde(default)]
    pub job: JobId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub url: String,
    pub started_at_ms: u64,
    /// Expected duration; zero or negative when the build system has no estimate
    #[serde(default)]
    pub estimated_duration_ms: i64,
    /// `None` while the build has not finished
    #[serde(default)]
    pub result: Option<BuildResult>,
    /// Waiting in the queue, not yet executing
    #[serde(default)]
    pub queued: bool,
    #[serde(default)]
    pub building: bool,
    /// Finished executing but still streaming its console log
    #[serde(default)]
    pub log_updating: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<ScmRecord>,
}

impl Build {
    /// Whether the build is still active: queued, executing, or streaming output.
    pub fn is_running(&self) -> bool {
        self.queued || self.building || self.log_updating
    }

    pub fn is_success(&self) -> bool {
        self.result.is_some_and(BuildResult::is_success)
    }

    /// Display name, falling back to `#<number>` when the build system
    /// did not provide one.
    pub fn display_name(&self) -> String {
        if self.display_name.is_empty() {
            format!("#{}", self.number)
        } else {
            self.display_name.clone()
        }
    }

    /// Culprits attributed to this build, empty without SCM data
    pub fn culprits(&self) -> &[String] {
        self.scm.as_ref().map(|scm| scm.culprits.as_slice()).unwrap_or_default()
    }

    /// Change log of this build, empty without SCM data
    pub fn changes(&self) -> &[ChangeEntry] {
        self.scm.as_ref().map(|scm| scm.changes.as_slice()).unwrap_or_default()
    }
}

crate::builder! {
    pub struct BuildBuilder => Build {
        into {
            job: JobId = "",
            display_name: String = "",
            url: String = "",
        }
        set {
            number: u32 = 1,
            started_at_ms: u64 = 0,
            estimated_duration_ms: i64 = 0,
            queued: bool = false,
            building: bool = false,
            log_updating: bool = false,
        }
        option {
            result: BuildResult = Some(BuildResult::Success),
            scm: ScmRecord = None,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl BuildBuilder {
    /// Mark the build as executing with no result yet.
    pub fn running(mut self) -> Self {
        self.result = None;
        self.building = true;
        self
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
