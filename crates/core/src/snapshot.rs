// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory job snapshot loaded from a JSON or TOML export.

use crate::job::{Job, JobId};
use crate::source::JobSource;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML snapshot: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("duplicate job: {0}")]
    DuplicateJob(JobId),
    #[error("job {job} has more than one build numbered {number}")]
    DuplicateBuild { job: JobId, number: u32 },
    #[error("build {job} #{number} belongs to unknown project {project}")]
    UnknownProject { job: JobId, number: u32, project: JobId },
    #[error("downstream cycle: {}", join_path(.path))]
    DownstreamCycle { path: Vec<JobId> },
}

fn join_path(path: &[JobId]) -> String {
    path.iter().map(JobId::as_str).collect::<Vec<_>>().join(" -> ")
}

/// On-disk encoding of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    /// `.toml` files are TOML, anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SnapshotFormat::Toml,
            _ => SnapshotFormat::Json,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    jobs: Vec<Job>,
}

/// Jobs keyed by id, in the order the export lists them.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    jobs: IndexMap<JobId, Job>,
}

impl Snapshot {
    /// Build a validated snapshot.
    ///
    /// Histories are sorted most recent first and builds without an owning
    /// project are attributed to their job. Fails on duplicate ids, on builds
    /// owned by unknown projects, and on downstream cycles.
    pub fn new(jobs: Vec<Job>) -> Result<Self, SnapshotError> {
        let mut map = IndexMap::with_capacity(jobs.len());
        for mut job in jobs {
            job.normalize();
            let mut numbers = HashSet::new();
            for build in &job.builds {
                if !numbers.insert(build.number) {
                    return Err(SnapshotError::DuplicateBuild {
                        job: job.id.clone(),
                        number: build.number,
                    });
                }
            }
            if map.contains_key(&job.id) {
                return Err(SnapshotError::DuplicateJob(job.id));
            }
            map.insert(job.id.clone(), job);
        }

        let snapshot = Self { jobs: map };
        snapshot.validate()?;
        tracing::debug!(jobs = snapshot.len(), "snapshot loaded");
        Ok(snapshot)
    }

    pub fn from_json(content: &str) -> Result<Self, SnapshotError> {
        let doc: SnapshotDocument = serde_json::from_str(content)?;
        Self::new(doc.jobs)
    }

    pub fn from_toml(content: &str) -> Result<Self, SnapshotError> {
        let doc: SnapshotDocument = toml::from_str(content)?;
        Self::new(doc.jobs)
    }

    pub fn parse(content: &str, format: SnapshotFormat) -> Result<Self, SnapshotError> {
        match format {
            SnapshotFormat::Json => Self::from_json(content),
            SnapshotFormat::Toml => Self::from_toml(content),
        }
    }

    /// Read a snapshot file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| SnapshotError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&content, SnapshotFormat::from_path(path))
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs no view shows as downstream of another: the top level of a
    /// dashboard.
    pub fn roots(&self) -> Vec<&Job> {
        let referenced: HashSet<&JobId> = self
            .jobs
            .values()
            .flat_map(|job| self.downstream_of(job))
            .map(|child| &child.id)
            .collect();
        self.jobs.values().filter(|job| !referenced.contains(&job.id)).collect()
    }

    /// Check the invariants the view model relies on.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for job in self.jobs.values() {
            for build in &job.builds {
                if !self.jobs.contains_key(&build.job) {
                    return Err(SnapshotError::UnknownProject {
                        job: job.id.clone(),
                        number: build.number,
                        project: build.job.clone(),
                    });
                }
            }
        }
        self.check_acyclic()
    }

    fn check_acyclic(&self) -> Result<(), SnapshotError> {
        let mut marks = HashMap::new();
        let mut path = Vec::new();
        for job in self.jobs.values() {
            self.visit(job, &mut marks, &mut path)?;
        }
        Ok(())
    }

    fn visit<'a>(
        &'a self,
        job: &'a Job,
        marks: &mut HashMap<&'a JobId, Mark>,
        path: &mut Vec<&'a JobId>,
    ) -> Result<(), SnapshotError> {
        match marks.get(&job.id) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Visiting) => {
                let start = path.iter().position(|id| **id == job.id).unwrap_or(0);
                let mut cycle: Vec<JobId> = path[start..].iter().map(|id| (*id).clone()).collect();
                cycle.push(job.id.clone());
                return Err(SnapshotError::DownstreamCycle { path: cycle });
            }
            None => {}
        }

        marks.insert(&job.id, Mark::Visiting);
        path.push(&job.id);
        for child in self.downstream_of(job) {
            self.visit(child, marks, path)?;
        }
        path.pop();
        marks.insert(&job.id, Mark::Done);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

impl JobSource for Snapshot {
    fn job(&self, id: &JobId) -> Option<&Job> {
        self.jobs.get(id)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
