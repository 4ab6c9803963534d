// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard status of a job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Health {
    Successful,
    Failing,
}

crate::simple_display! {
    Health {
        Successful => "successful",
        Failing => "failing",
    }
}

/// Health plus whether the job is currently building.
///
/// Serialized as one of `"successful"`, `"successful running"`, `"failing"`
/// or `"failing running"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Status {
    pub health: Health,
    pub running: bool,
}

impl Status {
    pub fn new(health: Health, running: bool) -> Self {
        Self { health, running }
    }

    /// Failing and not building: the only downstream state that marks the
    /// upstream job as failing too.
    pub fn is_failing_idle(&self) -> bool {
        self.health == Health::Failing && !self.running
    }

    /// Same status with the health forced to failing; the running flag is kept.
    pub fn escalated(self) -> Self {
        Self { health: Health::Failing, ..self }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.running {
            write!(f, "{} running", self.health)
        } else {
            write!(f, "{}", self.health)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "successful" => Ok(Status::new(Health::Successful, false)),
            "successful running" => Ok(Status::new(Health::Successful, true)),
            "failing" => Ok(Status::new(Health::Failing, false)),
            "failing running" => Ok(Status::new(Health::Failing, true)),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.to_string()
    }
}

impl TryFrom<String> for Status {
    type Error = UnknownStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
