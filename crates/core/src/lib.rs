// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bm-core: dashboard view model for build monitoring.
//!
//! Reads a point-in-time snapshot of jobs and their build history and derives
//! the health view rendered by a build monitor: aggregate status, progress,
//! culprits, latest changes and the downstream job tree.

pub mod macros;

pub mod build;
pub mod clock;
pub mod id;
pub mod job;
pub mod result;
pub mod snapshot;
pub mod source;
pub mod status;
pub mod view;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(any(test, feature = "test-support"))]
pub use build::BuildBuilder;
pub use build::{Build, ChangeEntry, ScmRecord};
pub use clock::{Clock, FakeClock, SystemClock};
#[cfg(any(test, feature = "test-support"))]
pub use job::JobBuilder;
pub use job::{Job, JobId};
pub use result::BuildResult;
pub use snapshot::{Snapshot, SnapshotError, SnapshotFormat};
pub use source::JobSource;
pub use status::{Health, Status, UnknownStatus};
pub use view::{JobStatus, JobView};
