// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bm view` - render dashboard views of jobs

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bm_core::{Job, JobStatus, JobView, Snapshot};

use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::{print_statuses, OutputFormat};

#[derive(Args)]
pub struct ViewArgs {
    /// Jobs to show (default: every job not triggered by another)
    pub jobs: Vec<String>,

    /// Snapshot file (JSON, or TOML by extension) [env: BM_SNAPSHOT]
    #[arg(long, short = 's')]
    pub snapshot: Option<PathBuf>,

    /// Reference time in epoch milliseconds for progress (default: now)
    #[arg(long)]
    pub now: Option<u64>,
}

pub fn handle(args: ViewArgs, format: OutputFormat) -> Result<()> {
    let path = super::resolve_snapshot_path(args.snapshot)?;
    let snapshot = super::load_snapshot(&path)?;
    let statuses = evaluate(&snapshot, &args.jobs, args.now)?;
    print_statuses(&statuses, format)
}

/// Evaluate the requested jobs, or the dashboard roots when none are named.
pub fn evaluate(snapshot: &Snapshot, jobs: &[String], now: Option<u64>) -> Result<Vec<JobStatus>> {
    let selected: Vec<&Job> = if jobs.is_empty() {
        snapshot.roots()
    } else {
        jobs.iter()
            .map(|id| {
                snapshot
                    .get(id)
                    .ok_or_else(|| ExitError::new(EXIT_FAILURE, format!("job not found: {id}")))
            })
            .collect::<Result<_, _>>()?
    };

    Ok(selected
        .into_iter()
        .map(|job| match now {
            Some(reference_ms) => JobView::at(snapshot, job, reference_ms).to_status(),
            None => JobView::of(snapshot, job).to_status(),
        })
        .collect())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
