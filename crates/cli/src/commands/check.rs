// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bm check` - validate a snapshot file

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct CheckArgs {
    /// Snapshot file (JSON, or TOML by extension) [env: BM_SNAPSHOT]
    #[arg(long, short = 's')]
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    ok: bool,
    jobs: usize,
    roots: Vec<String>,
}

pub fn handle(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let path = super::resolve_snapshot_path(args.snapshot)?;
    let snapshot = super::load_snapshot(&path)?;

    let report = CheckReport {
        ok: true,
        jobs: snapshot.len(),
        roots: snapshot.roots().iter().map(|job| job.id.to_string()).collect(),
    };

    match format {
        OutputFormat::Text => {
            println!("ok: {} jobs", report.jobs);
            if !report.roots.is_empty() {
                println!("{} {}", crate::color::context("roots:"), report.roots.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
