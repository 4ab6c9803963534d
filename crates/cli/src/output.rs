// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use bm_core::JobStatus;
use clap::ValueEnum;
use std::fmt::Write;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print evaluated job views in text or JSON format.
pub fn print_statuses(statuses: &[JobStatus], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if statuses.is_empty() {
                println!("No jobs");
            }
            print!("{}", render_text(statuses));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(statuses)?);
        }
    }
    Ok(())
}

/// Render job views as an indented tree, downstream jobs nested under
/// the job that triggers them.
pub fn render_text(statuses: &[JobStatus]) -> String {
    let mut out = String::new();
    for status in statuses {
        render_job(&mut out, status, 0);
    }
    out
}

fn render_job(out: &mut String, job: &JobStatus, depth: usize) {
    let indent = "  ".repeat(depth);

    let mut line = format!("{}{}  {}", indent, crate::color::header(&job.name), crate::color::status(job.status));
    if let Some(build) = &job.build_name {
        line.push_str(&format!("  {}", crate::color::muted(build)));
    }
    if job.status.running {
        line.push_str(&format!("  {}%", job.progress));
    }
    let _ = writeln!(out, "{line}");

    if !job.culprits.is_empty() {
        let names: Vec<&str> = job.culprits.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}  {} {}", indent, crate::color::context("culprits:"), names.join(", "));
    }
    for change in &job.changes {
        let _ = writeln!(out, "{}  * {}", indent, change);
    }

    for child in &job.downstream_jobs {
        render_job(out, child, depth + 1);
    }
}
