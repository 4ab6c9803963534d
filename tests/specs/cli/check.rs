//! Snapshot validation specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn check_reports_job_count_and_roots() {
    let temp = Project::empty();
    let snapshot = temp.file("jobs.json", PIPELINE_JSON);

    temp.bm()
        .args(&["check", "--snapshot", snapshot.to_str().unwrap()])
        .passes()
        .stdout_eq("ok: 3 jobs\nroots: build, docs\n");
}

#[test]
fn check_json_output() {
    let temp = Project::empty();
    let snapshot = temp.file("jobs.json", PIPELINE_JSON);

    let run = temp.bm().args(&["check", "-s", snapshot.to_str().unwrap(), "-o", "json"]).passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!({ "ok": true, "jobs": 3, "roots": ["build", "docs"] })
    );
}

#[test]
fn check_rejects_downstream_cycle() {
    let temp = Project::empty();
    let snapshot = temp.file(
        "cycle.toml",
        r#"
[[jobs]]
id = "a"
downstream = ["b"]
builds = [{ number = 1, started_at_ms = 0, result = "SUCCESS" }]

[[jobs]]
id = "b"
downstream = ["a"]
builds = [{ number = 1, started_at_ms = 0, result = "SUCCESS" }]
"#,
    );

    temp.bm()
        .args(&["check", "--snapshot", snapshot.to_str().unwrap()])
        .fails()
        .code(1)
        .stderr_has("downstream cycle: a -> b -> a");
}

#[test]
fn check_without_snapshot_is_usage_error() {
    cli().args(&["check"]).fails().code(2).stderr_has("BM_SNAPSHOT");
}

#[test]
fn check_reads_snapshot_from_env() {
    let temp = Project::empty();
    let snapshot = temp.file("jobs.json", PIPELINE_JSON);

    temp.bm().args(&["check"]).env("BM_SNAPSHOT", &snapshot).passes().stdout_has("ok: 3 jobs");
}

#[test]
fn check_missing_file_fails() {
    let temp = Project::empty();
    temp.bm()
        .args(&["check", "--snapshot", "missing.json"])
        .fails()
        .code(1)
        .stderr_has("failed to read missing.json");
}
