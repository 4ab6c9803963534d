//! Dashboard view specs
//!
//! Verify status, progress, culprits and downstream rendering end to end.

use crate::prelude::*;
use crate::prelude::assert_eq;

fn pipeline(temp: &Project) -> String {
    temp.file("jobs.json", PIPELINE_JSON).to_str().unwrap().to_string()
}

#[test]
fn view_text_tree_at_fixed_time() {
    let temp = Project::empty();
    let snapshot = pipeline(&temp);

    temp.bm()
        .args(&["view", "--snapshot", snapshot.as_str(), "--now", "2000"])
        .passes()
        .stdout_eq(
            "Build  failing running  #8  25%\n\
             \x20\x20deploy  failing  #3\n\
             \x20\x20\x20\x20culprits: Ada Lovelace\n\
             \x20\x20\x20\x20* a1b2: ada - Rotate keys\n\
             docs  successful  #1\n",
        );
}

#[test]
fn view_json_has_dashboard_shape() {
    let temp = Project::empty();
    let snapshot = pipeline(&temp);

    let run = temp.bm().args(&["view", "build", "-s", snapshot.as_str(), "--now", "3000", "-o", "json"]).passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!([{
            "name": "Build",
            "url": "job/build/",
            "status": "failing running",
            "buildName": "#8",
            "buildUrl": "job/build/8/",
            "progress": 50,
            "culprits": [],
            "changes": [],
            "downstreamJobs": [{
                "name": "deploy",
                "url": "job/deploy/",
                "status": "failing",
                "buildName": "#3",
                "buildUrl": "job/deploy/3/",
                "progress": 0,
                "culprits": ["Ada Lovelace"],
                "changes": ["a1b2: ada - Rotate keys"],
                "downstreamJobs": [],
            }],
        }])
    );
}

#[test]
fn view_is_repeatable_at_fixed_time() {
    let temp = Project::empty();
    let snapshot = pipeline(&temp);
    let args = ["view", "-s", snapshot.as_str(), "--now", "4500", "-o", "json"];

    let first = temp.bm().args(&args).passes().stdout().to_string();
    let second = temp.bm().args(&args).passes().stdout().to_string();
    assert_eq!(first, second);
}

#[test]
fn view_overrun_build_reports_full_progress() {
    let temp = Project::empty();
    let snapshot = pipeline(&temp);

    temp.bm()
        .args(&["view", "build", "-s", snapshot.as_str(), "--now", "999999"])
        .passes()
        .stdout_has("failing running  #8  100%");
}

#[test]
fn view_job_without_builds() {
    let temp = Project::empty();
    let snapshot = temp.file("fresh.toml", "[[jobs]]\nid = \"fresh\"\nurl = \"job/fresh/\"\n");

    let run = temp.bm()
        .args(&["view", "-s", snapshot.to_str().unwrap(), "-o", "json"])
        .passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!([{
            "name": "fresh",
            "url": "job/fresh/",
            "status": "failing",
            "buildName": null,
            "buildUrl": null,
            "progress": 0,
            "culprits": [],
            "changes": [],
            "downstreamJobs": [],
        }])
    );
}

#[test]
fn view_unknown_job_fails() {
    let temp = Project::empty();
    let snapshot = pipeline(&temp);

    temp.bm()
        .args(&["view", "nope", "-s", snapshot.as_str()])
        .fails()
        .code(1)
        .stderr_has("job not found: nope");
}

#[test]
fn view_empty_snapshot() {
    let temp = Project::empty();
    let snapshot = temp.file("empty.json", "{ \"jobs\": [] }");

    temp.bm().args(&["view", "-s", snapshot.to_str().unwrap()]).passes().stdout_eq("No jobs\n");
}

#[test]
fn json_output_is_not_mixed_with_logs() {
    let temp = Project::empty();
    let snapshot = pipeline(&temp);

    let run = temp.bm()
        .args(&["view", "-s", snapshot.as_str(), "--now", "2000", "-o", "json"])
        .env("BM_LOG", "debug")
        .passes();
    assert_eq!(run.stdout_json().as_array().map(Vec::len), Some(2));
}
