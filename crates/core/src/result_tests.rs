// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    success   = { BuildResult::Success,  "SUCCESS" },
    unstable  = { BuildResult::Unstable, "UNSTABLE" },
    failure   = { BuildResult::Failure,  "FAILURE" },
    not_built = { BuildResult::NotBuilt, "NOT_BUILT" },
    aborted   = { BuildResult::Aborted,  "ABORTED" },
)]
fn display_and_serde_agree(result: BuildResult, name: &str) {
    assert_eq!(result.to_string(), name);
    assert_eq!(serde_json::to_string(&result).unwrap(), format!("\"{name}\""));
    let parsed: BuildResult = serde_json::from_str(&format!("\"{name}\"")).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn only_success_is_success() {
    assert!(BuildResult::Success.is_success());
    assert!(!BuildResult::Unstable.is_success());
    assert!(!BuildResult::Failure.is_success());
    assert!(!BuildResult::NotBuilt.is_success());
    assert!(!BuildResult::Aborted.is_success());
}

#[test]
fn ordering_runs_from_best_to_worst() {
    assert!(BuildResult::Failure.is_worse_than(BuildResult::Unstable));
    assert!(BuildResult::Unstable.is_worse_than(BuildResult::Success));
    assert!(BuildResult::Aborted.is_worse_than(BuildResult::NotBuilt));
    assert!(!BuildResult::Success.is_worse_than(BuildResult::Success));
    assert!(BuildResult::Success.is_better_or_equal_to(BuildResult::Success));
    assert!(BuildResult::Unstable.is_better_or_equal_to(BuildResult::Failure));
}
