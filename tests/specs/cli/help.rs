//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn bm_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn bm_help_lists_commands() {
    cli().args(&["--help"]).passes().stdout_has("view").stdout_has("check");
}

#[test]
fn bm_view_help_shows_options() {
    cli()
        .args(&["view", "--help"])
        .passes()
        .stdout_has("--snapshot")
        .stdout_has("--now");
}

#[test]
fn bm_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
