//! Shared helpers for CLI specs.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use similar_asserts::assert_eq;

/// Two-level pipeline: `build` (running, previously green) triggers
/// `deploy` (failed, blamed on Ada), plus an unrelated green `docs` job.
pub const PIPELINE_JSON: &str = r#"{
  "jobs": [
    {
      "id": "build",
      "display_name": "Build",
      "url": "job/build/",
      "downstream": ["deploy"],
      "builds": [
        { "number": 8, "url": "job/build/8/", "started_at_ms": 1000, "estimated_duration_ms": 4000, "building": true },
        { "number": 7, "url": "job/build/7/", "started_at_ms": 100, "result": "SUCCESS" }
      ]
    },
    {
      "id": "deploy",
      "url": "job/deploy/",
      "builds": [
        {
          "number": 3,
          "url": "job/deploy/3/",
          "started_at_ms": 500,
          "result": "FAILURE",
          "scm": {
            "culprits": ["Ada Lovelace"],
            "changes": [{ "commit_id": "a1b2", "author": "ada", "message": "Rotate keys" }]
          }
        }
      ]
    },
    {
      "id": "docs",
      "url": "job/docs/",
      "builds": [{ "number": 1, "url": "job/docs/1/", "started_at_ms": 0, "result": "SUCCESS" }]
    }
  ]
}"#;

/// Start a `bm` invocation outside any project directory.
pub fn cli() -> Cli {
    Cli::new(None)
}

/// Temporary directory holding snapshot files.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// `bm` running inside the project directory.
    pub fn bm(&self) -> Cli {
        Cli::new(Some(self.dir.path()))
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    fn new(cwd: Option<&Path>) -> Self {
        let mut cmd = Command::cargo_bin("bm").expect("bm binary");
        cmd.env_remove("BM_SNAPSHOT").env("NO_COLOR", "1").env_remove("COLOR");
        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and assert exit code 0.
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().expect("run bm");
        let run = RunAssert::from(output);
        assert_eq!(run.code, Some(0), "expected success\nstderr: {}", run.stderr);
        run
    }

    /// Run and assert a non-zero exit code.
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().expect("run bm");
        let run = RunAssert::from(output);
        assert_ne!(run.code, Some(0), "expected failure\nstdout: {}", run.stdout);
        run
    }
}

pub struct RunAssert {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.code, Some(expected));
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout is JSON")
    }
}
