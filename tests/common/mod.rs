//! Shared test helpers for integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated home + store directory for one test.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    pub fn db_dir(&self) -> PathBuf {
        self.home.path().join("lottery-db")
    }

    pub fn saved_file(&self, format: &str) -> PathBuf {
        self.db_dir().join(format!("{}.db", format))
    }

    /// The binary with HOME pointed at the sandbox and logs forced to plain
    /// text.
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("lottogen").unwrap();
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("LOG_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Parse a rendered line such as `03, 11, 24, 38, 47 - 02, 09` into its
/// main and extra numbers.
pub fn parse_rendered_line(text: &str) -> (Vec<u32>, Vec<u32>) {
    let body = text.split_once(": ").map(|(_, b)| b).unwrap_or(text);
    let (main, extra) = match body.split_once(" - ") {
        Some((m, e)) => (m, e),
        None => (body, ""),
    };
    let parse = |s: &str| -> Vec<u32> {
        s.split(", ")
            .filter(|p| !p.is_empty())
            .map(|p| p.trim().parse().unwrap())
            .collect()
    };
    (parse(main), parse(extra))
}
