//! Shared fixture for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ORDER_LOG: &str = "\
event,timestamp,resource,cost,duration
Register Order,2024-01-01 09:00:00,Alice,10,30
Check Stock,2024-01-01 09:00:10,Bob,5.5,12.5
Register Order,2024-01-01 09:00:30,Alice,10,25
Ship,2024-01-01 09:01:00,Carol,20,60
Invoice,2024-01-01 09:01:20,,,15
";

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to a file inside the fixture directory
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// `ceyal` with HOME pointed at the fixture so no user config leaks in
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ceyal").expect("ceyal binary");
        cmd.env("HOME", self.temp_dir.path())
            .env("USERPROFILE", self.temp_dir.path())
            .env_remove("RUST_LOG");
        cmd
    }
}
