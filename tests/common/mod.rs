//! Shared testing utilities for mplsgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const UNTAGGED_TOPOLOGY: &str = r#"variant = "untagged"
matrix_name = "EDD-MATRIZ"
matrix_ip = "10.0.0.1"
vlan_id = "100"

[[branches]]
name = "EDD-FILIAL-001"
pw_id = "1001"
ip = "10.0.0.2"

[[branches]]
name = "EDD-FILIAL-002"
pw_id = "1002"
ip = "10.0.0.3"
"#;

#[allow(dead_code)]
pub const TAGGED_TOPOLOGY: &str = r#"{
  "variant": "tagged",
  "matrix_name": "EDD-MATRIZ",
  "matrix_tag": "TRANSPORTE-MATRIZ",
  "matrix_ip": "10.0.0.1",
  "vlan_id": "200",
  "branches": [
    { "name": "EDD-FILIAL-001", "tag": "FILIAL-01", "pw_id": "2001" }
  ]
}
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mplsgen` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mplsgen").expect("Failed to locate mplsgen binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env_remove("MPLSGEN_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}
