//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test working directory
///
/// Creates a temporary directory for a test run and provides
/// utilities for setting up scenarios.
pub struct TestDir {
    /// Temporary directory backing the test
    pub dir: TempDir,
}

impl TestDir {
    /// Create a new empty test directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test directory
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test directory
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test directory
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A directory listing page the upstream server could plausibly serve
#[allow(dead_code)]
pub const SAMPLE_LISTING: &str = r#"<html>
<head><title>Index of /pub/global_topo_1min</title></head>
<body>
<a href="../">../</a>
<a href="README_V18.1.txt">README_V18.1.txt</a>
<a href="COPYRIGHT.txt">COPYRIGHT.txt</a>
<a href="permissions.txt">permissions.txt</a>
<a href="topo_18.1.img">topo_18.1.img</a>
</body>
</html>
"#;
