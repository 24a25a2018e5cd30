//! Shared helpers for unit tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scratch content directory, removed when dropped
pub struct TempContentDir {
    dir: TempDir,
}

impl TempContentDir {
    /// Create a fresh directory holding empty files with the given names
    pub fn with_files(names: &[&str]) -> Self {
        let dir = Self {
            dir: TempDir::new().expect("create temp content dir"),
        };
        for name in names {
            dir.add_file(name);
        }
        dir
    }

    pub fn add_file(&self, name: &str) {
        fs::write(self.dir.path().join(name), b"").expect("write temp content file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> &str {
        self.path().to_str().expect("temp dir path is UTF-8")
    }
}
