//! Content sources
//!
//! A content source yields the file names that become blog slugs. The
//! directory-backed source re-reads the directory on every call.

use super::error::SitemapError;
use super::slug::Slug;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that can list content file names in a stable per-call order
pub trait ContentSource: Send + Sync {
    /// List entry file names, in the order the backing store returns them
    fn list_entries(&self) -> Result<Vec<String>, SitemapError>;
}

/// Lists the entries of a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct DirectorySource {
    path: PathBuf,
}

impl DirectorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for DirectorySource {
    fn list_entries(&self) -> Result<Vec<String>, SitemapError> {
        let read_dir =
            fs::read_dir(&self.path).map_err(|e| SitemapError::directory_read(&self.path, e))?;

        read_dir
            .map(|entry| {
                entry
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .map_err(|e| SitemapError::directory_read(&self.path, e))
            })
            .collect()
    }
}

/// Fixed list of entries, handy when the listing must be deterministic
impl ContentSource for Vec<String> {
    fn list_entries(&self) -> Result<Vec<String>, SitemapError> {
        Ok(self.clone())
    }
}

/// Read every entry from `source` and derive one slug per entry
///
/// Order and cardinality follow the source; duplicates are kept.
pub fn list_slugs(source: &dyn ContentSource) -> Result<Vec<Slug>, SitemapError> {
    let entries = source.list_entries()?;
    Ok(entries.iter().map(|name| Slug::from_file_name(name)).collect())
}
