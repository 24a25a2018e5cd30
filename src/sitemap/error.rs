//! Sitemap error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a sitemap
#[derive(Debug, Error)]
pub enum SitemapError {
    /// The content directory is missing, unreadable, or not a directory
    #[error("failed to read content directory '{}': {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SitemapError {
    pub fn directory_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_read_message() {
        let err = SitemapError::directory_read(
            "./content",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("./content"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = SitemapError::directory_read(
            "/srv/content",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("io error source");
        assert_eq!(source.to_string(), "denied");
    }
}
