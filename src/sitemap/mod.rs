//! Sitemap builder
//!
//! Lists content entries through a [`ContentSource`], derives one [`Slug`]
//! per entry and renders the sitemap document. Nothing is cached: every
//! call to [`SitemapBuilder::build`] re-reads the source.

mod error;
mod render;
mod slug;
mod source;

pub use error::SitemapError;
pub use render::{render, BLOG_PREFIX, STATIC_PATHS};
pub use slug::Slug;
pub use source::{list_slugs, ContentSource, DirectorySource};

use std::sync::Arc;

/// Builds sitemap documents for one site
#[derive(Clone)]
pub struct SitemapBuilder {
    base_url: String,
    source: Arc<dyn ContentSource>,
}

impl SitemapBuilder {
    pub fn new(base_url: impl Into<String>, source: Arc<dyn ContentSource>) -> Self {
        Self {
            base_url: base_url.into(),
            source,
        }
    }

    /// Builder reading slugs from a directory on disk
    pub fn for_directory(base_url: impl Into<String>, content_dir: &str) -> Self {
        Self::new(base_url, Arc::new(DirectorySource::new(content_dir)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the content source and render the full document
    pub fn build(&self) -> Result<String, SitemapError> {
        let slugs = list_slugs(self.source.as_ref())?;
        Ok(render(&self.base_url, &slugs))
    }
}

impl std::fmt::Debug for SitemapBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SitemapBuilder")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempContentDir;

    const BASE: &str = "https://www.frontend-devops.com";

    #[test]
    fn test_build_from_directory() {
        let dir = TempContentDir::with_files(&["a.md", "b.md", "c.txt"]);
        let builder = SitemapBuilder::for_directory(BASE, dir.path_str());

        let xml = builder.build().unwrap();
        assert_eq!(xml.matches("<url>").count(), 6);
        for slug in ["a", "b", "c"] {
            let loc = format!("<loc>{BASE}/blog/{slug}</loc>");
            assert_eq!(xml.matches(&loc).count(), 1, "missing {loc}");
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let dir = TempContentDir::with_files(&["first.md", "second.md"]);
        let builder = SitemapBuilder::for_directory(BASE, dir.path_str());
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }

    #[test]
    fn test_build_sees_new_files() {
        let dir = TempContentDir::with_files(&["first.md"]);
        let builder = SitemapBuilder::for_directory(BASE, dir.path_str());

        let before = builder.build().unwrap();
        assert!(!before.contains("/blog/second<"));

        dir.add_file("second.md");
        let after = builder.build().unwrap();
        assert!(after.contains("/blog/second</loc>"));
    }

    #[test]
    fn test_build_with_stub_source() {
        let source: Arc<dyn ContentSource> =
            Arc::new(vec!["README".to_string(), "my.post.md".to_string()]);
        let builder = SitemapBuilder::new("https://staging.example.com", source);

        let xml = builder.build().unwrap();
        assert!(xml.contains("<loc>https://staging.example.com/blog/README</loc>"));
        assert!(xml.contains("<loc>https://staging.example.com/blog/my</loc>"));
        assert_eq!(builder.base_url(), "https://staging.example.com");
    }

    #[test]
    fn test_build_fails_without_directory() {
        let dir = TempContentDir::with_files(&[]);
        let missing = dir.path().join("gone");
        let builder = SitemapBuilder::for_directory(BASE, &missing.to_string_lossy());
        assert!(matches!(
            builder.build(),
            Err(SitemapError::DirectoryRead { .. })
        ));
    }
}
