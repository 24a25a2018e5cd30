// Application state module
// Shared, read-mostly state handed to every connection

use super::types::Config;
use crate::sitemap::SitemapBuilder;

/// Application state
pub struct AppState {
    pub config: Config,
    pub sitemap: SitemapBuilder,
}

impl AppState {
    /// Create `AppState` serving sitemaps from the configured content directory
    pub fn new(config: &Config) -> Self {
        let sitemap =
            SitemapBuilder::for_directory(&config.sitemap.base_url, &config.sitemap.content_dir);
        Self::with_sitemap(config, sitemap)
    }

    /// Create `AppState` with an explicit sitemap builder
    pub fn with_sitemap(config: &Config, sitemap: SitemapBuilder) -> Self {
        Self {
            config: config.clone(),
            sitemap,
        }
    }
}
