//! Sitemap server
//!
//! Serves a sitemaps.org document for a blog: the site root, `/about`,
//! `/blog`, and one `/blog/{slug}` entry per file in the content directory.
//! The directory is re-read on every request.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod sitemap;

#[cfg(test)]
mod test_support;
