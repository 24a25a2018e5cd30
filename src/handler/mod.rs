//! Request handler module
//!
//! Request routing dispatch and the sitemap endpoint.

pub mod router;
pub mod sitemap;

// Re-export main entry point
pub use router::handle_request;
