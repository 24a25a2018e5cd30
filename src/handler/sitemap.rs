//! Sitemap endpoint
//!
//! Re-scans the content directory and renders the document on every
//! request. A directory read failure becomes a 500 with no partial output.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

/// Serve the sitemap document
pub async fn serve_sitemap(state: &Arc<AppState>, is_head: bool) -> Response<Full<Bytes>> {
    let builder = state.sitemap.clone();

    // Directory listing is blocking I/O
    match tokio::task::spawn_blocking(move || builder.build()).await {
        Ok(Ok(document)) => {
            logger::log_debug(&format!("Rendered sitemap ({} bytes)", document.len()));
            http::build_sitemap_response(document, is_head)
        }
        Ok(Err(e)) => {
            logger::log_error(&format!("Sitemap unavailable: {e}"));
            http::build_500_response()
        }
        Err(e) => {
            logger::log_error(&format!("Sitemap task failed: {e}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sitemap::{ContentSource, SitemapBuilder};
    use crate::test_support::TempContentDir;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn quiet_config() -> Config {
        Config::from_toml_str("[logging]\naccess_log = false\nlevel = \"error\"").unwrap()
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_serves_rendered_document() {
        let source: Arc<dyn ContentSource> = Arc::new(vec!["hello.md".to_string()]);
        let state = Arc::new(AppState::with_sitemap(
            &quiet_config(),
            SitemapBuilder::new("https://example.com", source),
        ));

        let resp = serve_sitemap(&state, false).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("<loc>https://example.com/blog/hello</loc>"));
    }

    #[tokio::test]
    async fn test_missing_directory_is_500() {
        let dir = TempContentDir::with_files(&[]);
        let missing = dir.path().join("missing");
        let state = Arc::new(AppState::with_sitemap(
            &quiet_config(),
            SitemapBuilder::for_directory("https://example.com", &missing.to_string_lossy()),
        ));

        let resp = serve_sitemap(&state, false).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_string(resp).await.contains("<urlset"));
    }
}
