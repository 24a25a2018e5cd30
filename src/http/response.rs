//! HTTP response building module
//!
//! Builders for every response the server emits. A builder never panics:
//! if assembling the response fails the error is logged and a bare response
//! is returned instead.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{ALLOW, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};

/// Cache policy for the sitemap: always revalidate in browsers, 10 minutes at shared caches
pub const SITEMAP_CACHE_CONTROL: &str = "max-age=0, s-max-age=600";

/// Content type sent with the sitemap document
pub const SITEMAP_CONTENT_TYPE: &str = "application/rss+xml";

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Build 200 sitemap response
///
/// Sets exactly `Cache-Control` and `Content-Type`. HEAD responses carry no
/// body, so they also announce the length the GET body would have.
pub fn build_sitemap_response(document: String, is_head: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CACHE_CONTROL, SITEMAP_CACHE_CONTROL)
        .header(CONTENT_TYPE, SITEMAP_CONTENT_TYPE);

    let body = if is_head {
        builder = builder.header(CONTENT_LENGTH, document.len());
        Bytes::new()
    } else {
        Bytes::from(document)
    };

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("sitemap", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 200 health check response
pub fn build_health_response(status: &'static str) -> Response<Full<Bytes>> {
    plain_text(StatusCode::OK, status)
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    plain_text(StatusCode::NOT_FOUND, "404 Not Found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header(CONTENT_TYPE, "text/plain")
        .header(ALLOW, ALLOWED_METHODS)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    plain_text(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(ALLOW, ALLOWED_METHODS)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn plain_text(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            let mut resp = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
            *resp.status_mut() = status;
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
